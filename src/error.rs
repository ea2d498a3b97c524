/// An error from an unsuccessful field operation
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum UuidFieldErr {
    /// The field was constructed with an invalid configuration
    Config(String),
    /// A value could not be generated from the configured parameters
    Generation(String),
    /// A stored or user-supplied value could not be parsed as a UUID
    Parse(String),
}

impl std::error::Error for UuidFieldErr {}

impl std::fmt::Display for UuidFieldErr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Config(s) => write!(f, "Config Error: {}", s),
            Self::Generation(s) => write!(f, "Generation Error: {}", s),
            Self::Parse(s) => write!(f, "Parse Error: {}", s),
        }
    }
}
