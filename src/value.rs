use uuid::Uuid;

/// A UUID value in one of its wire/storage representations.
///
/// The three variants are lossless encodings of the same 128-bit value:
/// the backend's native UUID, raw 16 bytes, or 32 hexadecimal characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A UUID value object, passed through to a native UUID column
    Uuid(Uuid),
    /// Raw bytes bound for a binary column
    Bytes(Vec<u8>),
    /// Hexadecimal text, dashed or undashed
    Text(String),
}

impl Value {
    /// Returns true for an empty text or byte value
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Uuid(_) => false,
            Self::Bytes(b) => b.is_empty(),
            Self::Text(s) => s.is_empty(),
        }
    }

    /// Borrow the inner UUID, if this is the native representation
    pub fn as_uuid(&self) -> Option<&Uuid> {
        match self {
            Self::Uuid(v) => Some(v),
            _ => None,
        }
    }

    /// Borrow the inner bytes, if this is the binary representation
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Borrow the inner text, if this is the textual representation
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Self::Uuid(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}
