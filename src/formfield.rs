/// The widget kind a form renders for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    /// A plain text input
    Text,
}

/// Describes the form widget for a field.
///
/// This is a descriptor only; rendering is the hosting framework's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub(crate) input_type: InputType,
    pub(crate) max_length: u32,
    pub(crate) required: bool,
}

impl FormField {
    /// A required text input of the given maximum length
    pub fn text(max_length: u32) -> Self {
        Self {
            input_type: InputType::Text,
            max_length,
            required: true,
        }
    }

    /// Override the maximum input length
    pub fn max_length(mut self, max_length: u32) -> Self {
        self.max_length = max_length;
        self
    }

    /// Override whether the input is required
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// The widget kind
    pub fn get_input_type(&self) -> InputType {
        self.input_type
    }

    /// The maximum input length
    pub fn get_max_length(&self) -> u32 {
        self.max_length
    }

    /// Returns true if the input is required
    pub fn is_required(&self) -> bool {
        self.required
    }
}
