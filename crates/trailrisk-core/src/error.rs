use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown {field} value: {value:?}")]
    UnknownEnumValue { field: &'static str, value: String },
}

impl AssessmentError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn unknown(field: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownEnumValue {
            field,
            value: value.into(),
        }
    }

    /// Stable machine-readable tag for the error kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::UnknownEnumValue { .. } => "unknown_enum_value",
        }
    }
}
