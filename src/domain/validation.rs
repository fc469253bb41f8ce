use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    NotNumeric { field: &'static str, input: String },
    InvalidSenderName { input: String },
    InvalidPhoneNumber { input: String },
    InvalidSmsId { input: String },
    InvalidBaseUrl { input: String, reason: String },
    TooManyItems {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    DuplicatePhoneNumbers { duplicates: Vec<String> },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::NotNumeric { field, input } => write!(f, "{field} must be numeric: {input}"),
            Self::InvalidSenderName { input } => write!(f, "invalid sender name: {input}"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidSmsId { input } => write!(f, "invalid sms id: {input}"),
            Self::InvalidBaseUrl { input, reason } => {
                write!(f, "invalid base url {input}: {reason}")
            }
            Self::TooManyItems { field, max, actual } => {
                write!(f, "too many {field} entries: {actual} (max {max})")
            }
            Self::DuplicatePhoneNumbers { duplicates } => {
                write!(f, "duplicate phone numbers: {}", duplicates.join(", "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}
