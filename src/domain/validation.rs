use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidFormat { field: &'static str },
    ChecksumMismatch { field: &'static str },
    UnknownReference { field: &'static str, code: String },
    UnknownKind { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidFormat { field } => write!(f, "{field} has an invalid format"),
            Self::ChecksumMismatch { field } => write!(f, "{field} check digit does not match"),
            Self::UnknownReference { field, code } => {
                write!(f, "{field} references an unknown code: {code}")
            }
            Self::UnknownKind { input } => write!(f, "unknown identifier kind: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}
