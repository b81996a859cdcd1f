use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    Zero { field: &'static str },
    InvalidPhoneNumber { input: String },
    InvalidPhoneNumbers { inputs: Vec<String> },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::Zero { field } => write!(f, "{field} must be a positive number"),
            Self::InvalidPhoneNumber { input } => write!(
                f,
                "invalid phone number format: {input}. Phone numbers must start with + and be in E.164 format."
            ),
            Self::InvalidPhoneNumbers { inputs } => write!(
                f,
                "invalid phone number format: {}. Phone numbers must start with + and be in E.164 format.",
                inputs.join(", ")
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
