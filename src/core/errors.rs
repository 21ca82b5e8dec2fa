use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum ServiceError {
    // Input was empty where a value is required, e.g. uppercasing "".
    EmptyInput {
        message: String,
    },
    NotFound {
        message: String,
    },
}

pub const EMPTY_STRING_MESSAGE: &str = "empty string";

impl ServiceError {
    pub fn empty_input() -> ServiceError {
        ServiceError::EmptyInput { message: EMPTY_STRING_MESSAGE.to_string() }
    }

    pub fn not_found(message: &str) -> ServiceError {
        ServiceError::NotFound { message: message.to_string() }
    }

    // description is what commands embed into the `err` field of a response.
    pub fn description(&self) -> String {
        match self {
            ServiceError::EmptyInput { message } => message.to_string(),
            ServiceError::NotFound { message } => message.to_string(),
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::EmptyInput { message } => {
                write!(f, "{}", message)
            }
            ServiceError::NotFound { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for ServiceError {}

/// A specialized Result type for domain services.
pub type ServiceResult<T> = Result<T, ServiceError>;
