use std::fmt::{Display, Formatter};
use std::error::Error as StdError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    NoneError,
    SystemError,
    Unauthorized,
    Forbidden,
    BadRequest,
}

#[derive(Debug)]
pub struct Error {
    pub error_type: ErrorType,
    pub error: String,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.error_type {
            ErrorType::NoneError => write!(f, "NoneError : {}", self.error),
            ErrorType::SystemError => write!(f, "SystemError : {}", self.error),
            ErrorType::Unauthorized => write!(f, "Unauthorized  : {}", self.error),
            ErrorType::Forbidden => write!(f, "Forbidden  : {}", self.error),
            ErrorType::BadRequest => write!(f, "Bad Request  : {}", self.error),
        }
    }
}

impl StdError for Error {}

impl Error {
    pub fn new(error_type: ErrorType, error: &str) -> Self {
        Self {
            error_type,
            error: error.to_string(),
        }
    }
    pub fn none_error(error: &str) -> Self {
        Self::new(ErrorType::NoneError, error)
    }
    pub fn bad_request(error: &str) -> Self {
        Self::new(ErrorType::BadRequest, error)
    }
    pub fn unauthorized(error: &str) -> Self {
        Self::new(ErrorType::Unauthorized, error)
    }
}

/// The domain kind carried by an `anyhow` error, `SystemError` for anything else.
pub fn kind_of(e: &anyhow::Error) -> ErrorType {
    e.downcast_ref::<Error>()
        .map(|x| x.error_type)
        .unwrap_or(ErrorType::SystemError)
}
