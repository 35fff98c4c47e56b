use super::error::{Error, ErrorType};
use super::response::Response;
use axum::{
    http::StatusCode,
    response::{
        Response as AxumResponse,
        IntoResponse
    }
};

use std::convert::From;
use std::fmt::{Debug, Display, Formatter};

#[derive(Debug)]
pub struct ErrorResponse {
    status: StatusCode,
    info: String,
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> AxumResponse {
        let mut resp = Response::from_msg(self.info.as_str()).into_response();
        *resp.status_mut() = self.status;
        resp
    }
}

impl Display for ErrorResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.info)
    }
}

impl From<Error> for ErrorResponse {
    fn from(e: Error) -> Self {
        match e.error_type {
            ErrorType::NoneError => ErrorResponse::not_found_with_str(e.error.as_str()),
            ErrorType::SystemError => ErrorResponse::server_error_with_str(e.error.as_str()),
            ErrorType::Unauthorized => ErrorResponse::unauthorized_with_str(e.error.as_str()),
            ErrorType::Forbidden => ErrorResponse::forbidden_with_str(e.error.as_str()),
            ErrorType::BadRequest => ErrorResponse::bad_request_with_str(e.error.as_str()),
        }
    }
}

impl From<anyhow::Error> for ErrorResponse {
    fn from(e: anyhow::Error) -> Self {
        match e.downcast::<Error>() {
            Ok(err) => err.into(),
            Err(e) => ErrorResponse::server_error_with_str(format!("{}", e).as_str()),
        }
    }
}

impl ErrorResponse {
    pub fn new(status: StatusCode, info: String) -> Self {
        Self { status, info }
    }
    pub fn status(&self) -> StatusCode {
        self.status
    }
    pub fn info(&self) -> &str {
        self.info.as_str()
    }
    pub fn not_found_with_str(err: &str) -> Self {
        ErrorResponse::new(StatusCode::NOT_FOUND, err.to_string())
    }
    pub fn server_error_with_str(err: &str) -> Self {
        ErrorResponse::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    }
    pub fn forbidden_with_str(err: &str) -> Self {
        ErrorResponse::new(StatusCode::FORBIDDEN, err.to_string())
    }
    pub fn unauthorized_with_str(err: &str) -> Self {
        ErrorResponse::new(StatusCode::UNAUTHORIZED, err.to_string())
    }
    pub fn bad_request_with_str(err: &str) -> Self {
        ErrorResponse::new(StatusCode::BAD_REQUEST, err.to_string())
    }
}
