use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use failure::Fail;
use log::{error, warn};
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, Fail, PartialEq)]
pub enum ApiError {
    #[fail(display = "bad request")]
    BadRequest,
    #[fail(display = "resource not found")]
    NotFound,
    #[fail(display = "method not allowed")]
    MethodNotAllowed,
    #[fail(display = "unprocessable")]
    Unprocessable,
    #[fail(display = "internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            success: false,
            error: self.status_code().as_u16(),
            message: self.to_string(),
        })
    }
}

impl ApiError {
    pub fn internal(e: impl fmt::Display) -> ApiError {
        error!("internal error: {}", e);
        ApiError::Internal
    }

    pub fn unprocessable(e: impl fmt::Display) -> ApiError {
        warn!("write rejected: {}", e);
        ApiError::Unprocessable
    }

    pub fn from_blocking(e: BlockingError<ApiError>) -> ApiError {
        match e {
            BlockingError::Error(e) => e,
            BlockingError::Canceled => ApiError::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ApiError::BadRequest.status_code().as_u16(), 400);
        assert_eq!(ApiError::NotFound.status_code().as_u16(), 404);
        assert_eq!(ApiError::MethodNotAllowed.status_code().as_u16(), 405);
        assert_eq!(ApiError::Unprocessable.status_code().as_u16(), 422);
        assert_eq!(ApiError::Internal.status_code().as_u16(), 500);
    }

    #[test]
    fn messages() {
        assert_eq!(ApiError::BadRequest.to_string(), "bad request");
        assert_eq!(ApiError::NotFound.to_string(), "resource not found");
        assert_eq!(ApiError::MethodNotAllowed.to_string(), "method not allowed");
        assert_eq!(ApiError::Unprocessable.to_string(), "unprocessable");
        assert_eq!(ApiError::Internal.to_string(), "internal server error");
    }

    #[test]
    fn blocking_errors_unwrap_to_the_inner_kind() {
        assert_eq!(
            ApiError::from_blocking(BlockingError::Error(ApiError::NotFound)),
            ApiError::NotFound
        );
        assert_eq!(
            ApiError::from_blocking(BlockingError::Canceled),
            ApiError::Internal
        );
    }
}
