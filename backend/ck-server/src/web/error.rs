//! Page-level error types
//!
//! Errors that end a request early. Backend failures that the operator should
//! see in context (fetch banner, mutation alert) are rendered by the handlers
//! instead.

use ck_core::CoreError;
use ck_core::gate::LOGIN_PATH;

use std::panic::Location;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use error_location::ErrorLocation;
use minijinja::HtmlEscape;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebError {
    /// Unknown touchpoint, malformed or unknown record (404)
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Same transition already in flight for this session (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// No session on a protected handler; sends the operator to login
    #[error("No session on protected request {location}")]
    Unauthenticated { location: ErrorLocation },

    /// Template failed to render (500)
    #[error("Template error: {message} {location}")]
    Template {
        message: String,
        location: ErrorLocation,
    },
}

impl WebError {
    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        WebError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict(message: impl Into<String>) -> Self {
        WebError::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthenticated() -> Self {
        WebError::Unauthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            WebError::NotFound { .. } => StatusCode::NOT_FOUND,
            WebError::Conflict { .. } => StatusCode::CONFLICT,
            WebError::Unauthenticated { .. } => StatusCode::SEE_OTHER,
            WebError::Template { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        if let WebError::Unauthenticated { .. } = self {
            log::warn!("{}", self);
            return Redirect::to(LOGIN_PATH).into_response();
        }

        log::error!("{}", self);

        let status = self.status();
        let message = match self {
            WebError::NotFound { message, .. } | WebError::Conflict { message, .. } => message,
            // Template internals stay in the log
            _ => String::from("Something went wrong"),
        };

        let body = format!(
            "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">\
             <title>{code}</title></head><body><main class=\"error\">\
             <h1>{code}</h1><p>{message}</p><p><a href=\"/dashboard\">Back to dashboard</a></p>\
             </main></body></html>",
            code = status,
            message = HtmlEscape(&message),
        );

        (status, Html(body)).into_response()
    }
}

impl From<minijinja::Error> for WebError {
    #[track_caller]
    fn from(err: minijinja::Error) -> Self {
        WebError::Template {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for WebError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        WebError::NotFound {
            message: match err {
                CoreError::UnknownTouchpoint { value, .. } => {
                    format!("Unknown check-in screen '{}'", value)
                }
                CoreError::Validation { message, .. } => message,
            },
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, WebError>;
