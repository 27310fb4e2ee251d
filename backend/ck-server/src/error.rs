use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] ck_config::ConfigError),

    #[error("Backend client error: {0}")]
    Client(#[from] ck_client::ClientError),

    #[error("Template error: {message} {location}")]
    Template {
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl From<minijinja::Error> for ServerError {
    #[track_caller]
    fn from(err: minijinja::Error) -> Self {
        ServerError::Template {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
