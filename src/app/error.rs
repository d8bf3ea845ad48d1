use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum FavError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error(transparent)]
    LoadConfig(#[from] ConfigError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown resource family: {0}")]
    UnknownResource(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, FavError>;
