use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsdeskError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP {code}: {message}")]
    Status { code: u16, message: &'static str },

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Unparseable date: {0}")]
    DateFormat(String),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Podcast not found: {0}")]
    PodcastNotFound(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, NewsdeskError>;
