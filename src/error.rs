use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no OAuth2 token supplied")]
    MissingCredential,

    #[error("{service} service returned {status}: {body}")]
    Status {
        service: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("{resource} listing returned no items")]
    EmptyResultSet { resource: &'static str },

    #[error("{resource} {found} does not belong to {expected}")]
    IdentifierMismatch {
        resource: &'static str,
        expected: String,
        found: String,
    },

    #[error("match start time before {now} is out of range")]
    StartOutOfRange { now: chrono::DateTime<chrono::Utc> },

    #[error("scenario cancelled by shutdown signal")]
    Cancelled,

    #[error("virtual user task failed: {0}")]
    UserTask(#[from] tokio::task::JoinError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
