use thiserror::Error;

pub type AskboxResult<T> = Result<T, AskboxError>;

/// Crate-level error for everything outside a single ask round trip.
#[derive(Debug, Error)]
pub enum AskboxError {
    #[error("api error: {0}")]
    Api(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("logging error: {0}")]
    Logging(String),

    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AskboxError {
    pub fn api_error(msg: impl Into<String>) -> Self {
        AskboxError::Api(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        AskboxError::Config(msg.into())
    }

    pub fn logging_error(msg: impl Into<String>) -> Self {
        AskboxError::Logging(msg.into())
    }
}

/// Failure of one ask round trip. The variants exist for logging; the
/// widget renders every one of them as the same fixed bot message.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed reply: {0}")]
    MalformedReply(#[from] serde_json::Error),
}
