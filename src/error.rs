//! Error types for the hashtags pipeline

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type of the crate
///
/// Every variant names the stage it came from and the subject (document,
/// word or path) so a failed run can be diagnosed from the message alone.
#[derive(Error, Debug)]
pub enum HashtagError {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("failed to read document `{document}`: {source}")]
    Io {
        document: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write report to `{}`: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("failed to build match pattern for `{word}`: {source}")]
    Pattern {
        word: String,
        #[source]
        source: regex::Error,
    },

    #[error("serialization error: {message}")]
    Serialization { message: String },
}

impl HashtagError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        HashtagError::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for HashtagError {
    fn from(err: serde_json::Error) -> Self {
        HashtagError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_cbor::Error> for HashtagError {
    fn from(err: serde_cbor::Error) -> Self {
        HashtagError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for HashtagError {
    fn from(err: toml::de::Error) -> Self {
        HashtagError::Config {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HashtagError>;
