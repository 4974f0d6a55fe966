//! Error types for the anchnet transport

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the api module
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to anchnet
#[derive(Error, Debug)]
pub enum Error {
    /// The request names an action that is not in the catalog
    #[error("Unknown request type: {0}")]
    UnknownAction(String),

    /// The request could not be encoded as JSON
    #[error("Failed to encode request: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Network, TLS or IO failure during the HTTP exchange
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body is not the JSON shape we expected
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The server answered with a nonzero status code
    #[error("Server returns error code {code}: {message}")]
    Api { code: i64, message: String },

    /// The credentials file could not be read
    #[error("Failed to read config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The credentials file is not valid JSON
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[source] serde_json::Error),

    /// A polled job reached the failed state
    #[error("Job {0} failed")]
    JobFailed(String),

    /// A polled job never reached the desired state
    #[error("Time out waiting for job {job_id} after {attempts} attempts")]
    JobTimeout { job_id: String, attempts: u32 },
}

impl Error {
    /// Status code reported by the server, if this is an application error
    pub fn code(&self) -> Option<i64> {
        match self {
            Error::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}
