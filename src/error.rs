// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeployError {
    #[error("deploy request failed: {0}")]
    Network(String),
    #[error("deploy endpoint answered HTTP {status}")]
    Status { status: u16 },
    #[error("could not decode deploy response: {0}")]
    Decode(String),
    #[error("deploy response carried an empty siteUrl")]
    EmptySiteUrl,
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,
    #[error("clipboard write rejected (HTTPS + user gesture required in some browsers)")]
    Rejected,
}
