//! Node errors

use thiserror::Error;

/// Errors raised while bringing up a link node.
#[derive(Debug, Error)]
pub enum NodeError {
    /// Settings file could not be read.
    #[error("config read failed: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file held invalid JSON.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}
