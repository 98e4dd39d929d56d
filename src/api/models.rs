use serde::{Deserialize, Serialize};

/// Envelope the gateway returns for its own failures. Upstream bodies
/// are relayed verbatim and never rewrapped.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
