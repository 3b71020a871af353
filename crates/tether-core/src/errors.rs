//! Unified error system for Tether core
//!
//! A single error type crosses every effect-handler boundary. Domain-specific
//! failures (such as options payload parsing) carry their own typed errors
//! and convert into this one at the dispatch seam.

use crate::options::OptionsError;
use serde::{Deserialize, Serialize};

/// Unified error type for all Tether operations
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum TetherError {
    /// Invalid input or configuration
    #[error("Invalid: {message}")]
    Invalid {
        /// Error message describing the invalid input
        message: String,
    },

    /// Payload decoding or parsing failed
    #[error("Parse error: {message}")]
    Parse {
        /// Error message describing the parse failure
        message: String,
    },

    /// A host capability call failed
    #[error("Capability error: {message}")]
    Capability {
        /// Error message describing the capability failure
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Error message describing the internal error
        message: String,
    },
}

impl TetherError {
    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a capability error
    pub fn capability(message: impl Into<String>) -> Self {
        Self::Capability {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<OptionsError> for TetherError {
    fn from(err: OptionsError) -> Self {
        Self::Parse {
            message: err.to_string(),
        }
    }
}
