use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Presentation-facing outcome of a mutation.
///
/// Only business-rule rejections are folded into `success = false`; store
/// faults stay on the `Err` side of [`MutationResult::from_result`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResult {
    pub success: bool,
    pub message: String,
}

impl MutationResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    pub fn from_result<T>(result: Result<T>, success_message: &str) -> Result<Self> {
        match result {
            Ok(_) => Ok(Self::ok(success_message)),
            Err(Error::Rejected(rejection)) => Ok(Self::rejected(rejection.to_string())),
            Err(e) => Err(e),
        }
    }
}
