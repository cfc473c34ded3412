//! Messages handed to the notification surface.

use serde::{Deserialize, Serialize};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Error,
    Warning,
    Default,
    Success,
    Info,
}

/// A `{message, variant}` pair.
///
/// The empty notification (`message == ""`, `variant == None`) means
/// "nothing to show".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub variant: Option<Variant>,
}

impl Notification {
    pub fn new(message: impl Into<String>, variant: Variant) -> Self {
        Self {
            message: message.into(),
            variant: Some(variant),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Variant::Error)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Variant::Warning)
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_empty() && self.variant.is_none()
    }
}
