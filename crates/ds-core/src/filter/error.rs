use thiserror::Error;

use crate::notification::{Notification, Variant};

/// Failure reasons raised by the filter model, the filter manager and the
/// snapshot filtering engine.
///
/// `Validation`, `AlreadyAdded` and `NotFound` are recoverable: the store
/// converts them into a [`Notification`]. `Conflict` and `NotImplemented`
/// are defects and must reach the caller untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    AlreadyAdded(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotImplemented(String),
}

impl FilterError {
    /// Defects are never converted into user notifications.
    pub fn is_defect(&self) -> bool {
        matches!(self, FilterError::Conflict(_) | FilterError::NotImplemented(_))
    }

    /// Severity tag shown by the notification surface.
    pub fn variant(&self) -> Variant {
        match self {
            FilterError::AlreadyAdded(_) => Variant::Warning,
            _ => Variant::Error,
        }
    }

    pub fn to_notification(&self) -> Notification {
        Notification::new(self.to_string(), self.variant())
    }
}
