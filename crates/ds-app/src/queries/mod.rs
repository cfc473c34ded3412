//! GraphQL documents and the mapping of their payloads to domain models.

pub mod device_infos;
pub mod snapshot_infos;

use thiserror::Error;

pub use device_infos::{decode_device, device_variables, DEVICE_INFOS, DEVICE_NOT_FOUND};
pub use snapshot_infos::{
    decode_snapshot, snapshot_variables, SNAPSHOT_INFOS, SNAPSHOT_MALFORMED, SNAPSHOT_NOT_FOUND,
};

/// Reason a fetch was rejected, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct FetchRejection(pub String);

impl FetchRejection {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn into_message(self) -> String {
        self.0
    }
}
