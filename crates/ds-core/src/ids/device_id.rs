use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Backend identifier of a device, passed through unmodified from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl_id!(DeviceId);
