//! # ds-core
//!
//! Core domain models and business logic for devsnap.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod config;
pub mod device;
pub mod filter;
pub mod ids;
pub mod load;
pub mod notification;
pub mod ports;
pub mod snapshot;

pub use config::AppConfig;
pub use device::{Device, SnapshotHeader};
pub use filter::{ElementType, Filter, FilterError, FilterManager, Operator};
pub use ids::{DeviceId, SnapshotId};
pub use load::{LoadSignal, LoadState, LoadStatus};
pub use notification::{Notification, Variant};
pub use snapshot::{SnapshotData, SnapshotSoftware, SoftwareOrigin};
