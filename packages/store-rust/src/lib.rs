//! `opsctl` store: one interface over the cloud and self-hosted management APIs.
//!
//! Callers depend on the narrow capability traits ([`CheckpointsLister`],
//! [`ProcessLister`], ...); [`Store`] implements all of them by routing each
//! call to the client that matches the configured service.

pub mod capability;
pub mod config;
pub mod error;
pub mod store;
pub mod telemetry;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use capability::{BackendKind, Capability};
pub use config::{LogFormat, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use store::{
    Backend, CheckpointsLister, ContinuousJobCreator, ContinuousJobLister, ProcessLister,
    SnapshotDescriber, SnapshotsLister, Store,
};
pub use traits::{ClientFactory, CloudClient, OpsManagerClient};
