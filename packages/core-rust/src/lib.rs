//! `opsctl` core: service modes, list options, backup and process records,
//! and the response/error types produced by the management API clients.

pub mod backup;
pub mod options;
pub mod process;
pub mod response;
pub mod service;

pub use backup::{
    Checkpoint, CheckpointPart, Checkpoints, ContinuousJob, ContinuousJobRequest,
    ContinuousJobRequestDelivery, ContinuousJobs, ContinuousSnapshot, ContinuousSnapshotPart,
    ContinuousSnapshots, Delivery, Link, SnapshotTimestamp,
};
pub use options::ListOptions;
pub use process::Process;
pub use response::{ApiError, ApiResponse, ApiResult};
pub use service::{Service, UnknownServiceError};
