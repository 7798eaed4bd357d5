//! Continuous backup records: checkpoints, restore jobs, and snapshots.
//!
//! These are the documents the management APIs return. Stores pass them
//! through without inspecting them; only the field names matter here, so
//! everything a caller does not need to construct is optional.

use serde::{Deserialize, Serialize};

/// Hypermedia link attached to API documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

/// Point in time expressed as an oplog position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotTimestamp {
    /// ISO-8601 wall clock time.
    pub date: String,
    /// Ordinal within the same second.
    pub increment: i64,
}

// ---------------------------------------------------------------------------
// Checkpoints
// ---------------------------------------------------------------------------

/// Per replica set / config server part of a checkpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckpointPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_name: Option<String>,
    #[serde(default)]
    pub replica_set_name: String,
    #[serde(default)]
    pub token_discovered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_timestamp: Option<SnapshotTimestamp>,
    #[serde(default)]
    pub type_name: String,
}

/// A restorable point between two snapshots of a sharded cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkpoint {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub cluster_id: String,
    #[serde(default)]
    pub group_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub restorable: bool,
    #[serde(default)]
    pub parts: Vec<CheckpointPart>,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// One page of checkpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkpoints {
    #[serde(default)]
    pub results: Vec<Checkpoint>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub total_count: u64,
}

// ---------------------------------------------------------------------------
// Restore jobs
// ---------------------------------------------------------------------------

/// How and where a restore job delivers its data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    /// `HTTP`, `AUTOMATED_RESTORE`, ...
    #[serde(default)]
    pub method_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_hours: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_downloads: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_cluster_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_group_id: Option<String>,
}

/// A restore job created from a snapshot, checkpoint, or point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuousJob {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub cluster_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    #[serde(default)]
    pub group_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<Delivery>,
    #[serde(default)]
    pub encryption_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_key_uuid: Option<String>,
    #[serde(default)]
    pub point_in_time: bool,
    /// `FINISHED`, `IN_PROGRESS`, `BROKEN`, `KILLED`.
    #[serde(default)]
    pub status_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<SnapshotTimestamp>,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// One page of restore jobs. Creation also answers with this shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuousJobs {
    #[serde(default)]
    pub results: Vec<ContinuousJob>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub total_count: u64,
}

/// Delivery settings accepted when creating a restore job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuousJobRequestDelivery {
    pub method_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_hours: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_downloads: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_cluster_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_group_id: Option<String>,
}

/// Body of a restore job creation request.
///
/// Exactly one source is expected: a snapshot, a checkpoint, an oplog
/// position, or a point in time in UTC milliseconds. The remote API enforces
/// that; it is not checked here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuousJobRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkpoint_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "oplogTs")]
    pub oplog_ts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oplog_inc: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        rename = "pointInTimeUTCMillis"
    )]
    pub point_in_time_utc_millis: Option<i64>,
    pub delivery: ContinuousJobRequestDelivery,
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

/// Per replica set / config server part of a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuousSnapshotPart {
    #[serde(default)]
    pub cluster_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression_setting: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_size_bytes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size_bytes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mongod_version: Option<String>,
    #[serde(default)]
    pub replica_set_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_size_bytes: Option<u64>,
    #[serde(default)]
    pub type_name: String,
}

/// A stored snapshot of a cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuousSnapshot {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub cluster_id: String,
    #[serde(default)]
    pub group_id: String,
    #[serde(default)]
    pub complete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<SnapshotTimestamp>,
    #[serde(default)]
    pub do_not_delete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
    #[serde(default)]
    pub is_possibly_inconsistent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_oplog_applied_timestamp: Option<SnapshotTimestamp>,
    #[serde(default)]
    pub missing_shards: Vec<String>,
    #[serde(default)]
    pub namespace_filter_list: Vec<String>,
    #[serde(default)]
    pub parts: Vec<ContinuousSnapshotPart>,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// One page of snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinuousSnapshots {
    #[serde(default)]
    pub results: Vec<ContinuousSnapshot>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub total_count: u64,
}
