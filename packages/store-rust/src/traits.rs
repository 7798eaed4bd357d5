use std::sync::Arc;

use async_trait::async_trait;
use opsctl_core::{
    ApiResult, Checkpoints, ContinuousJobRequest, ContinuousJobs, ContinuousSnapshot,
    ContinuousSnapshots, ListOptions, Process,
};

use crate::config::StoreConfig;

/// Client for the SaaS control plane API.
///
/// Implementations own transport, authentication, and pagination. Every call
/// returns the decoded document together with the response metadata.
#[async_trait]
pub trait CloudClient: Send + Sync {
    /// List checkpoints of a sharded cluster.
    async fn list_checkpoints(
        &self,
        project_id: &str,
        cluster_id: &str,
        opts: Option<&ListOptions>,
    ) -> ApiResult<Checkpoints>;

    /// List restore jobs of a cluster.
    async fn list_continuous_restore_jobs(
        &self,
        project_id: &str,
        cluster_id: &str,
        opts: Option<&ListOptions>,
    ) -> ApiResult<ContinuousJobs>;

    /// Create a restore job. The API answers with the created job(s).
    async fn create_continuous_restore_job(
        &self,
        project_id: &str,
        cluster_id: &str,
        request: &ContinuousJobRequest,
    ) -> ApiResult<ContinuousJobs>;

    /// List snapshots of a cluster.
    async fn list_continuous_snapshots(
        &self,
        project_id: &str,
        cluster_id: &str,
        opts: Option<&ListOptions>,
    ) -> ApiResult<ContinuousSnapshots>;

    /// Fetch one snapshot.
    async fn get_continuous_snapshot(
        &self,
        project_id: &str,
        cluster_id: &str,
        snapshot_id: &str,
    ) -> ApiResult<ContinuousSnapshot>;

    /// List the database processes of a project.
    async fn list_processes(
        &self,
        group_id: &str,
        opts: Option<&ListOptions>,
    ) -> ApiResult<Vec<Process>>;
}

/// Client for the self-hosted management server API.
///
/// Same backup surface as [`CloudClient`]. Process listing is not offered.
#[async_trait]
pub trait OpsManagerClient: Send + Sync {
    async fn list_checkpoints(
        &self,
        project_id: &str,
        cluster_id: &str,
        opts: Option<&ListOptions>,
    ) -> ApiResult<Checkpoints>;

    async fn list_continuous_restore_jobs(
        &self,
        project_id: &str,
        cluster_id: &str,
        opts: Option<&ListOptions>,
    ) -> ApiResult<ContinuousJobs>;

    async fn create_continuous_restore_job(
        &self,
        project_id: &str,
        cluster_id: &str,
        request: &ContinuousJobRequest,
    ) -> ApiResult<ContinuousJobs>;

    async fn list_continuous_snapshots(
        &self,
        project_id: &str,
        cluster_id: &str,
        opts: Option<&ListOptions>,
    ) -> ApiResult<ContinuousSnapshots>;

    async fn get_continuous_snapshot(
        &self,
        project_id: &str,
        cluster_id: &str,
        snapshot_id: &str,
    ) -> ApiResult<ContinuousSnapshot>;
}

/// Builds management API clients from configuration.
///
/// [`Store::from_config`](crate::Store::from_config) asks for exactly one
/// client: the one the configured service needs.
pub trait ClientFactory: Send + Sync {
    /// Build a client for the SaaS control plane.
    fn cloud_client(&self, config: &StoreConfig) -> anyhow::Result<Arc<dyn CloudClient>>;

    /// Build a client for the self-hosted management server.
    fn ops_manager_client(
        &self,
        config: &StoreConfig,
    ) -> anyhow::Result<Arc<dyn OpsManagerClient>>;
}
