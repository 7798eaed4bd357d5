use async_trait::async_trait;
use opsctl_core::{
    Checkpoints, ContinuousJobRequest, ContinuousJobs, ContinuousSnapshot, ContinuousSnapshots,
    ListOptions,
};

use super::{Store, Target};
use crate::capability::Capability;
use crate::error::StoreResult;

#[async_trait]
pub trait CheckpointsLister: Send + Sync {
    async fn checkpoints(
        &self,
        project_id: &str,
        cluster_id: &str,
        opts: Option<&ListOptions>,
    ) -> StoreResult<Checkpoints>;
}

#[async_trait]
pub trait ContinuousJobLister: Send + Sync {
    async fn continuous_restore_jobs(
        &self,
        project_id: &str,
        cluster_id: &str,
        opts: Option<&ListOptions>,
    ) -> StoreResult<ContinuousJobs>;
}

#[async_trait]
pub trait ContinuousJobCreator: Send + Sync {
    async fn create_continuous_restore_job(
        &self,
        project_id: &str,
        cluster_id: &str,
        request: &ContinuousJobRequest,
    ) -> StoreResult<ContinuousJobs>;
}

#[async_trait]
pub trait SnapshotsLister: Send + Sync {
    async fn continuous_snapshots(
        &self,
        project_id: &str,
        cluster_id: &str,
        opts: Option<&ListOptions>,
    ) -> StoreResult<ContinuousSnapshots>;
}

#[async_trait]
pub trait SnapshotDescriber: Send + Sync {
    async fn continuous_snapshot(
        &self,
        project_id: &str,
        cluster_id: &str,
        snapshot_id: &str,
    ) -> StoreResult<ContinuousSnapshot>;
}

#[async_trait]
impl CheckpointsLister for Store {
    async fn checkpoints(
        &self,
        project_id: &str,
        cluster_id: &str,
        opts: Option<&ListOptions>,
    ) -> StoreResult<Checkpoints> {
        let (result, _) = match self.target(Capability::ListCheckpoints)? {
            Target::Cloud(client) => client.list_checkpoints(project_id, cluster_id, opts).await?,
            Target::SelfHosted(client) => {
                client.list_checkpoints(project_id, cluster_id, opts).await?
            }
        };
        Ok(result)
    }
}

#[async_trait]
impl ContinuousJobLister for Store {
    async fn continuous_restore_jobs(
        &self,
        project_id: &str,
        cluster_id: &str,
        opts: Option<&ListOptions>,
    ) -> StoreResult<ContinuousJobs> {
        let (result, _) = match self.target(Capability::ListRestoreJobs)? {
            Target::Cloud(client) => {
                client
                    .list_continuous_restore_jobs(project_id, cluster_id, opts)
                    .await?
            }
            Target::SelfHosted(client) => {
                client
                    .list_continuous_restore_jobs(project_id, cluster_id, opts)
                    .await?
            }
        };
        Ok(result)
    }
}

#[async_trait]
impl ContinuousJobCreator for Store {
    async fn create_continuous_restore_job(
        &self,
        project_id: &str,
        cluster_id: &str,
        request: &ContinuousJobRequest,
    ) -> StoreResult<ContinuousJobs> {
        let (result, _) = match self.target(Capability::CreateRestoreJob)? {
            Target::Cloud(client) => {
                client
                    .create_continuous_restore_job(project_id, cluster_id, request)
                    .await?
            }
            Target::SelfHosted(client) => {
                client
                    .create_continuous_restore_job(project_id, cluster_id, request)
                    .await?
            }
        };
        Ok(result)
    }
}

#[async_trait]
impl SnapshotsLister for Store {
    async fn continuous_snapshots(
        &self,
        project_id: &str,
        cluster_id: &str,
        opts: Option<&ListOptions>,
    ) -> StoreResult<ContinuousSnapshots> {
        let (result, _) = match self.target(Capability::ListSnapshots)? {
            Target::Cloud(client) => {
                client
                    .list_continuous_snapshots(project_id, cluster_id, opts)
                    .await?
            }
            Target::SelfHosted(client) => {
                client
                    .list_continuous_snapshots(project_id, cluster_id, opts)
                    .await?
            }
        };
        Ok(result)
    }
}

#[async_trait]
impl SnapshotDescriber for Store {
    async fn continuous_snapshot(
        &self,
        project_id: &str,
        cluster_id: &str,
        snapshot_id: &str,
    ) -> StoreResult<ContinuousSnapshot> {
        let (result, _) = match self.target(Capability::DescribeSnapshot)? {
            Target::Cloud(client) => {
                client
                    .get_continuous_snapshot(project_id, cluster_id, snapshot_id)
                    .await?
            }
            Target::SelfHosted(client) => {
                client
                    .get_continuous_snapshot(project_id, cluster_id, snapshot_id)
                    .await?
            }
        };
        Ok(result)
    }
}
