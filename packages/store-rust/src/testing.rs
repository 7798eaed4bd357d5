//! Recording stand-ins for the management API clients.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use opsctl_core::{
    ApiError, ApiResponse, ApiResult, Checkpoint, Checkpoints, ContinuousJob,
    ContinuousJobRequest, ContinuousJobs, ContinuousSnapshot, ContinuousSnapshots, ListOptions,
    Process,
};
use parking_lot::Mutex;

use crate::config::StoreConfig;
use crate::traits::{ClientFactory, CloudClient, OpsManagerClient};

/// One recorded client call with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    ListCheckpoints {
        project_id: String,
        cluster_id: String,
        opts: Option<ListOptions>,
    },
    ListRestoreJobs {
        project_id: String,
        cluster_id: String,
        opts: Option<ListOptions>,
    },
    CreateRestoreJob {
        project_id: String,
        cluster_id: String,
        request: ContinuousJobRequest,
    },
    ListSnapshots {
        project_id: String,
        cluster_id: String,
        opts: Option<ListOptions>,
    },
    GetSnapshot {
        project_id: String,
        cluster_id: String,
        snapshot_id: String,
    },
    ListProcesses {
        group_id: String,
        opts: Option<ListOptions>,
    },
}

// ---------------------------------------------------------------------------
// Canned documents, stamped with the answering client's tag
// ---------------------------------------------------------------------------

pub(crate) fn checkpoints(tag: &str) -> Checkpoints {
    Checkpoints {
        results: vec![Checkpoint {
            id: format!("{tag}-checkpoint"),
            restorable: true,
            ..Default::default()
        }],
        total_count: 1,
        ..Default::default()
    }
}

pub(crate) fn jobs(tag: &str) -> ContinuousJobs {
    ContinuousJobs {
        results: vec![ContinuousJob {
            id: format!("{tag}-job"),
            status_name: "IN_PROGRESS".to_string(),
            ..Default::default()
        }],
        total_count: 1,
        ..Default::default()
    }
}

pub(crate) fn snapshot(tag: &str) -> ContinuousSnapshot {
    ContinuousSnapshot {
        id: format!("{tag}-snapshot"),
        complete: true,
        ..Default::default()
    }
}

pub(crate) fn snapshots(tag: &str) -> ContinuousSnapshots {
    ContinuousSnapshots {
        results: vec![snapshot(tag)],
        total_count: 1,
        ..Default::default()
    }
}

pub(crate) fn processes(tag: &str) -> Vec<Process> {
    vec![Process {
        id: format!("{tag}-host:27017"),
        hostname: format!("{tag}-host"),
        port: 27017,
        ..Default::default()
    }]
}

// ---------------------------------------------------------------------------
// RecordingClient
// ---------------------------------------------------------------------------

/// Implements both client traits; answers with documents tagged `tag`, or
/// with `failure` when set.
pub(crate) struct RecordingClient {
    tag: &'static str,
    failure: Option<ApiError>,
    calls: Mutex<Vec<Call>>,
}

impl RecordingClient {
    pub(crate) fn new(tag: &'static str) -> Arc<Self> {
        Arc::new(Self {
            tag,
            failure: None,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn failing(tag: &'static str, failure: ApiError) -> Arc<Self> {
        Arc::new(Self {
            tag,
            failure: Some(failure),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn answer<T>(&self, call: Call, body: impl FnOnce(&str) -> T) -> ApiResult<T> {
        self.calls.lock().push(call);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => {
                let mut response = ApiResponse::new(http::StatusCode::OK);
                response.headers.insert(
                    "x-answered-by",
                    http::HeaderValue::from_static(self.tag),
                );
                Ok((body(self.tag), response))
            }
        }
    }
}

#[async_trait]
impl CloudClient for RecordingClient {
    async fn list_checkpoints(
        &self,
        project_id: &str,
        cluster_id: &str,
        opts: Option<&ListOptions>,
    ) -> ApiResult<Checkpoints> {
        self.answer(
            Call::ListCheckpoints {
                project_id: project_id.to_string(),
                cluster_id: cluster_id.to_string(),
                opts: opts.cloned(),
            },
            checkpoints,
        )
    }

    async fn list_continuous_restore_jobs(
        &self,
        project_id: &str,
        cluster_id: &str,
        opts: Option<&ListOptions>,
    ) -> ApiResult<ContinuousJobs> {
        self.answer(
            Call::ListRestoreJobs {
                project_id: project_id.to_string(),
                cluster_id: cluster_id.to_string(),
                opts: opts.cloned(),
            },
            jobs,
        )
    }

    async fn create_continuous_restore_job(
        &self,
        project_id: &str,
        cluster_id: &str,
        request: &ContinuousJobRequest,
    ) -> ApiResult<ContinuousJobs> {
        self.answer(
            Call::CreateRestoreJob {
                project_id: project_id.to_string(),
                cluster_id: cluster_id.to_string(),
                request: request.clone(),
            },
            jobs,
        )
    }

    async fn list_continuous_snapshots(
        &self,
        project_id: &str,
        cluster_id: &str,
        opts: Option<&ListOptions>,
    ) -> ApiResult<ContinuousSnapshots> {
        self.answer(
            Call::ListSnapshots {
                project_id: project_id.to_string(),
                cluster_id: cluster_id.to_string(),
                opts: opts.cloned(),
            },
            snapshots,
        )
    }

    async fn get_continuous_snapshot(
        &self,
        project_id: &str,
        cluster_id: &str,
        snapshot_id: &str,
    ) -> ApiResult<ContinuousSnapshot> {
        self.answer(
            Call::GetSnapshot {
                project_id: project_id.to_string(),
                cluster_id: cluster_id.to_string(),
                snapshot_id: snapshot_id.to_string(),
            },
            snapshot,
        )
    }

    async fn list_processes(
        &self,
        group_id: &str,
        opts: Option<&ListOptions>,
    ) -> ApiResult<Vec<Process>> {
        self.answer(
            Call::ListProcesses {
                group_id: group_id.to_string(),
                opts: opts.cloned(),
            },
            processes,
        )
    }
}

#[async_trait]
impl OpsManagerClient for RecordingClient {
    async fn list_checkpoints(
        &self,
        project_id: &str,
        cluster_id: &str,
        opts: Option<&ListOptions>,
    ) -> ApiResult<Checkpoints> {
        CloudClient::list_checkpoints(self, project_id, cluster_id, opts).await
    }

    async fn list_continuous_restore_jobs(
        &self,
        project_id: &str,
        cluster_id: &str,
        opts: Option<&ListOptions>,
    ) -> ApiResult<ContinuousJobs> {
        CloudClient::list_continuous_restore_jobs(self, project_id, cluster_id, opts).await
    }

    async fn create_continuous_restore_job(
        &self,
        project_id: &str,
        cluster_id: &str,
        request: &ContinuousJobRequest,
    ) -> ApiResult<ContinuousJobs> {
        CloudClient::create_continuous_restore_job(self, project_id, cluster_id, request).await
    }

    async fn list_continuous_snapshots(
        &self,
        project_id: &str,
        cluster_id: &str,
        opts: Option<&ListOptions>,
    ) -> ApiResult<ContinuousSnapshots> {
        CloudClient::list_continuous_snapshots(self, project_id, cluster_id, opts).await
    }

    async fn get_continuous_snapshot(
        &self,
        project_id: &str,
        cluster_id: &str,
        snapshot_id: &str,
    ) -> ApiResult<ContinuousSnapshot> {
        CloudClient::get_continuous_snapshot(self, project_id, cluster_id, snapshot_id).await
    }
}

// ---------------------------------------------------------------------------
// CountingFactory
// ---------------------------------------------------------------------------

/// Client factory that hands out `RecordingClient`s and counts requests.
pub(crate) struct CountingFactory {
    pub(crate) cloud_requests: AtomicU32,
    pub(crate) ops_manager_requests: AtomicU32,
    fail: bool,
}

impl CountingFactory {
    pub(crate) fn new() -> Self {
        Self {
            cloud_requests: AtomicU32::new(0),
            ops_manager_requests: AtomicU32::new(0),
            fail: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub(crate) fn counts(&self) -> (u32, u32) {
        (
            self.cloud_requests.load(Ordering::SeqCst),
            self.ops_manager_requests.load(Ordering::SeqCst),
        )
    }
}

impl ClientFactory for CountingFactory {
    fn cloud_client(&self, _config: &StoreConfig) -> anyhow::Result<Arc<dyn CloudClient>> {
        self.cloud_requests.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            anyhow::bail!("cloud endpoint unreachable");
        }
        Ok(RecordingClient::new("cloud"))
    }

    fn ops_manager_client(
        &self,
        _config: &StoreConfig,
    ) -> anyhow::Result<Arc<dyn OpsManagerClient>> {
        self.ops_manager_requests.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            anyhow::bail!("ops manager endpoint unreachable");
        }
        Ok(RecordingClient::new("self-hosted"))
    }
}
