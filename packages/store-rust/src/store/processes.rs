use async_trait::async_trait;
use opsctl_core::{ListOptions, Process};

use super::{Store, Target};
use crate::capability::Capability;
use crate::error::{StoreError, StoreResult};

#[async_trait]
pub trait ProcessLister: Send + Sync {
    async fn processes(
        &self,
        group_id: &str,
        opts: Option<&ListOptions>,
    ) -> StoreResult<Vec<Process>>;
}

/// Only the cloud API lists processes.
#[async_trait]
impl ProcessLister for Store {
    async fn processes(
        &self,
        group_id: &str,
        opts: Option<&ListOptions>,
    ) -> StoreResult<Vec<Process>> {
        match self.target(Capability::ListProcesses)? {
            Target::Cloud(client) => {
                let (result, _) = client.list_processes(group_id, opts).await?;
                Ok(result)
            }
            Target::SelfHosted(_) => Err(StoreError::unsupported(&self.service)),
        }
    }
}
