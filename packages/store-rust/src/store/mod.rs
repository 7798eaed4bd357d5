//! The store: one type implementing every capability trait, routing each
//! call to the management API client that matches the configured service.
//!
//! The pairing of service and client is fixed when the store is built:
//!
//! - `cloud` is served by a [`CloudClient`],
//! - `cloud-manager` and `ops-manager` are served by an [`OpsManagerClient`],
//! - any other service string yields a store whose every call fails with
//!   [`StoreError::UnsupportedService`].
//!
//! Calls forward their arguments untouched, drop the response metadata, and
//! return client errors unchanged.

mod continuous_backup;
mod processes;

use std::fmt;
use std::sync::Arc;

use opsctl_core::Service;
use tracing::{debug, warn};

pub use continuous_backup::{
    CheckpointsLister, ContinuousJobCreator, ContinuousJobLister, SnapshotDescriber,
    SnapshotsLister,
};
pub use processes::ProcessLister;

use crate::capability::{BackendKind, Capability};
use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::traits::{ClientFactory, CloudClient, OpsManagerClient};

// ---------------------------------------------------------------------------
// Backend
// ---------------------------------------------------------------------------

/// A management API client, tagged with the API it speaks.
#[derive(Clone)]
pub enum Backend {
    Cloud(Arc<dyn CloudClient>),
    SelfHosted(Arc<dyn OpsManagerClient>),
}

impl Backend {
    #[must_use]
    pub fn kind(&self) -> BackendKind {
        match self {
            Backend::Cloud(_) => BackendKind::Cloud,
            Backend::SelfHosted(_) => BackendKind::SelfHosted,
        }
    }
}

impl fmt::Debug for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Backend").field(&self.kind()).finish()
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Resolved at construction; never changes afterwards.
enum Route {
    Cloud(Arc<dyn CloudClient>),
    SelfHosted(Arc<dyn OpsManagerClient>),
    Unsupported,
}

/// Client selected for a single call.
enum Target<'a> {
    Cloud(&'a dyn CloudClient),
    SelfHosted(&'a dyn OpsManagerClient),
}

/// Routes backup and process operations to the cloud or self-hosted API.
///
/// Holds no mutable state; share it freely behind an `Arc`.
pub struct Store {
    service: String,
    route: Route,
}

impl Store {
    /// Build a store for `service` backed by `backend`.
    ///
    /// An unrecognized `service` is accepted: the backend is dropped and
    /// every call on the store reports the service as unsupported.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::BackendMismatch`] if a recognized service is
    /// paired with the other API's client.
    pub fn new(service: impl Into<String>, backend: Backend) -> StoreResult<Self> {
        let service = service.into();
        let route = match (service.parse::<Service>(), backend) {
            (Ok(Service::Cloud), Backend::Cloud(client)) => Route::Cloud(client),
            (Ok(mode), Backend::SelfHosted(client)) if mode.is_self_hosted() => {
                Route::SelfHosted(client)
            }
            (Ok(_), backend) => {
                return Err(StoreError::BackendMismatch {
                    service,
                    backend: backend.kind(),
                });
            }
            (Err(_), backend) => {
                warn!(
                    service = %service,
                    backend = %backend.kind(),
                    "unrecognized service, all store calls will fail"
                );
                Route::Unsupported
            }
        };
        Ok(Self { service, route })
    }

    /// Build a store from configuration, asking `factory` for the one
    /// client the configured service needs.
    ///
    /// # Errors
    ///
    /// - [`StoreError::UnsupportedService`] / [`StoreError::InvalidConfig`]
    ///   if the configuration does not validate.
    /// - [`StoreError::Connect`] if the factory fails to build the client.
    pub fn from_config(config: &StoreConfig, factory: &dyn ClientFactory) -> StoreResult<Self> {
        let service = config.validate()?;
        let kind = BackendKind::for_service(service);
        let backend = match kind {
            BackendKind::Cloud => factory
                .cloud_client(config)
                .map(Backend::Cloud),
            BackendKind::SelfHosted => factory
                .ops_manager_client(config)
                .map(Backend::SelfHosted),
        }
        .map_err(|source| StoreError::Connect {
            backend: kind,
            source,
        })?;

        debug!(service = %service, backend = %kind, "store client created");
        Self::new(service.as_str(), backend)
    }

    /// The configured service string, as given.
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// The client family serving this store, `None` for unrecognized services.
    #[must_use]
    pub fn backend_kind(&self) -> Option<BackendKind> {
        match self.route {
            Route::Cloud(_) => Some(BackendKind::Cloud),
            Route::SelfHosted(_) => Some(BackendKind::SelfHosted),
            Route::Unsupported => None,
        }
    }

    /// Whether calls for `capability` reach a client.
    #[must_use]
    pub fn supports(&self, capability: Capability) -> bool {
        self.backend_kind()
            .is_some_and(|kind| kind.supports(capability))
    }

    /// Select the client for one call, or fail with `UnsupportedService`
    /// when the service is unrecognized or its backend lacks `capability`.
    fn target(&self, capability: Capability) -> StoreResult<Target<'_>> {
        let target = match &self.route {
            Route::Cloud(client) => Target::Cloud(client.as_ref()),
            Route::SelfHosted(client) => Target::SelfHosted(client.as_ref()),
            Route::Unsupported => {
                debug!(service = %self.service, operation = %capability, "unrecognized service");
                return Err(StoreError::unsupported(&self.service));
            }
        };
        if !self.supports(capability) {
            debug!(
                service = %self.service,
                operation = %capability,
                "operation not offered for service"
            );
            return Err(StoreError::unsupported(&self.service));
        }
        debug!(service = %self.service, operation = %capability, "dispatching");
        Ok(target)
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("service", &self.service)
            .field("backend", &self.backend_kind())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
