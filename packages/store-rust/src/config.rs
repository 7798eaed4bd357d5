use std::fmt;

use opsctl_core::service::CLOUD_SERVICE;
use opsctl_core::Service;

use crate::error::{StoreError, StoreResult};

/// Base URL of the hosted APIs (cloud and cloud-manager).
pub const DEFAULT_BASE_URL: &str = "https://cloud.mongodb.com/";

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable, multi-line.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Store configuration, from flags or environment.
///
/// `service` is kept as the raw configured string: an unrecognized value is
/// not a parse failure here, it is what the store reports back on every call.
#[derive(Clone, clap::Args)]
pub struct StoreConfig {
    /// Management API to talk to: cloud, cloud-manager, or ops-manager.
    #[arg(long, env = "OPSCTL_SERVICE", default_value = CLOUD_SERVICE)]
    pub service: String,
    /// Override of the API base URL.
    #[arg(long, env = "OPSCTL_BASE_URL")]
    pub base_url: Option<String>,
    /// URL of the on-premises management server. Required for ops-manager.
    #[arg(long, env = "OPSCTL_OPS_MANAGER_URL")]
    pub ops_manager_url: Option<String>,
    #[arg(long, env = "OPSCTL_PUBLIC_API_KEY")]
    pub public_api_key: Option<String>,
    #[arg(long, env = "OPSCTL_PRIVATE_API_KEY", hide_env_values = true)]
    pub private_api_key: Option<String>,
    #[arg(long, env = "OPSCTL_LOG_FORMAT", value_enum, default_value = "pretty")]
    pub log_format: LogFormat,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            service: CLOUD_SERVICE.to_string(),
            base_url: None,
            ops_manager_url: None,
            public_api_key: None,
            private_api_key: None,
            log_format: LogFormat::Pretty,
        }
    }
}

impl StoreConfig {
    /// Configuration targeting `service` with everything else defaulted.
    #[must_use]
    pub fn for_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            ..Self::default()
        }
    }

    /// Parse the configured service and check the settings it depends on.
    ///
    /// # Errors
    ///
    /// `UnsupportedService` if the service is not recognized,
    /// `InvalidConfig` if ops-manager is selected without a server URL.
    pub fn validate(&self) -> StoreResult<Service> {
        let service = self
            .service
            .parse::<Service>()
            .map_err(|err| StoreError::unsupported(err.0))?;

        if service == Service::OpsManager && is_blank(self.ops_manager_url.as_deref()) {
            return Err(StoreError::InvalidConfig(
                "ops-manager requires an ops manager URL".to_string(),
            ));
        }
        Ok(service)
    }

    /// The URL the selected client should be pointed at.
    ///
    /// An explicit `base_url` wins. Otherwise ops-manager uses its server URL
    /// and the hosted services use [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Same as [`validate`](Self::validate).
    pub fn resolved_base_url(&self) -> StoreResult<String> {
        let service = self.validate()?;
        if let Some(url) = self.base_url.as_deref().filter(|u| !u.is_empty()) {
            return Ok(url.to_string());
        }
        match service {
            Service::OpsManager => Ok(self.ops_manager_url.clone().unwrap_or_default()),
            Service::Cloud | Service::CloudManager => Ok(DEFAULT_BASE_URL.to_string()),
        }
    }
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("service", &self.service)
            .field("base_url", &self.base_url)
            .field("ops_manager_url", &self.ops_manager_url)
            .field("public_api_key", &self.public_api_key)
            .field(
                "private_api_key",
                &self.private_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("log_format", &self.log_format)
            .finish()
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}
