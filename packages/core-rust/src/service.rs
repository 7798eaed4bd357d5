//! Service modes: which management API a store talks to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Canonical name of the SaaS control plane.
pub const CLOUD_SERVICE: &str = "cloud";
/// Canonical name of the hosted flavour of the self-hosted management server.
pub const CLOUD_MANAGER_SERVICE: &str = "cloud-manager";
/// Canonical name of the on-premises management server.
pub const OPS_MANAGER_SERVICE: &str = "ops-manager";

/// A recognized service mode.
///
/// Parsed from the configured service string. Both self-hosted variants are
/// served by the same management-server client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Service {
    /// SaaS control plane.
    Cloud,
    /// Hosted management server.
    CloudManager,
    /// On-premises management server.
    OpsManager,
}

impl Service {
    /// All recognized modes, in declaration order.
    pub const ALL: [Service; 3] = [Service::Cloud, Service::CloudManager, Service::OpsManager];

    /// The canonical configuration string for this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Service::Cloud => CLOUD_SERVICE,
            Service::CloudManager => CLOUD_MANAGER_SERVICE,
            Service::OpsManager => OPS_MANAGER_SERVICE,
        }
    }

    /// Whether this mode is served by the self-hosted management API.
    #[must_use]
    pub fn is_self_hosted(self) -> bool {
        matches!(self, Service::CloudManager | Service::OpsManager)
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The configured service string matched no recognized mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown service: {0}")]
pub struct UnknownServiceError(pub String);

impl FromStr for Service {
    type Err = UnknownServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CLOUD_SERVICE => Ok(Service::Cloud),
            CLOUD_MANAGER_SERVICE => Ok(Service::CloudManager),
            OPS_MANAGER_SERVICE => Ok(Service::OpsManager),
            other => Err(UnknownServiceError(other.to_string())),
        }
    }
}
