//! Which operations each management API backend offers.
//!
//! The cloud API offers every store operation. The self-hosted management
//! server has no process listing, for both of its service modes.

use std::fmt;

use opsctl_core::Service;

/// A single store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    ListCheckpoints,
    ListRestoreJobs,
    CreateRestoreJob,
    ListSnapshots,
    DescribeSnapshot,
    ListProcesses,
}

impl Capability {
    pub const ALL: [Capability; 6] = [
        Capability::ListCheckpoints,
        Capability::ListRestoreJobs,
        Capability::CreateRestoreJob,
        Capability::ListSnapshots,
        Capability::DescribeSnapshot,
        Capability::ListProcesses,
    ];

    /// Stable operation name, used as the `operation` field in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Capability::ListCheckpoints => "list_checkpoints",
            Capability::ListRestoreJobs => "list_restore_jobs",
            Capability::CreateRestoreJob => "create_restore_job",
            Capability::ListSnapshots => "list_snapshots",
            Capability::DescribeSnapshot => "describe_snapshot",
            Capability::ListProcesses => "list_processes",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const CLOUD_CAPABILITIES: &[Capability] = &Capability::ALL;

const SELF_HOSTED_CAPABILITIES: &[Capability] = &[
    Capability::ListCheckpoints,
    Capability::ListRestoreJobs,
    Capability::CreateRestoreJob,
    Capability::ListSnapshots,
    Capability::DescribeSnapshot,
];

/// The two management API client families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// SaaS control plane client.
    Cloud,
    /// Self-hosted management server client (cloud-manager and ops-manager).
    SelfHosted,
}

impl BackendKind {
    /// The backend family that serves `service`.
    #[must_use]
    pub fn for_service(service: Service) -> Self {
        if service.is_self_hosted() {
            BackendKind::SelfHosted
        } else {
            BackendKind::Cloud
        }
    }

    #[must_use]
    pub fn capabilities(self) -> &'static [Capability] {
        match self {
            BackendKind::Cloud => CLOUD_CAPABILITIES,
            BackendKind::SelfHosted => SELF_HOSTED_CAPABILITIES,
        }
    }

    #[must_use]
    pub fn supports(self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BackendKind::Cloud => "cloud",
            BackendKind::SelfHosted => "self-hosted",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
