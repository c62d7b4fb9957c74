//! The **abstraction** every reachability probe implements.
//!
//! The scheduler only ever talks to a [`ProbeGateway`], which keeps it
//! testable with deterministic mocks and independent of how a host is
//! actually reached (platform `ping`, TCP handshake, ...).

use std::net::Ipv4Addr;
use std::time::Duration;

use async_trait::async_trait;
use sweepr_common::probe::{ProbeFailure, Reachability};

/// Answers whether a single host is reachable.
///
/// Implementations must:
/// * return within `timeout`, or at least yield to the runtime so the
///   scheduler's deadline can fire,
/// * report every failure as a [`ProbeFailure`] instead of panicking,
/// * be safe to call concurrently for independent addresses.
#[async_trait]
pub trait ProbeGateway: Send + Sync {
    async fn probe(&self, addr: Ipv4Addr, timeout: Duration) -> Result<Reachability, ProbeFailure>;

    /// Short label used in logs.
    fn name(&self) -> &'static str {
        "probe"
    }
}
