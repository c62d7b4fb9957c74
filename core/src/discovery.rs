//! # Sweep Service
//!
//! Implements the core "ping sweep" use case.
//!
//! Turns a range specification into a [`SweepReport`]:
//! 1. the specification is validated and expanded into candidate hosts,
//! 2. the [`scanner`](crate::scanner) probes them with bounded concurrency,
//! 3. the outcomes are aggregated into an ordered result.
//!
//! Invalid input is rejected before a single probe is sent.

use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use sweepr_common::config::SweepConfig;
use sweepr_common::error::SweepError;
use sweepr_common::network::spec::RangeSpec;
use sweepr_common::report::SweepReport;
use tracing::info;

use crate::gateway::ProbeGateway;
use crate::network::ping::PingGateway;
use crate::scanner::{self, ProgressCallback};

/// Application service for ping sweeps.
///
/// Holds the probe strategy and the sweep settings; every call works on fresh
/// state, so one service can run any number of sweeps.
pub struct SweepService {
    gateway: Arc<dyn ProbeGateway>,
    config: SweepConfig,
    on_progress: Option<ProgressCallback>,
}

impl SweepService {
    pub fn new(gateway: Arc<dyn ProbeGateway>, config: SweepConfig) -> Self {
        Self {
            gateway,
            config,
            on_progress: None,
        }
    }

    pub fn with_progress(mut self, on_progress: ProgressCallback) -> Self {
        self.on_progress = Some(on_progress);
        self
    }

    /// Parses `spec` and sweeps it.
    pub async fn sweep(&self, spec: &str) -> Result<SweepReport, SweepError> {
        let range: RangeSpec = spec.parse()?;
        Ok(self.perform_sweep(&range).await)
    }

    /// Like [`sweep`](Self::sweep), for specifications from untyped sources.
    pub async fn sweep_value(&self, spec: &Value) -> Result<SweepReport, SweepError> {
        let range = RangeSpec::from_value(spec)?;
        Ok(self.perform_sweep(&range).await)
    }

    pub async fn perform_sweep(&self, range: &RangeSpec) -> SweepReport {
        let candidates: Vec<Ipv4Addr> = range.candidates();
        info!(
            "Starting sweep on {range} ({} addresses, {} candidates)",
            range.num_addresses(),
            candidates.len()
        );

        let start_time = Instant::now();
        let outcomes = scanner::run_probes(
            &candidates,
            self.gateway.clone(),
            &self.config,
            self.on_progress.clone(),
        )
        .await;

        let report = SweepReport::from_outcomes(&outcomes, start_time.elapsed());
        info!(
            "Sweep complete. Found {} reachable host(s) in {:.2}s",
            report.reachable.len(),
            report.elapsed.as_secs_f64()
        );
        report
    }
}

/// Sweeps `spec` with the platform `ping` binary and returns the reachable
/// hosts as dotted quads, ascending.
pub async fn ping_sweep(spec: &str, config: &SweepConfig) -> Result<Vec<String>, SweepError> {
    let service = SweepService::new(Arc::new(PingGateway), *config);
    Ok(service.sweep(spec).await?.reachable_strings())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
