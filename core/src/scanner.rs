//! The **bounded concurrency scheduler**.
//!
//! Every candidate is probed exactly once through a [`ProbeGateway`], with at
//! most `concurrency` probes in flight at any instant. Admission is dynamic:
//! a finished probe hands its semaphore permit to the next pending candidate.
//!
//! A probe that fails, panics or overruns its deadline only affects its own
//! address. Outcomes are collected in completion order; ordering the result
//! is the aggregator's job.

use std::any::Any;
use std::borrow::Cow;
use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use sweepr_common::config::SweepConfig;
use sweepr_common::probe::{ProbeFailure, ProbeOutcome};
use tokio::sync::{Semaphore, mpsc};
use tracing::{debug, info, trace, warn};

use crate::gateway::ProbeGateway;

/// Invoked with `(completed, total)` after each recorded outcome.
pub type ProgressCallback = Arc<dyn Fn(usize, usize) + Send + Sync>;

/// Probes every address in `candidates` and returns one outcome per address.
///
/// Duplicate candidates are probed once. Returns only after every candidate
/// has a recorded outcome.
pub async fn run_probes(
    candidates: &[Ipv4Addr],
    gateway: Arc<dyn ProbeGateway>,
    cfg: &SweepConfig,
    on_progress: Option<ProgressCallback>,
) -> Vec<ProbeOutcome> {
    let candidates: Cow<'_, [Ipv4Addr]> = unique_in_order(candidates);
    let total: usize = candidates.len();
    let timeout: Duration = cfg.timeout;
    let deadline: Duration = cfg.probe_deadline();

    debug!(
        "Dispatching {total} probes via {} (limit {}, timeout {timeout:?})",
        gateway.name(),
        cfg.concurrency
    );

    let semaphore = Arc::new(Semaphore::new(cfg.concurrency.get()));
    let (tx, mut rx) = mpsc::unbounded_channel::<ProbeOutcome>();

    let queue: &[Ipv4Addr] = candidates.as_ref();
    let dispatch = async move {
        for &addr in queue {
            let Ok(permit) = semaphore.clone().acquire_owned().await else {
                break;
            };
            let gateway = gateway.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let outcome = probe_one(gateway.as_ref(), addr, timeout, deadline).await;
                drop(permit);
                let _ = tx.send(outcome);
            });
        }
        // Collection ends once the last probe task drops its sender.
        drop(tx);
    };

    let collect = async {
        let mut outcomes: Vec<ProbeOutcome> = Vec::with_capacity(total);
        while let Some(outcome) = rx.recv().await {
            log_outcome(&outcome);
            outcomes.push(outcome);
            if let Some(callback) = &on_progress {
                callback(outcomes.len(), total);
            }
        }
        outcomes
    };

    let ((), mut outcomes) = tokio::join!(dispatch, collect);

    if outcomes.len() < total {
        let seen: HashSet<Ipv4Addr> = outcomes.iter().map(ProbeOutcome::addr).collect();
        for &addr in candidates.iter().filter(|addr| !seen.contains(addr)) {
            warn!("{addr} never reported an outcome");
            outcomes.push(ProbeOutcome::ProbeError(addr, ProbeFailure::Lost));
        }
    }

    outcomes
}

async fn probe_one(
    gateway: &dyn ProbeGateway,
    addr: Ipv4Addr,
    timeout: Duration,
    deadline: Duration,
) -> ProbeOutcome {
    let attempt = AssertUnwindSafe(gateway.probe(addr, timeout)).catch_unwind();

    match tokio::time::timeout(deadline, attempt).await {
        Ok(Ok(reply)) => ProbeOutcome::from_reply(addr, reply),
        Ok(Err(payload)) => {
            let msg = panic_message(payload.as_ref());
            ProbeOutcome::ProbeError(addr, ProbeFailure::Panicked(msg))
        }
        Err(_elapsed) => ProbeOutcome::ProbeError(addr, ProbeFailure::TimedOut(deadline)),
    }
}

fn log_outcome(outcome: &ProbeOutcome) {
    match outcome {
        ProbeOutcome::Reachable(addr) => info!("{addr} is online"),
        ProbeOutcome::Unreachable(addr) => trace!("{addr} did not answer"),
        ProbeOutcome::ProbeError(addr, failure) => warn!("Error probing {addr}: {failure}"),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Enumerated ranges arrive strictly ascending and are borrowed as is; only
/// other input pays for deduplication.
fn unique_in_order(candidates: &[Ipv4Addr]) -> Cow<'_, [Ipv4Addr]> {
    if candidates.windows(2).all(|pair| pair[0] < pair[1]) {
        return Cow::Borrowed(candidates);
    }

    let mut seen: HashSet<Ipv4Addr> = HashSet::with_capacity(candidates.len());
    Cow::Owned(
        candidates
            .iter()
            .copied()
            .filter(|addr| seen.insert(*addr))
            .collect(),
    )
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
