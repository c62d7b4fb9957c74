//! # Result Aggregation
//!
//! Folds per-address [`ProbeOutcome`]s, in whatever order they complete,
//! into a deterministic [`SweepReport`].

use std::collections::{BTreeMap, BTreeSet};
use std::net::Ipv4Addr;
use std::time::Duration;

use crate::probe::{ProbeFailure, ProbeOutcome};

/// Reachable addresses from `outcomes`, ascending by numeric value, without duplicates.
pub fn aggregate<'a, I>(outcomes: I) -> Vec<Ipv4Addr>
where
    I: IntoIterator<Item = &'a ProbeOutcome>,
{
    let mut aggregator = Aggregator::new();
    outcomes.into_iter().for_each(|outcome| aggregator.record(outcome));
    aggregator.reachable.into_iter().collect()
}

/// Accumulates outcomes as they arrive.
#[derive(Debug, Default)]
pub struct Aggregator {
    reachable: BTreeSet<Ipv4Addr>,
    unreachable: usize,
    failures: BTreeMap<Ipv4Addr, ProbeFailure>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &ProbeOutcome) {
        match outcome {
            ProbeOutcome::Reachable(addr) => {
                self.reachable.insert(*addr);
            }
            ProbeOutcome::Unreachable(_) => self.unreachable += 1,
            ProbeOutcome::ProbeError(addr, failure) => {
                self.failures.insert(*addr, failure.clone());
            }
        }
    }

    pub fn finish(self, candidates: usize, elapsed: Duration) -> SweepReport {
        SweepReport {
            reachable: self.reachable.into_iter().collect(),
            candidates,
            unreachable: self.unreachable,
            failures: self.failures.into_iter().collect(),
            elapsed,
        }
    }
}

/// The outcome of one completed sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepReport {
    /// Reachable hosts, ascending.
    pub reachable: Vec<Ipv4Addr>,
    pub candidates: usize,
    pub unreachable: usize,
    /// Probes that could not complete, ascending by address.
    pub failures: Vec<(Ipv4Addr, ProbeFailure)>,
    pub elapsed: Duration,
}

impl SweepReport {
    pub fn from_outcomes(outcomes: &[ProbeOutcome], elapsed: Duration) -> Self {
        let mut aggregator = Aggregator::new();
        outcomes.iter().for_each(|outcome| aggregator.record(outcome));
        aggregator.finish(outcomes.len(), elapsed)
    }

    /// Reachable hosts as dotted-quad strings.
    pub fn reachable_strings(&self) -> Vec<String> {
        self.reachable.iter().map(Ipv4Addr::to_string).collect()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
