#![cfg(test)]
//! Mock probe gateways.

use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use sweepr_common::probe::{ProbeFailure, Reachability};
use sweepr_core::ProbeGateway;

fn answer(up: bool) -> Result<Reachability, ProbeFailure> {
    if up {
        Ok(Reachability::Reachable)
    } else {
        Ok(Reachability::Unreachable)
    }
}

/// Reports a fixed set of addresses as reachable.
///
/// Each probe sleeps for a time derived from the last octet, higher
/// addresses finishing first, so completion order never matches candidate
/// order.
pub struct FixedGateway {
    reachable: HashSet<Ipv4Addr>,
    calls: AtomicUsize,
    jitter: bool,
}

impl FixedGateway {
    pub fn new(reachable: &[&str]) -> Self {
        Self {
            reachable: reachable.iter().map(|ip| ip.parse().unwrap()).collect(),
            calls: AtomicUsize::new(0),
            jitter: false,
        }
    }

    pub fn with_jitter(mut self) -> Self {
        self.jitter = true;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProbeGateway for FixedGateway {
    async fn probe(
        &self,
        addr: Ipv4Addr,
        _timeout: Duration,
    ) -> Result<Reachability, ProbeFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.jitter {
            let wait = 255 - u64::from(addr.octets()[3]);
            tokio::time::sleep(Duration::from_micros(wait * 100)).await;
        }
        answer(self.reachable.contains(&addr))
    }
}

/// Records how many probes run at the same time.
#[derive(Default)]
pub struct GaugeGateway {
    active: AtomicUsize,
    peak: AtomicUsize,
    calls: AtomicUsize,
}

impl GaugeGateway {
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProbeGateway for GaugeGateway {
    async fn probe(
        &self,
        addr: Ipv4Addr,
        _timeout: Duration,
    ) -> Result<Reachability, ProbeFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);

        for _ in 0..3 {
            tokio::task::yield_now().await;
        }

        self.active.fetch_sub(1, Ordering::SeqCst);
        answer(addr.octets()[3] == 1)
    }
}

pub enum Fault {
    Error,
    Panic,
    Hang,
}

/// Misbehaves for one address; every other address is reachable.
pub struct FaultyGateway {
    target: Ipv4Addr,
    fault: Fault,
}

impl FaultyGateway {
    pub fn new(target: &str, fault: Fault) -> Self {
        Self {
            target: target.parse().unwrap(),
            fault,
        }
    }
}

#[async_trait]
impl ProbeGateway for FaultyGateway {
    async fn probe(
        &self,
        addr: Ipv4Addr,
        _timeout: Duration,
    ) -> Result<Reachability, ProbeFailure> {
        if addr != self.target {
            return answer(true);
        }
        match self.fault {
            Fault::Error => Err(ProbeFailure::FacilityUnavailable("ping not installed".into())),
            Fault::Panic => panic!("probe for {addr} blew up"),
            Fault::Hang => {
                std::future::pending::<()>().await;
                answer(false)
            }
        }
    }
}
