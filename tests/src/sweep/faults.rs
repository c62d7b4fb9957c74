use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;

use sweepr_common::{ProbeFailure, SweepConfig};
use sweepr_core::SweepService;

use crate::mock::{Fault, FaultyGateway};

const TARGET: &str = "10.9.8.3";

async fn sweep_with(fault: Fault, cfg: SweepConfig) -> sweepr_common::SweepReport {
    let gateway = Arc::new(FaultyGateway::new(TARGET, fault));
    SweepService::new(gateway, cfg)
        .sweep("10.9.8.0/29")
        .await
        .expect("a failing probe must not fail the sweep")
}

fn others() -> Vec<String> {
    (1..=6)
        .map(|i| Ipv4Addr::new(10, 9, 8, i))
        .filter(|ip| ip.to_string() != TARGET)
        .map(|ip| ip.to_string())
        .collect()
}

#[tokio::test]
async fn failing_probe_is_isolated() {
    let report = sweep_with(Fault::Error, SweepConfig::default()).await;

    assert_eq!(report.reachable_strings(), others());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].0, TARGET.parse::<Ipv4Addr>().unwrap());
    assert!(matches!(report.failures[0].1, ProbeFailure::FacilityUnavailable(_)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn panicking_probe_is_isolated() {
    let report = sweep_with(Fault::Panic, SweepConfig::default()).await;

    assert_eq!(report.reachable_strings(), others());
    assert!(matches!(&report.failures[..], [(_, ProbeFailure::Panicked(_))]));
}

#[tokio::test]
async fn hanging_probe_is_cut_off_at_the_deadline() {
    let cfg = SweepConfig::default().with_timeout(Duration::from_millis(25));
    let report = sweep_with(Fault::Hang, cfg).await;

    assert_eq!(report.reachable_strings(), others());
    assert_eq!(report.candidates, 6);
    assert_eq!(
        report.failures,
        vec![(TARGET.parse::<Ipv4Addr>().unwrap(), ProbeFailure::TimedOut(cfg.probe_deadline()))]
    );
}
