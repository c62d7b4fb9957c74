use std::num::NonZeroUsize;
use std::sync::Arc;

use sweepr_common::SweepConfig;
use sweepr_core::SweepService;

use crate::mock::GaugeGateway;

fn limited(limit: usize) -> SweepConfig {
    SweepConfig::default().with_concurrency(NonZeroUsize::new(limit).unwrap())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn slash_sixteen_never_exceeds_default_limit() {
    let gateway = Arc::new(GaugeGateway::default());
    let service = SweepService::new(gateway.clone(), SweepConfig::default());

    let report = service.sweep("10.20.0.0/16").await.unwrap();

    assert_eq!(gateway.calls(), 65_534);
    assert!(gateway.peak() <= 20, "peak concurrency was {}", gateway.peak());
    assert!(gateway.peak() >= 1);
    assert_eq!(report.reachable.len(), 256);
    assert_eq!(report.candidates, 65_534);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn limit_of_one_serializes_probes() {
    let gateway = Arc::new(GaugeGateway::default());
    let service = SweepService::new(gateway.clone(), limited(1));

    service.sweep("10.0.0.0/26").await.unwrap();

    assert_eq!(gateway.peak(), 1);
    assert_eq!(gateway.calls(), 62);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn limit_larger_than_candidates_is_fine() {
    let gateway = Arc::new(GaugeGateway::default());
    let service = SweepService::new(gateway.clone(), limited(500));

    let report = service.sweep("10.0.0.0/28").await.unwrap();

    assert!(gateway.peak() <= 14);
    assert_eq!(report.reachable_strings(), vec!["10.0.0.1"]);
}
