use std::sync::Arc;

use serde_json::json;
use sweepr_common::network::spec::enumerate;
use sweepr_common::{SweepConfig, SweepError};
use sweepr_core::SweepService;

use crate::mock::FixedGateway;

fn service(gateway: &Arc<FixedGateway>) -> SweepService {
    SweepService::new(gateway.clone(), SweepConfig::default())
}

#[tokio::test]
async fn loopback_slash_thirty_reports_both_hosts() {
    let gateway = Arc::new(FixedGateway::new(&["127.0.0.1", "127.0.0.2"]));
    let report = service(&gateway).sweep("127.0.0.0/30").await.unwrap();

    assert_eq!(report.reachable_strings(), vec!["127.0.0.1", "127.0.0.2"]);
    assert_eq!(gateway.calls(), 2);
}

#[tokio::test]
async fn silent_network_yields_empty_result() {
    let gateway = Arc::new(FixedGateway::new(&[]));
    let report = service(&gateway).sweep("10.0.0.0/29").await.unwrap();

    assert!(report.reachable.is_empty());
    assert_eq!(report.unreachable, 6);
    assert_eq!(gateway.calls(), 6);
}

#[tokio::test]
async fn result_is_numerically_ordered_despite_completion_order() {
    let up = ["10.0.0.10", "10.0.0.2", "10.0.0.100", "10.0.0.3", "10.0.0.254"];
    let gateway = Arc::new(FixedGateway::new(&up).with_jitter());
    let report = service(&gateway).sweep("10.0.0.0/24").await.unwrap();

    assert_eq!(
        report.reachable_strings(),
        vec!["10.0.0.2", "10.0.0.3", "10.0.0.10", "10.0.0.100", "10.0.0.254"]
    );
}

#[tokio::test]
async fn repeated_sweeps_are_identical() {
    let gateway = Arc::new(
        FixedGateway::new(&["192.168.7.9", "192.168.7.77", "192.168.7.8"]).with_jitter(),
    );
    let service = service(&gateway);

    let first = service.sweep("192.168.7.0/24").await.unwrap();
    for _ in 0..3 {
        let again = service.sweep("192.168.7.0/24").await.unwrap();
        assert_eq!(again.reachable, first.reachable);
    }
    assert_eq!(gateway.calls(), 4 * 254);
}

#[tokio::test]
async fn host_bits_in_specification_are_normalized() {
    let gateway = Arc::new(FixedGateway::new(&["172.16.5.1"]));
    let report = service(&gateway).sweep("172.16.5.77/29").await.unwrap();

    assert_eq!(report.reachable_strings(), vec!["172.16.5.1"]);
    assert_eq!(report.candidates, 6);
}

#[tokio::test]
async fn malformed_ranges_fail_before_probing() {
    let gateway = Arc::new(FixedGateway::new(&[]));
    let service = service(&gateway);

    for bad in ["192.168.1.0/33", "256.0.0.0/24", "not-a-network", "192.168.1.0", "192.168.1/24"] {
        let err = service.sweep(bad).await.unwrap_err();
        assert!(
            matches!(err, SweepError::InvalidRange { .. }),
            "unexpected error for {bad}: {err:?}"
        );
    }
    assert_eq!(gateway.calls(), 0);
}

#[tokio::test]
async fn non_string_specifications_fail_before_probing() {
    let gateway = Arc::new(FixedGateway::new(&[]));
    let service = service(&gateway);

    for value in [json!(null), json!(12345), json!(["192.168.1.0/24"])] {
        let err = service.sweep_value(&value).await.unwrap_err();
        assert!(
            matches!(err, SweepError::InvalidInputType { .. }),
            "unexpected error for {value}: {err:?}"
        );
    }
    assert_eq!(gateway.calls(), 0);
}

#[test]
fn candidate_counts_match_usable_hosts() {
    assert_eq!(enumerate("192.168.1.0/24").unwrap().len(), 254);
    assert_eq!(enumerate("192.168.1.0/31").unwrap().len(), 2);
    assert_eq!(enumerate("192.168.1.9/32").unwrap().len(), 1);
    assert_eq!(enumerate("10.0.0.0/22").unwrap().len(), 1022);
}
