use std::sync::Arc;

use colored::*;
use sweepr_common::config::SweepConfig;
use sweepr_common::network::spec::RangeSpec;
use sweepr_common::report::SweepReport;
use sweepr_core::{ProbeGateway, SweepService};
use tracing::Instrument;

use super::OutputMode;
use crate::mprint;
use crate::terminal::{colors, print, spinner};

pub async fn sweep(
    target: &RangeSpec,
    gateway: Arc<dyn ProbeGateway>,
    cfg: &SweepConfig,
    mode: OutputMode,
) -> anyhow::Result<()> {
    if mode != OutputMode::Pretty {
        let report = SweepService::new(gateway, *cfg).perform_sweep(target).await;
        return print_plain(&report, mode);
    }

    print::header("getting ready for sweep");
    print::aligned_line("Network", target.to_string());
    print::aligned_line("Method", gateway.name());
    print::aligned_line("Timeout", format!("{:?}", cfg.timeout));
    print::aligned_line("Workers", cfg.concurrency.to_string());

    let span = spinner::sweep_span(target.hosts().len())?;
    let service =
        SweepService::new(gateway, *cfg).with_progress(spinner::progress_callback(span.clone()));

    let report = service.perform_sweep(target).instrument(span).await;
    sweep_ends(&report);
    Ok(())
}

fn print_plain(report: &SweepReport, mode: OutputMode) -> anyhow::Result<()> {
    let hosts: Vec<String> = report.reachable_strings();
    match mode {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&hosts)?),
        _ => hosts.iter().for_each(|host| println!("{host}")),
    }
    Ok(())
}

fn sweep_ends(report: &SweepReport) {
    if report.reachable.is_empty() {
        print::header("zero hosts detected");
        print::no_results();
    } else {
        print::header("reachable hosts");
        for (idx, host) in report.reachable.iter().enumerate() {
            print::tree_head(idx, &host.to_string());
        }
    }

    if !report.failures.is_empty() {
        mprint!();
        print::header("probe errors");
        let details: Vec<(String, ColoredString)> = report
            .failures
            .iter()
            .map(|(addr, failure)| (addr.to_string(), failure.to_string().color(colors::ERROR)))
            .collect();
        print::as_tree_one_level(details);
    }

    print_summary(report);
}

fn print_summary(report: &SweepReport) {
    let active_hosts: ColoredString = format!("{} reachable", report.reachable.len())
        .bold()
        .green();
    let candidates: ColoredString = report.candidates.to_string().bold();
    let total_time: ColoredString = format!("{:.2}s", report.elapsed.as_secs_f64())
        .bold()
        .yellow();
    let output: String = format!("Sweep Complete: {active_hosts} of {candidates} in {total_time}");

    print::fat_separator();
    print::centerln(&output);
}
