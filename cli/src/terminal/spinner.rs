use std::sync::Arc;

use indicatif::ProgressStyle;
use sweepr_core::scanner::ProgressCallback;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TEMPLATE: &str = concat!(
    "{spinner:.blue} probing ",
    "[{bar:32.green/bright_black}] {pos}/{len} ({elapsed})"
);
const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// A span that renders as a progress bar over `total` probes while entered.
pub fn sweep_span(total: u64) -> anyhow::Result<Span> {
    let span = info_span!("sweep", indicatif.pb_show = true);
    let style = ProgressStyle::with_template(TEMPLATE)?.tick_strings(TICKS);
    span.pb_set_style(&style);
    span.pb_set_length(total);
    Ok(span)
}

pub fn progress_callback(span: Span) -> ProgressCallback {
    Arc::new(move |_completed: usize, _total: usize| span.pb_inc(1))
}
