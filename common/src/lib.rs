//! # Sweepr Common
//!
//! Domain types shared by the sweep engine and its front-ends.
//!
//! * **[`network`]**: range specifications and candidate address enumeration.
//! * **[`probe`]**: the closed set of per-address probe outcomes.
//! * **[`report`]**: aggregation of outcomes into an ordered sweep result.
//! * **[`config`]**: knobs for a single sweep.
//! * **[`error`]**: fatal, user-facing errors.

pub mod config;
pub mod error;
pub mod network;
pub mod probe;
pub mod report;

pub use config::SweepConfig;
pub use error::SweepError;
pub use network::range::Ipv4Range;
pub use network::spec::RangeSpec;
pub use probe::{ProbeFailure, ProbeOutcome, Reachability};
pub use report::{Aggregator, SweepReport};
