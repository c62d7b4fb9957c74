//! End-to-end sweep tests driven by deterministic mock gateways.

mod mock;
mod sweep;
