//! # Sweepr Core
//!
//! The concurrent sweep engine.
//!
//! * **[`gateway`]**: the narrow contract every reachability probe satisfies.
//! * **[`scanner`]**: the bounded concurrency scheduler.
//! * **[`discovery`]**: the sweep use case, from range specification to report.
//! * **[`network`]**: concrete gateways (platform `ping`, TCP connect).

pub mod discovery;
pub mod gateway;
pub mod network;
pub mod scanner;

pub use discovery::{SweepService, ping_sweep};
pub use gateway::ProbeGateway;
pub use network::ping::PingGateway;
pub use network::tcp::TcpConnectGateway;
