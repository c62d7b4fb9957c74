pub mod hosts;
pub mod sweep;

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use sweepr_common::config::{DEFAULT_CONCURRENCY, SweepConfig};
use sweepr_common::network::spec::RangeSpec;
use sweepr_core::network::tcp::DEFAULT_TCP_PORT;
use sweepr_core::{PingGateway, ProbeGateway, TcpConnectGateway};

#[derive(Parser)]
#[command(name = "sweepr")]
#[command(about = "A concurrent IPv4 ping sweeper.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Seconds to wait for each host
    #[arg(short, long, global = true, default_value_t = 1.0)]
    pub timeout: f64,

    /// Maximum number of probes in flight
    #[arg(short, long, global = true, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: NonZeroUsize,

    /// How to decide whether a host is up
    #[arg(short, long, global = true, value_enum, default_value_t = Method::Ping)]
    pub method: Method,

    /// Port used by the tcp method
    #[arg(short, long, global = true, default_value_t = DEFAULT_TCP_PORT)]
    pub port: u16,

    /// Print results as a JSON array
    #[arg(long, global = true, conflicts_with = "quiet")]
    pub json: bool,

    /// Print bare addresses only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More log output (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find reachable hosts in a network, e.g. 192.168.1.0/24
    #[command(alias = "s")]
    Sweep { target: RangeSpec },
    /// List the candidate hosts of a network without probing them
    #[command(alias = "h")]
    Hosts { target: RangeSpec },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    /// The platform's ping command
    Ping,
    /// A TCP handshake on --port
    Tcp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Pretty,
    Quiet,
    Json,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn output_mode(&self) -> OutputMode {
        match (self.json, self.quiet) {
            (true, _) => OutputMode::Json,
            (false, true) => OutputMode::Quiet,
            (false, false) => OutputMode::Pretty,
        }
    }

    pub fn log_level(&self) -> &'static str {
        match (self.output_mode(), self.verbose) {
            (_, 2..) => "trace",
            (_, 1) => "debug",
            (OutputMode::Pretty, 0) => "info",
            (_, 0) => "warn",
        }
    }

    pub fn sweep_config(&self) -> anyhow::Result<SweepConfig> {
        anyhow::ensure!(self.timeout > 0.0, "timeout must be positive, got {}", self.timeout);
        let timeout = Duration::try_from_secs_f64(self.timeout)
            .with_context(|| format!("invalid timeout '{}'", self.timeout))?;

        Ok(SweepConfig::default()
            .with_timeout(timeout)
            .with_concurrency(self.concurrency))
    }

    pub fn gateway(&self) -> Arc<dyn ProbeGateway> {
        match self.method {
            Method::Ping => Arc::new(PingGateway),
            Method::Tcp => Arc::new(TcpConnectGateway::new(self.port)),
        }
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
