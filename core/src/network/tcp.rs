use std::io::{self, ErrorKind};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use sweepr_common::probe::{ProbeFailure, Reachability};
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::gateway::ProbeGateway;

pub const DEFAULT_TCP_PORT: u16 = 443;

/// Unprivileged probe: a host is up if it completes or actively refuses a
/// TCP handshake on `port`.
#[derive(Debug, Clone, Copy)]
pub struct TcpConnectGateway {
    port: u16,
}

impl Default for TcpConnectGateway {
    fn default() -> Self {
        Self::new(DEFAULT_TCP_PORT)
    }
}

impl TcpConnectGateway {
    pub fn new(port: u16) -> Self {
        Self { port }
    }
}

#[async_trait]
impl ProbeGateway for TcpConnectGateway {
    async fn probe(
        &self,
        addr: Ipv4Addr,
        probe_timeout: Duration,
    ) -> Result<Reachability, ProbeFailure> {
        let socket_addr = SocketAddr::new(addr.into(), self.port);

        match timeout(probe_timeout, TcpStream::connect(socket_addr)).await {
            Ok(Ok(_)) => Ok(Reachability::Reachable),
            Ok(Err(e)) => classify_connect_error(&e),
            Err(_elapsed) => Ok(Reachability::Unreachable),
        }
    }

    fn name(&self) -> &'static str {
        "tcp-connect"
    }
}

/// Only answers that come from the network decide reachability. A local
/// failure such as fd exhaustion is an error, not a down host.
fn classify_connect_error(e: &io::Error) -> Result<Reachability, ProbeFailure> {
    match e.kind() {
        // An RST still proves someone is home.
        ErrorKind::ConnectionRefused => Ok(Reachability::Reachable),
        ErrorKind::HostUnreachable
        | ErrorKind::NetworkUnreachable
        | ErrorKind::TimedOut
        | ErrorKind::ConnectionReset => Ok(Reachability::Unreachable),
        _ => Err(ProbeFailure::Io(e.to_string())),
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
