//! Reachability through the platform's `ping` binary.
//!
//! One echo request per probe. A host counts as reachable only when `ping`
//! exits successfully *and* prints a reply line, since some platforms exit
//! with status 0 on "destination unreachable" answers from a router.

use std::io::ErrorKind;
use std::net::Ipv4Addr;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use sweepr_common::probe::{ProbeFailure, Reachability};
use tokio::process::Command;

use crate::gateway::ProbeGateway;

const PING_BINARY: &str = "ping";
const REPLY_MARKERS: [&str; 2] = ["bytes from", "reply from"];

#[derive(Debug, Clone, Default)]
pub struct PingGateway;

#[async_trait]
impl ProbeGateway for PingGateway {
    async fn probe(&self, addr: Ipv4Addr, timeout: Duration) -> Result<Reachability, ProbeFailure> {
        let args: Vec<String> = ping_args(std::env::consts::OS, addr, timeout)?;

        let output = Command::new(PING_BINARY)
            .args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ProbeFailure::FacilityUnavailable(
                    "ping command not found, is it in your PATH?".to_string(),
                ),
                _ => ProbeFailure::Io(e.to_string()),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if output.status.success() && has_reply(&stdout) {
            Ok(Reachability::Reachable)
        } else {
            Ok(Reachability::Unreachable)
        }
    }

    fn name(&self) -> &'static str {
        "ping"
    }
}

/// Command-line arguments for a single echo request on `os`.
fn ping_args(os: &str, addr: Ipv4Addr, timeout: Duration) -> Result<Vec<String>, ProbeFailure> {
    let ip = addr.to_string();
    let millis = timeout.as_millis().max(1).to_string();
    // Linux only takes whole seconds.
    let secs = timeout.as_secs_f64().ceil().max(1.0).to_string();

    let args = match os {
        "windows" => vec!["-n".into(), "1".into(), "-w".into(), millis, ip],
        "linux" | "android" => vec!["-c".into(), "1".into(), "-W".into(), secs, ip],
        // BSD-style `-W` is in milliseconds.
        "macos" | "ios" | "freebsd" => vec!["-c".into(), "1".into(), "-W".into(), millis, ip],
        other => return Err(ProbeFailure::UnsupportedPlatform(other.to_string())),
    };

    Ok(args)
}

fn has_reply(stdout: &str) -> bool {
    let lower = stdout.to_lowercase();
    REPLY_MARKERS.iter().any(|marker| lower.contains(marker))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
