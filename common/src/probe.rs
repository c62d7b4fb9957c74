use std::net::Ipv4Addr;
use std::time::Duration;

use thiserror::Error;

/// A gateway's answer for one address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reachability {
    Reachable,
    Unreachable,
}

/// Why a probe could not produce a yes/no answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeFailure {
    #[error("probe facility unavailable: {0}")]
    FacilityUnavailable(String),
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),
    #[error("probe did not finish within {0:?}")]
    TimedOut(Duration),
    #[error("probe panicked: {0}")]
    Panicked(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("probe ended without reporting an outcome")]
    Lost,
}

/// The recorded result of probing one candidate address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Reachable(Ipv4Addr),
    Unreachable(Ipv4Addr),
    ProbeError(Ipv4Addr, ProbeFailure),
}

impl ProbeOutcome {
    pub fn from_reply(addr: Ipv4Addr, reply: Result<Reachability, ProbeFailure>) -> Self {
        match reply {
            Ok(Reachability::Reachable) => Self::Reachable(addr),
            Ok(Reachability::Unreachable) => Self::Unreachable(addr),
            Err(failure) => Self::ProbeError(addr, failure),
        }
    }

    pub fn addr(&self) -> Ipv4Addr {
        match self {
            Self::Reachable(addr) | Self::Unreachable(addr) | Self::ProbeError(addr, _) => *addr,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Reachable(_))
    }

    pub fn failure(&self) -> Option<&ProbeFailure> {
        match self {
            Self::ProbeError(_, failure) => Some(failure),
            _ => None,
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
