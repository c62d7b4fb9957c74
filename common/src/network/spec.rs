//! # Range Specification
//!
//! Parses a CIDR string such as `192.168.1.0/24` into the candidate host
//! addresses of a sweep.
//!
//! Parsing is non-strict: host bits in the address part are accepted and
//! masked off, so `192.168.1.77/24` denotes `192.168.1.0/24`.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use pnet::ipnetwork::Ipv4Network;
use serde_json::Value;

use crate::error::SweepError;
use crate::network::range::{self, Ipv4Range};

/// A validated, normalized IPv4 network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeSpec {
    network: Ipv4Network,
}

impl FromStr for RangeSpec {
    type Err = SweepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((ip_str, prefix_str)) = s.split_once('/') else {
            return Err(SweepError::invalid_range(s, "missing '/<prefix>' length"));
        };

        let ipv4_addr = ip_str
            .parse::<Ipv4Addr>()
            .map_err(|e| SweepError::invalid_range(s, format!("invalid address '{ip_str}': {e}")))?;

        // `u8::from_str` takes a leading '+'.
        if prefix_str.is_empty() || !prefix_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SweepError::invalid_range(
                s,
                format!("prefix length '{prefix_str}' is not a decimal number"),
            ));
        }

        let prefix = prefix_str.parse::<u8>().map_err(|e| {
            SweepError::invalid_range(s, format!("invalid prefix length '{prefix_str}': {e}"))
        })?;

        let network = Ipv4Network::new(ipv4_addr, prefix)
            .map_err(|e| SweepError::invalid_range(s, format!("prefix /{prefix}: {e}")))?;

        // Normalize to the containing network.
        let network = Ipv4Network::new(network.network(), prefix)
            .map_err(|e| SweepError::invalid_range(s, e))?;

        Ok(Self { network })
    }
}

impl fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network.ip(), self.network.prefix())
    }
}

impl RangeSpec {
    /// Parses a specification taken from a dynamically typed source.
    ///
    /// Anything other than a JSON string fails with
    /// [`SweepError::InvalidInputType`].
    pub fn from_value(value: &Value) -> Result<Self, SweepError> {
        match value {
            Value::String(s) => s.parse(),
            other => Err(SweepError::InvalidInputType {
                found: json_type_name(other),
            }),
        }
    }

    pub fn prefix(&self) -> u8 {
        self.network.prefix()
    }

    /// Total addresses in the network, base and broadcast included.
    pub fn num_addresses(&self) -> u64 {
        1u64 << (32 - u32::from(self.prefix()))
    }

    pub fn hosts(&self) -> Ipv4Range {
        range::host_range(&self.network)
    }

    /// The ordered candidate address set.
    pub fn candidates(&self) -> Vec<Ipv4Addr> {
        self.hosts().to_iter().collect()
    }
}

/// Parses `spec` and returns its usable host addresses in ascending order.
pub fn enumerate(spec: &str) -> Result<Vec<Ipv4Addr>, SweepError> {
    Ok(spec.parse::<RangeSpec>()?.candidates())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
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
