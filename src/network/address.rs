// Peer addresses - Network address plus advertised services and freshness
use crate::types::Timestamp;
use serde::Serialize;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};

/// Service bit: node can serve full blocks
pub const NODE_NETWORK: u64 = 1 << 0;

/// A peer address as kept in the address manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeerAddress {
    pub addr: SocketAddr,

    /// Advertised service bits
    pub services: u64,

    /// Last time the peer was seen, UNIX seconds
    pub last_seen: Timestamp,
}

impl PeerAddress {
    /// Build from a raw 16-byte address; IPv4-mapped addresses become IPv4
    pub fn from_raw(addr: [u8; 16], port: u16, last_seen: Timestamp) -> Self {
        let v6 = Ipv6Addr::from(addr);
        let ip = match v6.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(v6),
        };

        Self {
            addr: SocketAddr::new(ip, port),
            services: NODE_NETWORK,
            last_seen,
        }
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn is_ipv4(&self) -> bool {
        self.addr.is_ipv4()
    }
}
