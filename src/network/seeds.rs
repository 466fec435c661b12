// Fixed seeds - Bundled peer records and their expansion into peer addresses
//
// Seed peers are only a fallback. A node connects to one or two of them and
// then receives fresher addresses, so each seed gets a random "last seen"
// time between one and two weeks ago. The randomness also keeps nodes from
// contacting the same seeds in lock-step.

use super::address::PeerAddress;
use crate::types::Timestamp;
use rand::Rng;
use tracing::debug;

/// One week in seconds
pub const ONE_WEEK: Timestamp = 7 * 24 * 60 * 60;

/// Encoded size of one seed record: 16-byte address then 2-byte port
pub const SEED_RECORD_LEN: usize = 18;

/// Compact seed record (IPv6, IPv4-mapped permitted)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSpec6 {
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec6 {
    /// IPv4 seed as an IPv4-mapped record
    pub const fn ipv4(octets: [u8; 4], port: u16) -> Self {
        Self {
            addr: [
                0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, octets[0], octets[1], octets[2], octets[3],
            ],
            port,
        }
    }

    /// Decode one 18-byte record (port in network byte order)
    pub fn from_bytes(bytes: &[u8; SEED_RECORD_LEN]) -> Self {
        let mut addr = [0u8; 16];
        addr.copy_from_slice(&bytes[..16]);
        Self {
            addr,
            port: u16::from_be_bytes([bytes[16], bytes[17]]),
        }
    }

    pub fn to_bytes(&self) -> [u8; SEED_RECORD_LEN] {
        let mut out = [0u8; SEED_RECORD_LEN];
        out[..16].copy_from_slice(&self.addr);
        out[16..].copy_from_slice(&self.port.to_be_bytes());
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedError {
    #[error("seed table length {0} is not a multiple of 18")]
    TruncatedTable(usize),
}

/// Split a contiguous blob into seed records
pub fn decode_seed_table(bytes: &[u8]) -> Result<Vec<SeedSpec6>, SeedError> {
    if bytes.len() % SEED_RECORD_LEN != 0 {
        return Err(SeedError::TruncatedTable(bytes.len()));
    }

    Ok(bytes
        .chunks_exact(SEED_RECORD_LEN)
        .map(|chunk| {
            let mut record = [0u8; SEED_RECORD_LEN];
            record.copy_from_slice(chunk);
            SeedSpec6::from_bytes(&record)
        })
        .collect())
}

/// Main network fixed seeds
///
/// The DNS seed hosts, on the default P2P port (37195 is assumed, not taken
/// from a published seed dump).
pub static SEEDS_MAIN: &[SeedSpec6] = &[
    SeedSpec6::ipv4([104, 248, 17, 117], 37195),
    SeedSpec6::ipv4([165, 227, 145, 72], 37195),
    SeedSpec6::ipv4([104, 248, 27, 37], 37195),
];

/// Test network fixed seeds
pub static SEEDS_TEST: &[SeedSpec6] = &[];

/// Expand seed records, stamping each with `last_seen` in `[now - 2w, now - 1w)`
pub fn expand_seeds<R: Rng>(
    records: &[SeedSpec6],
    now: Timestamp,
    rng: &mut R,
) -> Vec<PeerAddress> {
    let expanded: Vec<PeerAddress> = records
        .iter()
        .map(|seed| {
            let age = 2 * ONE_WEEK - rng.gen_range(0..ONE_WEEK);
            PeerAddress::from_raw(seed.addr, seed.port, now - age)
        })
        .collect();

    debug!("Expanded {} fixed seeds", expanded.len());
    expanded
}

/// `expand_seeds` against the wall clock and the thread RNG
pub fn expand_seeds_now(records: &[SeedSpec6]) -> Vec<PeerAddress> {
    let now = chrono::Utc::now().timestamp();
    expand_seeds(records, now, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_record_bytes_roundtrip_layout() {
        let seed = SeedSpec6::ipv4([10, 0, 0, 1], 0x9150);
        let bytes = seed.to_bytes();
        assert_eq!(&bytes[10..12], &[0xff, 0xff]);
        assert_eq!(&bytes[16..], &[0x91, 0x50]);
        assert_eq!(SeedSpec6::from_bytes(&bytes), seed);
    }

    #[test]
    fn test_decode_rejects_partial_record() {
        assert_eq!(decode_seed_table(&[0u8; 19]), Err(SeedError::TruncatedTable(19)));
        assert_eq!(decode_seed_table(&[]).unwrap(), vec![]);
    }

    #[test]
    fn test_decode_contiguous_records() {
        let mut blob = Vec::new();
        for seed in SEEDS_MAIN {
            blob.extend_from_slice(&seed.to_bytes());
        }
        assert_eq!(decode_seed_table(&blob).unwrap(), SEEDS_MAIN.to_vec());
    }

    #[test]
    fn test_expand_main_seeds() {
        let mut rng = StdRng::seed_from_u64(7);
        let peers = expand_seeds(SEEDS_MAIN, 1_700_000_000, &mut rng);
        assert_eq!(peers.len(), 3);
        assert!(peers.iter().all(|p| p.is_ipv4() && p.port() == 37195));
        assert_eq!(peers[0].addr.to_string(), "104.248.17.117:37195");
    }

    #[test]
    fn test_main_seeds_mirror_dns_hosts() {
        let hosts: Vec<String> = crate::network::main_dns_seeds()
            .into_iter()
            .map(|d| d.host)
            .collect();
        let peers = expand_seeds(SEEDS_MAIN, 1_700_000_000, &mut StdRng::seed_from_u64(3));
        let ips: Vec<String> = peers.iter().map(|p| p.addr.ip().to_string()).collect();
        assert_eq!(ips, hosts);
    }

    #[test]
    fn test_expand_empty() {
        assert!(expand_seeds_now(SEEDS_TEST).is_empty());
    }

    proptest! {
        #[test]
        fn prop_last_seen_window(count in 0usize..64, now in (3 * ONE_WEEK)..4_000_000_000i64, seed in any::<u64>()) {
            let records: Vec<SeedSpec6> = (0..count)
                .map(|i| SeedSpec6::ipv4([10, 0, (i >> 8) as u8, i as u8], 37195))
                .collect();
            let mut rng = StdRng::seed_from_u64(seed);
            let peers = expand_seeds(&records, now, &mut rng);

            prop_assert_eq!(peers.len(), count);
            for peer in &peers {
                prop_assert!(peer.last_seen >= now - 2 * ONE_WEEK);
                prop_assert!(peer.last_seen < now - ONE_WEEK);
            }
        }
    }
}
