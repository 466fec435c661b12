// Network - Seed data a profile carries for peer discovery
// No sockets are opened here; the peer-to-peer layer consumes these lists.

pub mod address;
pub mod dns_seeds;
pub mod seeds;

pub use address::{PeerAddress, NODE_NETWORK};
pub use dns_seeds::{main_dns_seeds, DnsSeedData};
pub use seeds::{
    decode_seed_table, expand_seeds, expand_seeds_now, SeedError, SeedSpec6, ONE_WEEK,
    SEEDS_MAIN, SEEDS_TEST, SEED_RECORD_LEN,
};
