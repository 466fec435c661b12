// QBIC chain parameters - Network profiles, genesis self-check, checkpoints and seeds

pub mod chainparams;
pub mod checkpoints;
pub mod crypto;
pub mod genesis;
pub mod network;
pub mod types;
pub mod zerocoin;

#[cfg(test)]
mod tests;

pub use chainparams::{
    modifiable_params, params, params_for, registry, select_params, try_params,
    ActiveProfileSelector, ModifiableParams, NetworkId, ParamsError, Profile, ProfileRegistry,
};
pub use checkpoints::CheckpointTable;
pub use genesis::{GenesisError, GenesisSpec};
pub use network::{expand_seeds, PeerAddress, SeedSpec6};
pub use types::{Amount, Hash256, Height, Timestamp, CENT, COIN};
pub use zerocoin::{zerocoin_params, ZerocoinModulusCache, ZerocoinParams};
