// Chain parameters - Per-network profiles, their registry and the active selection
//
// Four profiles exist: Main, then Testnet derived from Main, Regtest derived
// from Testnet, and Unittest derived from Main. All are built once and never
// change; Unittest tweaks go through an owned ModifiableParams copy.

pub mod modifiable;
pub mod networks;
pub mod profile;
pub mod registry;
pub mod selector;

pub use modifiable::ModifiableParams;
pub use profile::{
    ActivationHeights, Base58Prefixes, ConsensusParams, FeatureFlags, Profile, Tunables,
    ZerocoinConfig,
};
pub use registry::ProfileRegistry;
pub use selector::{
    modifiable_params, params, params_for, registry, select_params, try_params,
    ActiveProfileSelector,
};

use crate::genesis::GenesisError;
use crate::types::HexError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Closed set of networks a node can run on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NetworkId {
    Main,
    Testnet,
    Regtest,
    Unittest,
}

impl NetworkId {
    pub const ALL: [NetworkId; 4] = [
        NetworkId::Main,
        NetworkId::Testnet,
        NetworkId::Regtest,
        NetworkId::Unittest,
    ];

    /// Short name used in data directories and logs
    pub fn name(&self) -> &'static str {
        match self {
            NetworkId::Main => "main",
            NetworkId::Testnet => "test",
            NetworkId::Regtest => "regtest",
            NetworkId::Unittest => "unittest",
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for NetworkId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl FromStr for NetworkId {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(NetworkId::Main),
            "test" | "testnet" => Ok(NetworkId::Testnet),
            "regtest" => Ok(NetworkId::Regtest),
            "unittest" => Ok(NetworkId::Unittest),
            _ => Err(ParamsError::UnknownNetwork(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamsError {
    #[error("unknown network: {0}")]
    UnknownNetwork(String),

    #[error("invalid combination of -regtest and -testnet")]
    ConflictingNetworkFlags,

    #[error("network {active} already selected, cannot switch to {requested}")]
    AlreadySelected {
        active: NetworkId,
        requested: NetworkId,
    },

    #[error("no network selected")]
    NotSelected,

    #[error("modifiable parameters are only available on unittest, active network is {0}")]
    NotUnittest(NetworkId),

    #[error("invalid key constant {name}: {reason}")]
    BadKey { name: &'static str, reason: String },

    #[error("invalid hash constant: {0}")]
    BadHash(#[from] HexError),

    #[error(transparent)]
    Genesis(#[from] GenesisError),
}
