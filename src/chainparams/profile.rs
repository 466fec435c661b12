// Profile - Every constant a node runs with on one network
use super::NetworkId;
use crate::checkpoints::CheckpointTable;
use crate::genesis::GenesisSpec;
use crate::network::{expand_seeds, DnsSeedData, PeerAddress, SeedSpec6};
use crate::types::{serialize_hex, Amount, Hash256, Height, Timestamp};
use crate::zerocoin::{zerocoin_params, ZerocoinParams};
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;

/// Height that is never reached
pub const HEIGHT_NEVER: Height = 2147483646;

/// `~1` sentinel used for accumulator heights that are switched off
pub const HEIGHT_DISABLED: Height = !1;

/// Consensus constants
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsensusParams {
    /// Easiest allowed proof-of-work target
    pub pow_limit: Hash256,
    pub subsidy_halving_interval: i32,
    pub max_reorganization_depth: i32,

    /// Block-version upgrade majorities (enforce / reject / window)
    pub enforce_block_upgrade_majority: i32,
    pub reject_block_outdated_majority: i32,
    pub to_check_block_upgrade_majority: i32,

    /// Default number of mining threads (0 = one per core)
    pub miner_threads: i32,

    /// Retarget timespan and block spacing, seconds
    pub target_timespan: i64,
    pub target_spacing: i64,

    /// Confirmations before a coinbase or stake output is spendable
    pub maturity: i32,
    pub masternode_count_drift: i32,
    pub masternode_collateral_limit: i32,
    pub max_money_out: Amount,
}

impl ConsensusParams {
    /// Blocks per retarget interval
    pub fn interval(&self) -> i64 {
        self.target_timespan / self.target_spacing
    }
}

/// Height and time based activations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivationHeights {
    pub last_pow_block: Height,
    pub modifier_update_block: Height,
    pub zerocoin_start_height: Height,
    pub zerocoin_start_time: Timestamp,
    pub block_enforce_serial_range: Height,
    pub block_recalculate_accumulators: Height,
    pub block_first_fraudulent: Height,
    pub block_last_good_checkpoint: Height,
    pub block_enforce_invalid_utxo: Height,

    /// Invalid coins filtered through exchanges that still count as valid
    pub invalid_amount_filtered: Amount,
    pub block_zerocoin_v2: Height,
}

impl ActivationHeights {
    /// True for heights the chain will never reach
    pub fn is_sentinel(height: Height) -> bool {
        height == HEIGHT_NEVER || height == HEIGHT_DISABLED
    }
}

/// Base58 version bytes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Base58Prefixes {
    #[serde(serialize_with = "serialize_hex")]
    pub pubkey_address: Vec<u8>,
    #[serde(serialize_with = "serialize_hex")]
    pub script_address: Vec<u8>,
    #[serde(serialize_with = "serialize_hex")]
    pub secret_key: Vec<u8>,
    #[serde(serialize_with = "serialize_hex")]
    pub ext_public_key: Vec<u8>,
    #[serde(serialize_with = "serialize_hex")]
    pub ext_secret_key: Vec<u8>,

    /// BIP44 coin type
    #[serde(serialize_with = "serialize_hex")]
    pub ext_coin_type: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureFlags {
    pub mining_requires_peers: bool,
    pub allow_min_difficulty_blocks: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub skip_proof_of_work_check: bool,
    pub testnet_to_be_deprecated_field_rpc: bool,
    pub headers_first_syncing_active: bool,
}

/// Masternode, spork and budget settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tunables {
    pub pool_max_transactions: i32,
    pub spork_key: String,
    pub obfuscation_pool_dummy_address: String,
    pub start_masternode_payments: Timestamp,

    /// Confirmations for the budget finalization fee
    pub budget_fee_confirmations: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZerocoinConfig {
    /// Accumulator modulus numeral (decimal digits)
    pub modulus: &'static str,
    pub max_spends_per_transaction: i32,
    pub min_mint_fee: Amount,
    pub mint_required_confirmations: i32,
    pub required_accumulation: i32,
    pub default_security_level: i32,

    /// Block version required once zerocoin is active
    pub header_version: i32,
    pub required_stake_depth: i32,
}

/// Immutable parameter bundle for one network
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub network: NetworkId,

    /// P2P message start bytes
    #[serde(serialize_with = "serialize_hex")]
    pub message_start: [u8; 4],

    #[serde(serialize_with = "serialize_hex")]
    pub alert_pubkey: Vec<u8>,
    pub default_port: u16,

    pub consensus: ConsensusParams,
    pub activation: ActivationHeights,
    pub genesis: GenesisSpec,

    /// Bundled seed records, as compiled in
    #[serde(skip)]
    pub fixed_seeds: Vec<SeedSpec6>,

    /// `fixed_seeds` expanded into peer addresses when the registry is built
    pub seed_addresses: Vec<PeerAddress>,
    pub dns_seeds: Vec<DnsSeedData>,

    pub base58_prefixes: Base58Prefixes,
    pub flags: FeatureFlags,
    pub tunables: Tunables,
    pub zerocoin: ZerocoinConfig,

    /// Shared with other profiles where the tables are the same
    pub checkpoints: Arc<CheckpointTable>,
}

impl Profile {
    pub fn name(&self) -> &'static str {
        self.network.name()
    }

    /// Declared genesis hash (checked against a rebuild when the registry is built)
    pub fn genesis_hash(&self) -> Hash256 {
        self.genesis.expected_hash
    }

    pub fn checkpoints(&self) -> &CheckpointTable {
        &self.checkpoints
    }

    /// Process-wide zerocoin parameters; `use_modulus_v1` selects the hex reading
    pub fn zerocoin_params(&self, use_modulus_v1: bool) -> &'static ZerocoinParams {
        zerocoin_params(use_modulus_v1)
    }

    /// Replace `seed_addresses` with a fresh expansion of `fixed_seeds`
    pub fn expand_fixed_seeds<R: Rng>(&mut self, now: Timestamp, rng: &mut R) {
        self.seed_addresses = expand_seeds(&self.fixed_seeds, now, rng);
    }

    /// Drop both the fixed and DNS seed lists
    pub fn clear_seeds(&mut self) {
        self.fixed_seeds.clear();
        self.seed_addresses.clear();
        self.dns_seeds.clear();
    }
}
