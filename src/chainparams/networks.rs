// Networks - Main profile and the override lists that derive the others
//
// Testnet starts from Main, Regtest from Testnet and Unittest from Main.
// A derived profile is a copy of its base with the listed fields reassigned;
// anything not assigned here is inherited unchanged.

use super::profile::{
    ActivationHeights, Base58Prefixes, ConsensusParams, FeatureFlags, Profile, Tunables,
    ZerocoinConfig, HEIGHT_DISABLED, HEIGHT_NEVER,
};
use super::{NetworkId, ParamsError};
use crate::checkpoints::CheckpointTable;
use crate::genesis::GenesisSpec;
use crate::network::{main_dns_seeds, SEEDS_MAIN, SEEDS_TEST};
use crate::types::{Hash256, CENT, COIN};
use crate::zerocoin::ZEROCOIN_MODULUS;
use std::sync::Arc;

pub const GENESIS_TIMESTAMP_MESSAGE: &str = "Qbic - By the people, for the people.";
pub const GENESIS_OUTPUT_PUBKEY: &str = "04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f";
pub const GENESIS_TIME: u32 = 1551110700;
pub const GENESIS_BITS: u32 = 0x1e0ffff0;
pub const GENESIS_NONCE: u32 = 1015483;
pub const GENESIS_HASH: &str = "00000da439930581626fa1a39e048ccdfd27fd278a8998dac86cc668ff0874ce";
pub const GENESIS_MERKLE_ROOT: &str =
    "8747f1ba5f7eefa0cd203a3a1fc6309120ab1969d3eb0972a89e344cdcd14c5a";

/// Height-0 checkpoint of the test networks; not their genesis hash
pub const PLACEHOLDER_CHECKPOINT: &str = "0x001";

/// Time of the last checkpoint block, shared by every table
const CHECKPOINT_TIME: i64 = 1551110700;

pub fn main_profile() -> Result<Profile, ParamsError> {
    let genesis = GenesisSpec::pay_to_pubkey(
        GENESIS_TIMESTAMP_MESSAGE,
        50 * COIN,
        GENESIS_OUTPUT_PUBKEY,
        GENESIS_TIME,
        GENESIS_BITS,
        GENESIS_NONCE,
        GENESIS_HASH,
        GENESIS_MERKLE_ROOT,
    )?;

    let checkpoints =
        CheckpointTable::from_hex_entries(&[(0, GENESIS_HASH)], CHECKPOINT_TIME, 0, 2000.0)?;

    Ok(Profile {
        network: NetworkId::Main,
        message_start: [0x68, 0x56, 0x71, 0x46],
        alert_pubkey: decode_key("alert pubkey", "0464cc88ce5e9f283d31a2fca5ea95235c0ce4fa8c8ff60adccb2eeb1566254c4ae2cf8b6e6d60f042d9a017ec1b7c6cdc2bb3f2f89ee75fc3705dcde53884154b")?,
        default_port: 37195,
        consensus: ConsensusParams {
            pow_limit: Hash256::max_shr(20),
            subsidy_halving_interval: 210000,
            max_reorganization_depth: 100,
            enforce_block_upgrade_majority: 750,
            reject_block_outdated_majority: 950,
            to_check_block_upgrade_majority: 1000,
            miner_threads: 0,
            target_timespan: 60,
            target_spacing: 60,
            maturity: 80,
            masternode_count_drift: 20,
            masternode_collateral_limit: 10000,
            max_money_out: 52_000_000 * COIN,
        },
        activation: ActivationHeights {
            last_pow_block: 160,
            modifier_update_block: HEIGHT_NEVER,
            zerocoin_start_height: 201,
            zerocoin_start_time: 1551410700,
            block_enforce_serial_range: 201,
            block_recalculate_accumulators: HEIGHT_DISABLED,
            block_first_fraudulent: HEIGHT_DISABLED,
            block_last_good_checkpoint: HEIGHT_DISABLED,
            block_enforce_invalid_utxo: HEIGHT_NEVER,
            invalid_amount_filtered: 0,
            block_zerocoin_v2: HEIGHT_NEVER,
        },
        genesis,
        fixed_seeds: SEEDS_MAIN.to_vec(),
        seed_addresses: Vec::new(),
        dns_seeds: main_dns_seeds(),
        base58_prefixes: Base58Prefixes {
            pubkey_address: vec![58],
            script_address: vec![13],
            secret_key: vec![251],
            ext_public_key: vec![0x02, 0x2D, 0x25, 0x33],
            ext_secret_key: vec![0x02, 0x21, 0x31, 0x2B],
            ext_coin_type: vec![0x80, 0x00, 0x00, 0x77],
        },
        flags: FeatureFlags {
            mining_requires_peers: true,
            allow_min_difficulty_blocks: false,
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
            skip_proof_of_work_check: false,
            testnet_to_be_deprecated_field_rpc: false,
            headers_first_syncing_active: false,
        },
        tunables: Tunables {
            pool_max_transactions: 3,
            spork_key: "04425fe4cff2ed3c86cd6c9acb9400b1bd7571ac8f309a6810952052504442f013765cefd4720cf728ff9c9321dfe0f79613bb20e297a79ff8601c57faaaf3df08".to_string(),
            obfuscation_pool_dummy_address: "QRKP3hAk5siwyWqGc1gh2QbktcbRiewH1q".to_string(),
            start_masternode_payments: 1543062600,
            budget_fee_confirmations: 6,
        },
        zerocoin: ZerocoinConfig {
            modulus: ZEROCOIN_MODULUS,
            max_spends_per_transaction: 7,
            min_mint_fee: CENT,
            mint_required_confirmations: 20,
            required_accumulation: 1,
            default_security_level: 100,
            header_version: 4,
            required_stake_depth: 200,
        },
        checkpoints: Arc::new(checkpoints),
    })
}

pub fn testnet_profile(main: &Profile) -> Result<Profile, ParamsError> {
    let mut p = main.clone();

    p.network = NetworkId::Testnet;
    p.message_start = [0x47, 0x57, 0x6d, 0x0a];
    p.alert_pubkey = decode_key("alert pubkey", "0405c4bc7866c694c78addedb8f31e030604aacf95b997e9ef4a8565a5c932a76e7a5076403ade126d2522b8291ac6d038340210ef41c8bcd3ddb5b1aebf928d80")?;
    p.default_port = 38196;

    p.consensus.enforce_block_upgrade_majority = 51;
    p.consensus.reject_block_outdated_majority = 75;
    p.consensus.to_check_block_upgrade_majority = 100;
    p.consensus.miner_threads = 0;
    p.consensus.target_timespan = 60;
    p.consensus.target_spacing = 60;
    p.consensus.maturity = 15;
    p.consensus.masternode_count_drift = 4;
    p.consensus.masternode_collateral_limit = 1000;
    p.consensus.max_money_out = 43_199_500 * COIN;

    p.activation.last_pow_block = 200;
    p.activation.modifier_update_block = 51197;
    p.activation.zerocoin_start_height = 201576;
    p.activation.zerocoin_start_time = 1551410700;
    p.activation.block_enforce_serial_range = 1;
    p.activation.block_recalculate_accumulators = HEIGHT_DISABLED;
    p.activation.block_first_fraudulent = HEIGHT_DISABLED;
    p.activation.block_last_good_checkpoint = HEIGHT_DISABLED;
    p.activation.block_enforce_invalid_utxo = HEIGHT_NEVER;
    p.activation.invalid_amount_filtered = 0;
    p.activation.block_zerocoin_v2 = HEIGHT_NEVER;

    p.genesis.time = GENESIS_TIME;
    p.genesis.nonce = GENESIS_NONCE;

    p.clear_seeds();
    p.fixed_seeds = SEEDS_TEST.to_vec();

    p.base58_prefixes = Base58Prefixes {
        pubkey_address: vec![139],
        script_address: vec![19],
        secret_key: vec![239],
        ext_public_key: vec![0x3a, 0x80, 0x61, 0xa0],
        ext_secret_key: vec![0x3a, 0x80, 0x58, 0x37],
        ext_coin_type: vec![0x80, 0x00, 0x00, 0x01],
    };

    p.flags.mining_requires_peers = true;
    p.flags.allow_min_difficulty_blocks = true;
    p.flags.default_consistency_checks = false;
    p.flags.require_standard = true;
    p.flags.mine_blocks_on_demand = false;
    p.flags.testnet_to_be_deprecated_field_rpc = true;

    p.tunables.pool_max_transactions = 2;
    p.tunables.spork_key = "040e49ffff53cd6fdbf25d466d265ae8cfa2c9ea211dbc3a5ce674a1dc3062ab174b875094bdb381a49717b750e990f373966db66ec3d6315669713e9d99db17ce".to_string();
    p.tunables.obfuscation_pool_dummy_address = "yDoyykG4KVZi3VrHJoVTCZ8JEnJQcRqt6u".to_string();
    p.tunables.start_masternode_payments = 1543062600;
    // finalization window on testnet is only 8 blocks
    p.tunables.budget_fee_confirmations = 3;

    p.checkpoints = Arc::new(CheckpointTable::from_hex_entries(
        &[(0, PLACEHOLDER_CHECKPOINT)],
        CHECKPOINT_TIME,
        0,
        250.0,
    )?);

    Ok(p)
}

pub fn regtest_profile(testnet: &Profile) -> Result<Profile, ParamsError> {
    let mut p = testnet.clone();

    p.network = NetworkId::Regtest;
    p.message_start = [0x4f, 0x6f, 0x50, 0x75];
    p.default_port = 38197;

    p.consensus.subsidy_halving_interval = 150;
    p.consensus.enforce_block_upgrade_majority = 750;
    p.consensus.reject_block_outdated_majority = 950;
    p.consensus.to_check_block_upgrade_majority = 1000;
    p.consensus.miner_threads = 1;
    p.consensus.target_timespan = 24 * 60 * 60;
    p.consensus.target_spacing = 60;
    p.consensus.pow_limit = Hash256::max_shr(1);

    p.genesis.time = GENESIS_TIME;
    p.genesis.bits = GENESIS_BITS;
    p.genesis.nonce = GENESIS_NONCE;

    p.clear_seeds();

    p.flags.mining_requires_peers = false;
    p.flags.allow_min_difficulty_blocks = true;
    p.flags.default_consistency_checks = true;
    p.flags.require_standard = false;
    p.flags.mine_blocks_on_demand = true;
    p.flags.testnet_to_be_deprecated_field_rpc = false;

    p.checkpoints = Arc::new(CheckpointTable::from_hex_entries(
        &[(0, PLACEHOLDER_CHECKPOINT)],
        CHECKPOINT_TIME,
        0,
        100.0,
    )?);

    Ok(p)
}

pub fn unittest_profile(main: &Profile) -> Profile {
    let mut p = main.clone();

    p.network = NetworkId::Unittest;
    p.default_port = 38198;

    p.clear_seeds();

    p.flags.mining_requires_peers = false;
    p.flags.default_consistency_checks = true;
    p.flags.allow_min_difficulty_blocks = false;
    p.flags.mine_blocks_on_demand = true;

    // same table object as Main
    p.checkpoints = Arc::clone(&main.checkpoints);

    p
}

fn decode_key(name: &'static str, key_hex: &str) -> Result<Vec<u8>, ParamsError> {
    hex::decode(key_hex).map_err(|e| ParamsError::BadKey {
        name,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_constants() {
        let main = main_profile().unwrap();
        assert_eq!(main.message_start, [0x68, 0x56, 0x71, 0x46]);
        assert_eq!(main.default_port, 37195);
        assert_eq!(main.consensus.max_money_out, 5_200_000_000_000_000);
        assert_eq!(main.consensus.interval(), 1);
        assert_eq!(main.activation.block_recalculate_accumulators, -2);
        assert_eq!(main.fixed_seeds.len(), 3);
        assert_eq!(main.dns_seeds.len(), 3);
        assert_eq!(main.alert_pubkey.len(), 65);
        assert_eq!(main.genesis.version, 1);
    }

    #[test]
    fn test_pow_limits() {
        let main = main_profile().unwrap();
        let testnet = testnet_profile(&main).unwrap();
        let regtest = regtest_profile(&testnet).unwrap();

        assert_eq!(
            main.consensus.pow_limit.to_hex(),
            "00000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        );
        assert_eq!(testnet.consensus.pow_limit, main.consensus.pow_limit);
        assert_eq!(
            regtest.consensus.pow_limit.to_hex(),
            "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        );
    }

    #[test]
    fn test_regtest_inherits_testnet_overrides() {
        let main = main_profile().unwrap();
        let testnet = testnet_profile(&main).unwrap();
        let regtest = regtest_profile(&testnet).unwrap();

        // testnet values that regtest does not reassign
        assert_eq!(regtest.alert_pubkey, testnet.alert_pubkey);
        assert_eq!(regtest.base58_prefixes, testnet.base58_prefixes);
        assert_eq!(regtest.consensus.maturity, 15);
        assert_eq!(regtest.activation.last_pow_block, 200);
        assert_eq!(regtest.tunables.budget_fee_confirmations, 3);

        assert_eq!(regtest.consensus.subsidy_halving_interval, 150);
        assert_eq!(regtest.consensus.interval(), 1440);
        assert_eq!(regtest.checkpoints.transactions_per_day, 100.0);
    }

    #[test]
    fn test_unittest_flags() {
        let main = main_profile().unwrap();
        let unit = unittest_profile(&main);

        assert!(!unit.flags.mining_requires_peers);
        assert!(unit.flags.default_consistency_checks);
        assert!(unit.flags.mine_blocks_on_demand);
        assert!(!unit.flags.allow_min_difficulty_blocks);
        assert_eq!(unit.flags.require_standard, main.flags.require_standard);
        assert!(unit.fixed_seeds.is_empty() && unit.dns_seeds.is_empty());
        assert!(Arc::ptr_eq(&unit.checkpoints, &main.checkpoints));
    }
}
