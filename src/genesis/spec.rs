// Genesis inputs - Declared block fields and the constants they must reproduce
use super::block::{merkle_root, BlockHeader, OutPoint, Script, Transaction, TxIn, TxOut};
use crate::types::{serialize_hex, Amount, Hash256, HexError};
use serde::Serialize;
use tracing::{debug, error};

/// nBits value pushed first in every genesis coinbase scriptSig
pub const GENESIS_COINBASE_BITS: i64 = 486604799;

/// Extra nonce pushed after the bits value
pub const GENESIS_COINBASE_EXTRA_NONCE: i64 = 4;

/// Everything needed to rebuild a network's genesis block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenesisSpec {
    /// Message embedded in the coinbase scriptSig
    pub timestamp_message: String,

    /// Coinbase output value
    pub reward: Amount,

    /// Coinbase output script
    #[serde(serialize_with = "serialize_hex")]
    pub output_script: Vec<u8>,

    pub version: i32,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,

    /// Hash the assembled header must produce
    pub expected_hash: Hash256,

    /// Merkle root the coinbase must produce
    pub expected_merkle_root: Hash256,
}

/// Assembled genesis block
#[derive(Debug, Clone)]
pub struct GenesisBlock {
    pub header: BlockHeader,
    pub coinbase: Transaction,
}

impl GenesisBlock {
    pub fn hash(&self) -> Hash256 {
        self.header.hash()
    }

    pub fn merkle_root(&self) -> Hash256 {
        self.header.merkle_root
    }
}

/// Builds a genesis block from raw inputs; performs no checks
pub struct GenesisBuilder<'a> {
    timestamp_message: &'a str,
    reward: Amount,
    output_script: &'a [u8],
    version: i32,
    time: u32,
    bits: u32,
    nonce: u32,
}

impl<'a> GenesisBuilder<'a> {
    pub fn new(timestamp_message: &'a str, reward: Amount, output_script: &'a [u8]) -> Self {
        Self {
            timestamp_message,
            reward,
            output_script,
            version: 1,
            time: 0,
            bits: 0,
            nonce: 0,
        }
    }

    pub fn version(mut self, version: i32) -> Self {
        self.version = version;
        self
    }

    pub fn time(mut self, time: u32) -> Self {
        self.time = time;
        self
    }

    pub fn bits(mut self, bits: u32) -> Self {
        self.bits = bits;
        self
    }

    pub fn nonce(mut self, nonce: u32) -> Self {
        self.nonce = nonce;
        self
    }

    pub fn build(self) -> GenesisBlock {
        let script_sig = Script::new()
            .push_int(GENESIS_COINBASE_BITS)
            .push_num(GENESIS_COINBASE_EXTRA_NONCE)
            .push_slice(self.timestamp_message.as_bytes());

        let coinbase = Transaction {
            version: 1,
            inputs: vec![TxIn {
                prevout: OutPoint::null(),
                script_sig,
                sequence: u32::MAX,
            }],
            outputs: vec![TxOut {
                value: self.reward,
                script_pubkey: Script::new().push_raw(self.output_script),
            }],
            lock_time: 0,
        };

        let header = BlockHeader {
            version: self.version,
            prev_block: Hash256::ZERO,
            merkle_root: merkle_root(&[coinbase.txid()]),
            time: self.time,
            bits: self.bits,
            nonce: self.nonce,
            accumulator_checkpoint: Hash256::ZERO,
        };

        GenesisBlock { header, coinbase }
    }
}

/// Genesis self-check failures; any of these means the binary's constants disagree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenesisError {
    #[error("genesis hash mismatch on {network}: expected {expected}, computed {computed}")]
    HashMismatch {
        network: String,
        expected: Hash256,
        computed: Hash256,
    },

    #[error("genesis merkle root mismatch on {network}: expected {expected}, computed {computed}")]
    MerkleRootMismatch {
        network: String,
        expected: Hash256,
        computed: Hash256,
    },

    #[error("invalid genesis constant {name}: {reason}")]
    BadConstant { name: &'static str, reason: String },
}

impl From<HexError> for GenesisError {
    fn from(e: HexError) -> Self {
        GenesisError::BadConstant {
            name: "hash",
            reason: e.to_string(),
        }
    }
}

impl GenesisSpec {
    /// Pay-to-pubkey genesis with expected constants given as display hex
    #[allow(clippy::too_many_arguments)]
    pub fn pay_to_pubkey(
        timestamp_message: &str,
        reward: Amount,
        pubkey_hex: &str,
        time: u32,
        bits: u32,
        nonce: u32,
        expected_hash: &str,
        expected_merkle_root: &str,
    ) -> Result<Self, GenesisError> {
        let pubkey = hex::decode(pubkey_hex).map_err(|e| GenesisError::BadConstant {
            name: "output pubkey",
            reason: e.to_string(),
        })?;

        Ok(Self {
            timestamp_message: timestamp_message.to_string(),
            reward,
            output_script: Script::pay_to_pubkey(&pubkey).into_bytes(),
            version: 1,
            time,
            bits,
            nonce,
            expected_hash: Hash256::from_hex(expected_hash)?,
            expected_merkle_root: Hash256::from_hex(expected_merkle_root)?,
        })
    }

    /// Rebuild the genesis block from the declared inputs
    pub fn assemble(&self) -> GenesisBlock {
        GenesisBuilder::new(&self.timestamp_message, self.reward, &self.output_script)
            .version(self.version)
            .time(self.time)
            .bits(self.bits)
            .nonce(self.nonce)
            .build()
    }

    /// Assemble and compare against the expected constants.
    /// Returns the verified genesis hash.
    pub fn verify(&self, network: &str) -> Result<Hash256, GenesisError> {
        let block = self.assemble();
        let hash = block.hash();
        let merkle = block.merkle_root();

        if hash != self.expected_hash {
            error!("Genesis hash mismatch on {}: {} != {}", network, hash, self.expected_hash);
            return Err(GenesisError::HashMismatch {
                network: network.to_string(),
                expected: self.expected_hash,
                computed: hash,
            });
        }

        if merkle != self.expected_merkle_root {
            error!(
                "Genesis merkle root mismatch on {}: {} != {}",
                network, merkle, self.expected_merkle_root
            );
            return Err(GenesisError::MerkleRootMismatch {
                network: network.to_string(),
                expected: self.expected_merkle_root,
                computed: merkle,
            });
        }

        debug!("Genesis verified for {}: {}", network, hash);
        Ok(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUBKEY: &str = "04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f";
    const MESSAGE: &str = "Qbic - By the people, for the people.";

    #[test]
    fn test_coinbase_layout() {
        let script = Script::pay_to_pubkey(&hex::decode(PUBKEY).unwrap()).into_bytes();
        let block = GenesisBuilder::new(MESSAGE, 50 * crate::types::COIN, &script).build();
        let sig = block.coinbase.inputs[0].script_sig.as_bytes();

        assert_eq!(&sig[..7], &[0x04, 0xff, 0xff, 0x00, 0x1d, 0x01, 0x04]);
        assert_eq!(sig[7] as usize, MESSAGE.len());
        assert_eq!(&sig[8..], MESSAGE.as_bytes());

        let out = block.coinbase.outputs[0].script_pubkey.as_bytes();
        assert_eq!(out.len(), 67);
        assert_eq!(out[0], 65);
        assert_eq!(out[66], super::super::block::OP_CHECKSIG);
    }

    #[test]
    fn test_merkle_root_is_coinbase_txid() {
        let block = GenesisBuilder::new(MESSAGE, 1, &[0x51]).time(1).build();
        assert_eq!(block.merkle_root(), block.coinbase.txid());
        assert_eq!(block.header.prev_block, Hash256::ZERO);
    }

    #[test]
    fn test_verify_reports_hash_mismatch() {
        let spec = GenesisSpec::pay_to_pubkey(
            MESSAGE,
            50 * crate::types::COIN,
            PUBKEY,
            1551110700,
            0x1e0ffff0,
            1,
            "0x01",
            "0x01",
        )
        .unwrap();

        match spec.verify("main") {
            Err(GenesisError::HashMismatch { network, expected, .. }) => {
                assert_eq!(network, "main");
                assert_eq!(expected, Hash256::from_hex("0x01").unwrap());
            }
            other => panic!("expected hash mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_pubkey_hex_rejected() {
        let result = GenesisSpec::pay_to_pubkey(MESSAGE, 0, "zz", 0, 0, 0, "0x01", "0x01");
        assert!(matches!(result, Err(GenesisError::BadConstant { name: "output pubkey", .. })));
    }
}
