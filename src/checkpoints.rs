// Checkpoints - Trusted (height, hash) pairs and sync-progress estimation
//
// What makes a good checkpoint block: surrounded by blocks with reasonable
// timestamps, and containing no strange transactions.

use crate::types::{Hash256, Height, HexError, Timestamp};
use serde::Serialize;
use std::collections::BTreeMap;

/// Signature checks make post-checkpoint transactions this much more expensive
pub const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Ordered checkpoint map plus the statistics used to estimate sync progress
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckpointTable {
    checkpoints: BTreeMap<Height, Hash256>,

    /// UNIX timestamp of the last checkpoint block
    pub time_last_checkpoint: Timestamp,

    /// Total number of transactions between genesis and the last checkpoint
    pub transactions_last_checkpoint: u64,

    /// Estimated number of transactions per day after the checkpoint
    pub transactions_per_day: f64,
}

impl CheckpointTable {
    pub fn new(
        checkpoints: BTreeMap<Height, Hash256>,
        time_last_checkpoint: Timestamp,
        transactions_last_checkpoint: u64,
        transactions_per_day: f64,
    ) -> Self {
        Self {
            checkpoints,
            time_last_checkpoint,
            transactions_last_checkpoint,
            transactions_per_day,
        }
    }

    /// Build from display-order hex hashes
    pub fn from_hex_entries(
        entries: &[(Height, &str)],
        time_last_checkpoint: Timestamp,
        transactions_last_checkpoint: u64,
        transactions_per_day: f64,
    ) -> Result<Self, HexError> {
        let mut checkpoints = BTreeMap::new();
        for (height, hash) in entries {
            checkpoints.insert(*height, Hash256::from_hex(hash)?);
        }
        Ok(Self::new(
            checkpoints,
            time_last_checkpoint,
            transactions_last_checkpoint,
            transactions_per_day,
        ))
    }

    /// Expected hash at `height`, if that height is checkpointed
    pub fn lookup(&self, height: Height) -> Option<&Hash256> {
        self.checkpoints.get(&height)
    }

    /// False only when `height` is checkpointed with a different hash
    pub fn check_block(&self, height: Height, hash: &Hash256) -> bool {
        match self.checkpoints.get(&height) {
            Some(expected) => expected == hash,
            None => true,
        }
    }

    /// Height of the last checkpoint (0 for an empty table)
    pub fn last_checkpoint_height(&self) -> Height {
        self.checkpoints.keys().next_back().copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Height, &Hash256)> {
        self.checkpoints.iter()
    }

    /// Rough fraction of total verification work done at a block.
    ///
    /// Work before the last checkpoint is cheap; work after it costs
    /// `SIGCHECK_VERIFICATION_FACTOR` times more when signatures are checked.
    pub fn guess_verification_progress(
        &self,
        chain_tx: u64,
        block_time: Timestamp,
        now: Timestamp,
        sigchecks: bool,
    ) -> f64 {
        let factor = if sigchecks { SIGCHECK_VERIFICATION_FACTOR } else { 1.0 };

        let (work_before, work_after) = if chain_tx <= self.transactions_last_checkpoint {
            let cheap_before = chain_tx as f64;
            let cheap_after = (self.transactions_last_checkpoint - chain_tx) as f64;
            let expensive_after = (now - self.time_last_checkpoint).max(0) as f64
                / SECONDS_PER_DAY
                * self.transactions_per_day;
            (cheap_before, cheap_after + expensive_after * factor)
        } else {
            let cheap_before = self.transactions_last_checkpoint as f64;
            let expensive_before = (chain_tx - self.transactions_last_checkpoint) as f64;
            let expensive_after =
                (now - block_time).max(0) as f64 / SECONDS_PER_DAY * self.transactions_per_day;
            (cheap_before + expensive_before * factor, expensive_after * factor)
        };

        let total = work_before + work_after;
        if total <= 0.0 {
            // nothing known and nothing left to do
            return 1.0;
        }
        (work_before / total).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn table() -> CheckpointTable {
        CheckpointTable::from_hex_entries(
            &[(0, "0x01"), (100, "0x02"), (250, "0x03")],
            1_551_110_700,
            1_000,
            2_000.0,
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let t = table();
        assert_eq!(t.lookup(100), Some(&Hash256::from_hex("0x02").unwrap()));
        assert_eq!(t.lookup(101), None);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_check_block() {
        let t = table();
        assert!(t.check_block(0, &Hash256::from_hex("0x01").unwrap()));
        assert!(!t.check_block(0, &Hash256::from_hex("0x02").unwrap()));
        assert!(t.check_block(1, &Hash256::from_hex("0x99").unwrap()));
    }

    #[test]
    fn test_last_checkpoint_height() {
        assert_eq!(table().last_checkpoint_height(), 250);
        let empty = CheckpointTable::new(BTreeMap::new(), 0, 0, 0.0);
        assert_eq!(empty.last_checkpoint_height(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_progress_before_checkpoint() {
        let t = table();
        // halfway through the cheap part, checkpoint just reached "now"
        let p = t.guess_verification_progress(500, 0, t.time_last_checkpoint, true);
        assert!((p - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_progress_at_tip_is_complete() {
        let t = table();
        let now = t.time_last_checkpoint + 10 * 86_400;
        let p = t.guess_verification_progress(5_000, now, now, true);
        assert!((p - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_progress_empty_chain() {
        let empty = CheckpointTable::new(BTreeMap::new(), 0, 0, 0.0);
        assert_eq!(empty.guess_verification_progress(0, 0, 0, false), 1.0);
    }

    #[test]
    fn test_progress_tip_ahead_of_clock() {
        let t = table();
        let now = t.time_last_checkpoint + 10 * 86_400;
        // tip stamped two hours in the future is still a valid block
        let p = t.guess_verification_progress(5_000, now + 7_200, now, true);
        assert_eq!(p, 1.0);
    }

    #[test]
    fn test_progress_clock_behind_checkpoint() {
        let t = table();
        let p = t.guess_verification_progress(500, 0, t.time_last_checkpoint - 86_400, true);
        assert!((p - 0.5).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_progress_is_a_fraction(chain_tx in 0u64..100_000, block_time in 0i64..3_000_000_000, now in 0i64..3_000_000_000, sigchecks in any::<bool>()) {
            let p = table().guess_verification_progress(chain_tx, block_time, now, sigchecks);
            prop_assert!((0.0..=1.0).contains(&p));
        }

        #[test]
        fn prop_lookup_matches_inserted(entries in proptest::collection::btree_map(0i32..10_000, any::<[u8; 32]>(), 0..32), missing in 0i32..10_000) {
            let map: BTreeMap<Height, Hash256> = entries
                .iter()
                .map(|(h, b)| (*h, Hash256::from_bytes(*b)))
                .collect();
            let t = CheckpointTable::new(map.clone(), 0, 0, 0.0);

            for (h, hash) in &map {
                prop_assert_eq!(t.lookup(*h), Some(hash));
            }
            prop_assert_eq!(t.lookup(missing), map.get(&missing));
        }
    }
}
