// Block primitives - Just enough transaction and header encoding to rebuild a genesis block
use crate::crypto::{hash_quark, sha256d};
use crate::types::{Amount, Hash256};

/// Opcodes used by genesis scripts
pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_1NEGATE: u8 = 0x4f;
pub const OP_1: u8 = 0x51;
pub const OP_CHECKSIG: u8 = 0xac;

/// First header version hashed with double SHA-256 instead of Quark
pub const ZEROCOIN_HEADER_VERSION: i32 = 4;

/// Raw script bytes with push helpers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script(Vec<u8>);

impl Script {
    pub fn new() -> Self {
        Script(Vec::new())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Push a data blob with the shortest push opcode
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < OP_PUSHDATA1 as usize {
            self.0.push(len as u8);
        } else if len <= 0xff {
            self.0.push(OP_PUSHDATA1);
            self.0.push(len as u8);
        } else if len <= 0xffff {
            self.0.push(OP_PUSHDATA2);
            self.0.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.0.push(OP_PUSHDATA4);
            self.0.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }

    /// Push an integer: small values become OP_N, others a script number
    pub fn push_int(mut self, value: i64) -> Self {
        if value == -1 || (1..=16).contains(&value) {
            self.0.push((value + OP_1 as i64 - 1) as u8);
            self
        } else if value == 0 {
            self.0.push(OP_0);
            self
        } else {
            self.push_slice(&script_num(value))
        }
    }

    /// Push a script number as data, never as OP_N
    pub fn push_num(self, value: i64) -> Self {
        self.push_slice(&script_num(value))
    }

    /// Append already-encoded script bytes
    pub fn push_raw(mut self, bytes: &[u8]) -> Self {
        self.0.extend_from_slice(bytes);
        self
    }

    pub fn push_opcode(mut self, opcode: u8) -> Self {
        self.0.push(opcode);
        self
    }

    /// `<pubkey> OP_CHECKSIG`
    pub fn pay_to_pubkey(pubkey: &[u8]) -> Self {
        Script::new().push_slice(pubkey).push_opcode(OP_CHECKSIG)
    }
}

/// Minimal little-endian sign-magnitude encoding
pub fn script_num(value: i64) -> Vec<u8> {
    if value == 0 {
        return Vec::new();
    }

    let negative = value < 0;
    let mut abs = value.unsigned_abs();
    let mut out = Vec::new();
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }

    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}

/// Bitcoin CompactSize length prefix
pub fn write_compact_size(out: &mut Vec<u8>, n: u64) {
    if n < 0xfd {
        out.push(n as u8);
    } else if n <= 0xffff {
        out.push(0xfd);
        out.extend_from_slice(&(n as u16).to_le_bytes());
    } else if n <= 0xffff_ffff {
        out.push(0xfe);
        out.extend_from_slice(&(n as u32).to_le_bytes());
    } else {
        out.push(0xff);
        out.extend_from_slice(&n.to_le_bytes());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutPoint {
    pub hash: Hash256,
    pub index: u32,
}

impl OutPoint {
    /// The null prevout spent by every coinbase
    pub fn null() -> Self {
        Self {
            hash: Hash256::ZERO,
            index: u32::MAX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxIn {
    pub prevout: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOut {
    pub value: Amount,
    pub script_pubkey: Script,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    /// Legacy (pre-segwit) wire encoding
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(256);
        out.extend_from_slice(&self.version.to_le_bytes());

        write_compact_size(&mut out, self.inputs.len() as u64);
        for input in &self.inputs {
            out.extend_from_slice(input.prevout.hash.as_bytes());
            out.extend_from_slice(&input.prevout.index.to_le_bytes());
            write_compact_size(&mut out, input.script_sig.as_bytes().len() as u64);
            out.extend_from_slice(input.script_sig.as_bytes());
            out.extend_from_slice(&input.sequence.to_le_bytes());
        }

        write_compact_size(&mut out, self.outputs.len() as u64);
        for output in &self.outputs {
            out.extend_from_slice(&output.value.to_le_bytes());
            write_compact_size(&mut out, output.script_pubkey.as_bytes().len() as u64);
            out.extend_from_slice(output.script_pubkey.as_bytes());
        }

        out.extend_from_slice(&self.lock_time.to_le_bytes());
        out
    }

    pub fn txid(&self) -> Hash256 {
        sha256d(&self.serialize())
    }
}

/// Merkle root over transaction ids (odd levels duplicate the last node)
pub fn merkle_root(txids: &[Hash256]) -> Hash256 {
    if txids.is_empty() {
        return Hash256::ZERO;
    }

    let mut level: Vec<Hash256> = txids.to_vec();
    while level.len() > 1 {
        let mut next = Vec::with_capacity((level.len() + 1) / 2);
        for pair in level.chunks(2) {
            let left = pair[0];
            let right = if pair.len() == 2 { pair[1] } else { pair[0] };
            let mut buf = [0u8; 64];
            buf[..32].copy_from_slice(left.as_bytes());
            buf[32..].copy_from_slice(right.as_bytes());
            next.push(sha256d(&buf));
        }
        level = next;
    }
    level[0]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block: Hash256,
    pub merkle_root: Hash256,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
    /// Only serialized for headers at or above `ZEROCOIN_HEADER_VERSION`
    pub accumulator_checkpoint: Hash256,
}

impl BlockHeader {
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(112);
        out.extend_from_slice(&self.version.to_le_bytes());
        out.extend_from_slice(self.prev_block.as_bytes());
        out.extend_from_slice(self.merkle_root.as_bytes());
        out.extend_from_slice(&self.time.to_le_bytes());
        out.extend_from_slice(&self.bits.to_le_bytes());
        out.extend_from_slice(&self.nonce.to_le_bytes());
        if self.version >= ZEROCOIN_HEADER_VERSION {
            out.extend_from_slice(self.accumulator_checkpoint.as_bytes());
        }
        out
    }

    pub fn hash(&self) -> Hash256 {
        let bytes = self.serialize();
        if self.version < ZEROCOIN_HEADER_VERSION {
            hash_quark(&bytes)
        } else {
            sha256d(&bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_num_encoding() {
        assert_eq!(script_num(0), Vec::<u8>::new());
        assert_eq!(script_num(4), vec![0x04]);
        assert_eq!(script_num(0x80), vec![0x80, 0x00]);
        assert_eq!(script_num(-1), vec![0x81]);
        assert_eq!(script_num(486604799), vec![0xff, 0xff, 0x00, 0x1d]);
    }

    #[test]
    fn test_push_int_small_values_use_opcodes() {
        assert_eq!(Script::new().push_int(0).as_bytes(), &[OP_0]);
        assert_eq!(Script::new().push_int(-1).as_bytes(), &[OP_1NEGATE]);
        assert_eq!(Script::new().push_int(16).as_bytes(), &[0x60]);
        assert_eq!(Script::new().push_int(17).as_bytes(), &[0x01, 0x11]);
        // push_num keeps small numbers as data
        assert_eq!(Script::new().push_num(4).as_bytes(), &[0x01, 0x04]);
    }

    #[test]
    fn test_push_slice_prefixes() {
        assert_eq!(Script::new().push_slice(&[0u8; 75]).as_bytes()[0], 75);
        assert_eq!(&Script::new().push_slice(&[0u8; 76]).as_bytes()[..2], &[OP_PUSHDATA1, 76]);
        assert_eq!(
            &Script::new().push_slice(&[0u8; 300]).as_bytes()[..3],
            &[OP_PUSHDATA2, 0x2c, 0x01]
        );
    }

    #[test]
    fn test_compact_size() {
        let mut out = Vec::new();
        write_compact_size(&mut out, 0xfc);
        write_compact_size(&mut out, 0xfd);
        assert_eq!(out, vec![0xfc, 0xfd, 0xfd, 0x00]);
    }

    #[test]
    fn test_merkle_root_single_and_pair() {
        let a = sha256d(b"a");
        let b = sha256d(b"b");
        assert_eq!(merkle_root(&[a]), a);
        assert_eq!(merkle_root(&[]), Hash256::ZERO);

        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(a.as_bytes());
        buf[32..].copy_from_slice(b.as_bytes());
        assert_eq!(merkle_root(&[a, b]), sha256d(&buf));
        // odd count duplicates the last leaf
        assert_eq!(merkle_root(&[a, b, a]), merkle_root(&[a, b, a, a]));
    }

    #[test]
    fn test_header_length_by_version() {
        let mut header = BlockHeader {
            version: 1,
            prev_block: Hash256::ZERO,
            merkle_root: Hash256::ZERO,
            time: 0,
            bits: 0,
            nonce: 0,
            accumulator_checkpoint: Hash256::ZERO,
        };
        assert_eq!(header.serialize().len(), 80);
        header.version = ZEROCOIN_HEADER_VERSION;
        assert_eq!(header.serialize().len(), 112);
    }
}
