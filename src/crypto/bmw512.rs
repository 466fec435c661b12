// BMW-512 (Blue Midnight Wish, 64-bit variant)

const BLOCK_LEN: usize = 128;

const IV: [u64; 16] = [
    0x8081828384858687,
    0x88898a8b8c8d8e8f,
    0x9091929394959697,
    0x98999a9b9c9d9e9f,
    0xa0a1a2a3a4a5a6a7,
    0xa8a9aaabacadaeaf,
    0xb0b1b2b3b4b5b6b7,
    0xb8b9babbbcbdbebf,
    0xc0c1c2c3c4c5c6c7,
    0xc8c9cacbcccdcecf,
    0xd0d1d2d3d4d5d6d7,
    0xd8d9dadbdcdddedf,
    0xe0e1e2e3e4e5e6e7,
    0xe8e9eaebecedeeef,
    0xf0f1f2f3f4f5f6f7,
    0xf8f9fafbfcfdfeff,
];

/// Chaining value used for the final output transform
const FINAL: [u64; 16] = [
    0xaaaaaaaaaaaaaaa0,
    0xaaaaaaaaaaaaaaa1,
    0xaaaaaaaaaaaaaaa2,
    0xaaaaaaaaaaaaaaa3,
    0xaaaaaaaaaaaaaaa4,
    0xaaaaaaaaaaaaaaa5,
    0xaaaaaaaaaaaaaaa6,
    0xaaaaaaaaaaaaaaa7,
    0xaaaaaaaaaaaaaaa8,
    0xaaaaaaaaaaaaaaa9,
    0xaaaaaaaaaaaaaaaa,
    0xaaaaaaaaaaaaaaab,
    0xaaaaaaaaaaaaaaac,
    0xaaaaaaaaaaaaaaad,
    0xaaaaaaaaaaaaaaae,
    0xaaaaaaaaaaaaaaaf,
];

/// Index sets for the W_j words: (positive, negative) terms of `M[i] ^ H[i]`
const W_TERMS: [([usize; 5], [bool; 5]); 16] = [
    ([5, 7, 10, 13, 14], [true, false, true, true, true]),
    ([6, 8, 11, 14, 15], [true, false, true, true, false]),
    ([0, 7, 9, 12, 15], [true, true, true, false, true]),
    ([0, 1, 8, 10, 13], [true, false, true, false, true]),
    ([1, 2, 9, 11, 14], [true, true, true, false, false]),
    ([3, 2, 10, 12, 15], [true, false, true, false, true]),
    ([4, 0, 3, 11, 13], [true, false, false, false, true]),
    ([1, 4, 5, 12, 14], [true, false, false, false, false]),
    ([2, 5, 6, 13, 15], [true, false, false, true, false]),
    ([0, 3, 6, 7, 14], [true, false, true, false, true]),
    ([8, 1, 4, 7, 15], [true, false, false, false, true]),
    ([8, 0, 2, 5, 9], [true, false, false, false, true]),
    ([1, 3, 6, 9, 10], [true, true, false, false, true]),
    ([2, 4, 7, 10, 11], [true, true, true, true, true]),
    ([3, 5, 8, 11, 12], [true, false, true, false, false]),
    ([12, 4, 6, 9, 13], [true, false, false, false, true]),
];

#[inline(always)]
fn s0(x: u64) -> u64 {
    (x >> 1) ^ (x << 3) ^ x.rotate_left(4) ^ x.rotate_left(37)
}

#[inline(always)]
fn s1(x: u64) -> u64 {
    (x >> 1) ^ (x << 2) ^ x.rotate_left(13) ^ x.rotate_left(43)
}

#[inline(always)]
fn s2(x: u64) -> u64 {
    (x >> 2) ^ (x << 1) ^ x.rotate_left(19) ^ x.rotate_left(53)
}

#[inline(always)]
fn s3(x: u64) -> u64 {
    (x >> 2) ^ (x << 2) ^ x.rotate_left(28) ^ x.rotate_left(59)
}

#[inline(always)]
fn s4(x: u64) -> u64 {
    (x >> 1) ^ x
}

#[inline(always)]
fn s5(x: u64) -> u64 {
    (x >> 2) ^ x
}

const R: [u32; 7] = [5, 11, 27, 32, 37, 43, 53];

fn add_element(m: &[u64; 16], h: &[u64; 16], j: usize) -> u64 {
    let a = (j - 16) % 16;
    let b = (j - 13) % 16;
    let c = (j - 6) % 16;
    let k = (j as u64).wrapping_mul(0x0555555555555555);
    m[a].rotate_left(a as u32 + 1)
        .wrapping_add(m[b].rotate_left(b as u32 + 1))
        .wrapping_sub(m[c].rotate_left(c as u32 + 1))
        .wrapping_add(k)
        ^ h[(j - 16 + 7) % 16]
}

fn compress(h: &[u64; 16], m: &[u64; 16]) -> [u64; 16] {
    let mut q = [0u64; 32];

    for (j, (idx, sign)) in W_TERMS.iter().enumerate() {
        let mut w = 0u64;
        for t in 0..5 {
            let term = m[idx[t]] ^ h[idx[t]];
            w = if sign[t] { w.wrapping_add(term) } else { w.wrapping_sub(term) };
        }
        let s = match j % 5 {
            0 => s0(w),
            1 => s1(w),
            2 => s2(w),
            3 => s3(w),
            _ => s4(w),
        };
        q[j] = s.wrapping_add(h[(j + 1) % 16]);
    }

    for j in 16..18 {
        let mut acc = add_element(m, h, j);
        for k in 0..16 {
            let x = q[j - 16 + k];
            let s = match k % 4 {
                0 => s1(x),
                1 => s2(x),
                2 => s3(x),
                _ => s0(x),
            };
            acc = acc.wrapping_add(s);
        }
        q[j] = acc;
    }

    for j in 18..32 {
        let mut acc = add_element(m, h, j);
        for k in 0..14 {
            let x = q[j - 16 + k];
            let term = if k % 2 == 0 { x } else { x.rotate_left(R[k / 2]) };
            acc = acc.wrapping_add(term);
        }
        acc = acc.wrapping_add(s4(q[j - 2])).wrapping_add(s5(q[j - 1]));
        q[j] = acc;
    }

    let xl = q[16..24].iter().fold(0u64, |a, x| a ^ x);
    let xh = q[24..32].iter().fold(xl, |a, x| a ^ x);

    let mut out = [0u64; 16];
    out[0] = ((xh << 5) ^ (q[16] >> 5) ^ m[0]).wrapping_add(xl ^ q[24] ^ q[0]);
    out[1] = ((xh >> 7) ^ (q[17] << 8) ^ m[1]).wrapping_add(xl ^ q[25] ^ q[1]);
    out[2] = ((xh >> 5) ^ (q[18] << 5) ^ m[2]).wrapping_add(xl ^ q[26] ^ q[2]);
    out[3] = ((xh >> 1) ^ (q[19] << 5) ^ m[3]).wrapping_add(xl ^ q[27] ^ q[3]);
    out[4] = ((xh >> 3) ^ q[20] ^ m[4]).wrapping_add(xl ^ q[28] ^ q[4]);
    out[5] = ((xh << 6) ^ (q[21] >> 6) ^ m[5]).wrapping_add(xl ^ q[29] ^ q[5]);
    out[6] = ((xh >> 4) ^ (q[22] << 6) ^ m[6]).wrapping_add(xl ^ q[30] ^ q[6]);
    out[7] = ((xh >> 11) ^ (q[23] << 2) ^ m[7]).wrapping_add(xl ^ q[31] ^ q[7]);
    out[8] = out[4]
        .rotate_left(9)
        .wrapping_add(xh ^ q[24] ^ m[8])
        .wrapping_add((xl << 8) ^ q[23] ^ q[8]);
    out[9] = out[5]
        .rotate_left(10)
        .wrapping_add(xh ^ q[25] ^ m[9])
        .wrapping_add((xl >> 6) ^ q[16] ^ q[9]);
    out[10] = out[6]
        .rotate_left(11)
        .wrapping_add(xh ^ q[26] ^ m[10])
        .wrapping_add((xl << 6) ^ q[17] ^ q[10]);
    out[11] = out[7]
        .rotate_left(12)
        .wrapping_add(xh ^ q[27] ^ m[11])
        .wrapping_add((xl << 4) ^ q[18] ^ q[11]);
    out[12] = out[0]
        .rotate_left(13)
        .wrapping_add(xh ^ q[28] ^ m[12])
        .wrapping_add((xl >> 3) ^ q[19] ^ q[12]);
    out[13] = out[1]
        .rotate_left(14)
        .wrapping_add(xh ^ q[29] ^ m[13])
        .wrapping_add((xl >> 4) ^ q[20] ^ q[13]);
    out[14] = out[2]
        .rotate_left(15)
        .wrapping_add(xh ^ q[30] ^ m[14])
        .wrapping_add((xl >> 7) ^ q[21] ^ q[14]);
    out[15] = out[3]
        .rotate_left(16)
        .wrapping_add(xh ^ q[31] ^ m[15])
        .wrapping_add((xl >> 2) ^ q[22] ^ q[15]);
    out
}

fn load_block(block: &[u8]) -> [u64; 16] {
    let mut m = [0u64; 16];
    for (i, word) in m.iter_mut().enumerate() {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(&block[i * 8..i * 8 + 8]);
        *word = u64::from_le_bytes(buf);
    }
    m
}

/// BMW-512 digest of `data`
pub fn bmw512(data: &[u8]) -> [u8; 64] {
    let mut h = IV;

    let full_blocks = data.len() / BLOCK_LEN;
    for i in 0..full_blocks {
        let m = load_block(&data[i * BLOCK_LEN..(i + 1) * BLOCK_LEN]);
        h = compress(&h, &m);
    }

    let tail = &data[full_blocks * BLOCK_LEN..];
    let mut buf = [0u8; BLOCK_LEN];
    buf[..tail.len()].copy_from_slice(tail);
    buf[tail.len()] = 0x80;

    if tail.len() + 1 > BLOCK_LEN - 8 {
        h = compress(&h, &load_block(&buf));
        buf = [0u8; BLOCK_LEN];
    }
    let bit_len = (data.len() as u64).wrapping_mul(8);
    buf[BLOCK_LEN - 8..].copy_from_slice(&bit_len.to_le_bytes());
    h = compress(&h, &load_block(&buf));

    let h = compress(&FINAL, &h);

    let mut out = [0u8; 64];
    for (i, word) in h[8..].iter().enumerate() {
        out[i * 8..i * 8 + 8].copy_from_slice(&word.to_le_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_vector() {
        assert_eq!(
            hex::encode(bmw512(b"")),
            "6a725655c42bc8a2a20549dd5a233a6a2beb01616975851fd122504e604b46af\
             7d96697d0b6333db1d1709d6df328d2a6c786551b0cce2255e8c7332b4819c0e"
        );
    }

    #[test]
    fn test_deterministic_and_input_sensitive() {
        assert_eq!(bmw512(&[1u8; 64]), bmw512(&[1u8; 64]));
        assert_ne!(bmw512(&[1u8; 64]), bmw512(&[2u8; 64]));
    }

    #[test]
    fn test_length_is_part_of_padding() {
        // 120 bytes forces an extra padding block
        assert_ne!(bmw512(&[0u8; 119]), bmw512(&[0u8; 120]));
        assert_ne!(bmw512(&[]), bmw512(&[0u8]));
    }
}
