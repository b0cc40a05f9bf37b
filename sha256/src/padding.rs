use alloc::vec::Vec;

use crate::consts::{BLOCK_LEN, LEN_FIELD_LEN};

/// Terminator byte: a single `1` bit followed by seven `0` bits.
const TERMINATOR: u8 = 0x80;

/// Length of `len` bytes of input after padding.
///
/// The tail block needs room for the terminator byte plus the length
/// field. Up to 55 trailing bytes fit in one block, 56 or more spill
/// into an extra one.
#[inline]
pub fn padded_len(len: usize) -> usize {
    let overflow = len % BLOCK_LEN;
    let padding = if BLOCK_LEN - overflow > LEN_FIELD_LEN {
        BLOCK_LEN - overflow
    } else {
        2 * BLOCK_LEN - overflow
    };
    len + padding
}

/// Message length in bits, truncated modulo 2^64.
#[inline]
fn bit_len(len: u64) -> u64 {
    len.wrapping_mul(8)
}

/// Pad `message` to a positive multiple of the block size.
///
/// The message is followed by `0x80`, zero bytes, and its length in bits
/// as a big-endian `u64`. The bit length wraps modulo 2^64.
pub fn pad(message: &[u8]) -> Vec<u8> {
    let total = padded_len(message.len());
    let len_bits = bit_len(message.len() as u64);

    let mut padded = Vec::with_capacity(total);
    padded.extend_from_slice(message);
    padded.push(TERMINATOR);
    padded.resize(total - LEN_FIELD_LEN, 0);
    padded.extend_from_slice(&len_bits.to_be_bytes());

    debug_assert_eq!(padded.len(), total);
    padded
}
