use digest::{consts::U64, generic_array::GenericArray};

use crate::consts::BLOCK_LEN;

/// A single 512-bit message block.
pub type Block = GenericArray<u8, U64>;

/// Split a padded message into consecutive 64-byte blocks.
///
/// `padded` must come from [`pad`](crate::padding::pad), so its length is
/// a multiple of the block size.
#[inline]
pub fn parse(padded: &[u8]) -> impl Iterator<Item = &Block> + '_ {
    debug_assert_eq!(padded.len() % BLOCK_LEN, 0);
    padded.chunks_exact(BLOCK_LEN).map(Block::from_slice)
}
