use crate::block::Block;
use crate::consts::SCHEDULE_LEN;

#[inline(always)]
fn sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Expand one block into the 64-word message schedule.
///
/// The first 16 words are the block read as big-endian `u32`s, the rest
/// are mixed from earlier entries. The schedule is a fresh value per call.
pub fn expand(block: &Block) -> [u32; SCHEDULE_LEN] {
    let mut w = [0u32; SCHEDULE_LEN];

    for (word, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for t in 16..SCHEDULE_LEN {
        w[t] = sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    w
}
