use crate::block::Block;
use crate::consts::{K, SCHEDULE_LEN};
use crate::schedule::expand;

#[inline(always)]
fn big_sigma0(a: u32) -> u32 {
    a.rotate_right(2) ^ a.rotate_right(13) ^ a.rotate_right(22)
}

#[inline(always)]
fn big_sigma1(e: u32) -> u32 {
    e.rotate_right(6) ^ e.rotate_right(11) ^ e.rotate_right(25)
}

/// Bitwise select: `f` where `e` is set, `g` elsewhere.
#[inline(always)]
fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ (!e & g)
}

/// Bitwise majority of three words.
#[inline(always)]
fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Run the 64 rounds over one message schedule and fold the result into
/// `state`.
pub(crate) fn compress_block(state: &mut [u32; 8], w: &[u32; SCHEDULE_LEN]) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for (&k, &wt) in K.iter().zip(w.iter()) {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(k)
            .wrapping_add(wt);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h].iter()) {
        *s = s.wrapping_add(*v);
    }
}

/// SHA-256 compression function.
///
/// Processes already padded blocks in order. Blocks must not be
/// reordered: each one is chained onto the state left by the previous.
pub fn compress256(state: &mut [u32; 8], blocks: &[Block]) {
    for block in blocks {
        compress_block(state, &expand(block));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::parse;
    use crate::consts::H0;
    use crate::padding::pad;

    #[test]
    fn choose_and_majority() {
        assert_eq!(ch(0xf0, 0x00, 0xff), 0x0f);
        assert_eq!(ch(u32::MAX, 0x1234_5678, 0), 0x1234_5678);
        assert_eq!(ch(0, 0x1234_5678, 0x9abc_def0), 0x9abc_def0);
        assert_eq!(maj(0xdd, 0xb3, 0xd3), 0xd3);
        assert_eq!(maj(0xf1, 0x00, 0xff), 0xf1);
    }

    #[test]
    fn big_sigma_functions() {
        assert_eq!(big_sigma0(1), (1 << 30) | (1 << 19) | (1 << 10));
        assert_eq!(big_sigma1(1), (1 << 26) | (1 << 21) | (1 << 7));
    }

    #[test]
    fn abc_single_block() {
        let padded = pad(b"abc");
        let mut state = H0;
        compress_block(&mut state, &expand(parse(&padded).next().unwrap()));
        assert_eq!(
            state,
            [
                0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c, 0xb410ff61,
                0xf20015ad,
            ]
        );
    }

    #[test]
    fn block_order_matters() {
        let padded = pad(&[0x5au8; 100]);
        let blocks: [Block; 2] = [
            Block::clone_from_slice(&padded[..64]),
            Block::clone_from_slice(&padded[64..]),
        ];
        let mut forward = H0;
        compress256(&mut forward, &blocks);
        let mut reverse = H0;
        compress256(&mut reverse, &[blocks[1].clone(), blocks[0].clone()]);
        assert_ne!(forward, reverse);
    }

    #[test]
    fn no_blocks_leaves_state() {
        let mut state = H0;
        compress256(&mut state, &[]);
        assert_eq!(state, H0);
    }
}
