//! An implementation of the [SHA-256][1] cryptographic hash function as
//! specified in [FIPS 180-4][2].
//!
//! The crate exposes a single-shot [`digest`] function: the whole message
//! is padded, split into 512-bit blocks and compressed block by block into
//! a 256-bit digest.
//!
//! # Usage
//!
//! ```rust
//! use hex_literal::hex;
//!
//! let result = sha256::digest(b"hello world");
//! assert_eq!(result, hex!("
//!     b94d27b9934d3e08a52e52d7da7dabfa
//!     c484efe37a5380ee9088f7ace2efcde9
//! "));
//! ```
//!
//! Each call owns its hash state and message schedule, so independent
//! messages can be hashed concurrently from any number of threads.
//!
//! [1]: https://en.wikipedia.org/wiki/SHA-2
//! [2]: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

extern crate alloc;

mod block;
mod compress;
mod consts;
mod padding;
mod schedule;

pub use block::Block;
pub use consts::DIGEST_LEN;

#[cfg(feature = "compress")]
pub use compress::compress256;
#[cfg(feature = "compress")]
pub use padding::pad;

use core::slice;

/// Running SHA-256 chaining value.
///
/// Holds the eight state words between blocks. It does not buffer input
/// or count its length: callers feed it whole, already padded blocks.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct HashState {
    h: [u32; 8],
}

impl HashState {
    /// Create a state initialized with the SHA-256 initial hash value.
    #[inline]
    pub fn new() -> Self {
        Self { h: consts::H0 }
    }

    /// Compress one padded block into the state.
    #[inline]
    pub fn absorb(&mut self, block: &Block) {
        compress::compress256(&mut self.h, slice::from_ref(block));
    }

    /// Write the state words big-endian, in order, as the final digest.
    #[inline]
    pub fn finalize(self) -> [u8; DIGEST_LEN] {
        let mut out = [0u8; DIGEST_LEN];
        for (chunk, v) in out.chunks_exact_mut(4).zip(self.h.iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }
        out
    }
}

impl Default for HashState {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

opaque_debug::implement!(HashState);

/// Compute the SHA-256 digest of `message`.
pub fn digest(message: &[u8]) -> [u8; DIGEST_LEN] {
    let padded = padding::pad(message);
    let mut state = HashState::new();
    for block in block::parse(&padded) {
        state.absorb(block);
    }
    state.finalize()
}
