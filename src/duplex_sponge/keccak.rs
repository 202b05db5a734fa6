//! Keccak-based duplex sponge implementation
//!
//! This module implements an overwrite-mode duplex sponge construction using the
//! Keccak-f\[1600\] permutation, over a 200-byte state split into a 136-byte rate
//! and a 64-byte capacity.
//!
//! ## Components
//! - [`SpongeState`]: the fixed-size permutation state, with byte-indexed read/write
//! - [`DuplexSponge`]: the absorb/squeeze state machine over a [`SpongeState`]
//! - [`KeccakF1600`]: the production [`Permutation`]

use core::ops::Range;

use alloc::vec::Vec;
use tracing::trace;
use zerocopy::IntoBytes;

use crate::duplex_sponge::{parse_label, DuplexSpongeInterface, Permutation, LABEL_LENGTH};
use crate::errors::Error;

/// Number of state bytes exposed to absorb and squeeze.
pub const RATE: usize = 136;
/// Number of state bytes hidden from absorb and squeeze.
pub const CAPACITY: usize = 64;
/// Total size of the permutation state in bytes.
pub const STATE_LENGTH: usize = RATE + CAPACITY;
/// Number of 64-bit lanes in the permutation state.
pub const LANES: usize = STATE_LENGTH / 8;

// The byte view of the lanes must match the little-endian lane order of Keccak.
const _: () = assert!(cfg!(target_endian = "little"));

/// The Keccak-f\[1600\] permutation.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeccakF1600;

impl Permutation for KeccakF1600 {
    fn permute(&mut self, state: &mut [u64; LANES]) {
        ::keccak::f1600(state);
    }
}

/// Low-level permutation state: a fixed 200-byte buffer and the permutation mixing it.
#[derive(Clone, Debug)]
pub struct SpongeState<P = KeccakF1600> {
    lanes: [u64; LANES],
    permutation: P,
}

/// The sponge state over Keccak-f\[1600\].
pub type KeccakPermutationState = SpongeState<KeccakF1600>;

impl<P: Permutation> SpongeState<P> {
    /// Creates a zeroed state, then writes `label` at the start of the capacity segment.
    pub fn new(label: [u8; LABEL_LENGTH], permutation: P) -> Self {
        let mut state = Self {
            lanes: [0u64; LANES],
            permutation,
        };
        state.write(RATE, &label);
        state
    }

    /// Returns the bytes in `range`.
    ///
    /// # Panics
    /// Panics if `range` does not lie within the state.
    pub fn read(&self, range: Range<usize>) -> &[u8] {
        &self.as_ref()[range]
    }

    /// Overwrites the state with `bytes`, starting at `offset`.
    ///
    /// # Panics
    /// Panics if `offset + bytes.len()` exceeds the state length.
    pub fn write(&mut self, offset: usize, bytes: &[u8]) {
        self.as_mut()[offset..offset + bytes.len()].copy_from_slice(bytes);
    }

    /// Replaces the whole state with its image under the permutation.
    pub fn permute(&mut self) {
        trace!("permuting sponge state");
        self.permutation.permute(&mut self.lanes);
    }
}

impl<P> AsRef<[u8]> for SpongeState<P> {
    fn as_ref(&self) -> &[u8] {
        self.lanes.as_bytes()
    }
}

impl<P> AsMut<[u8]> for SpongeState<P> {
    fn as_mut(&mut self) -> &mut [u8] {
        self.lanes.as_mut_bytes()
    }
}

/// Overwrite-mode duplex sponge.
///
/// Absorbing overwrites the rate bytes of the state, squeezing reads them back.
/// Each operation invalidates the cursor of the other one, so that switching
/// between absorbing and squeezing always goes through a permutation.
#[derive(Clone, Debug)]
pub struct DuplexSponge<P = KeccakF1600> {
    state: SpongeState<P>,
    absorb_index: usize,
    squeeze_index: usize,
}

/// Duplex sponge construction using Keccak-f\[1600\].
pub type KeccakDuplexSponge = DuplexSponge<KeccakF1600>;

impl<P: Permutation> DuplexSponge<P> {
    /// Creates a sponge from a label and an explicit permutation instance.
    pub fn with_permutation(label: [u8; LABEL_LENGTH], permutation: P) -> Self {
        Self {
            state: SpongeState::new(label, permutation),
            absorb_index: 0,
            squeeze_index: RATE,
        }
    }

    /// Creates a sponge from a label slice, which must be exactly [`LABEL_LENGTH`] bytes.
    pub fn try_new(label: &[u8]) -> Result<Self, Error>
    where
        P: Default,
    {
        Ok(Self::with_permutation(parse_label(label)?, P::default()))
    }

    /// Number of state bytes absorbed or squeezed between permutations.
    pub const fn rate(&self) -> usize {
        RATE
    }

    /// Number of state bytes never exposed to absorb or squeeze.
    pub const fn capacity(&self) -> usize {
        CAPACITY
    }
}

impl<P: Permutation + Default> DuplexSpongeInterface for DuplexSponge<P> {
    fn new(label: [u8; LABEL_LENGTH]) -> Self {
        Self::with_permutation(label, P::default())
    }

    fn absorb(&mut self, mut input: &[u8]) {
        self.squeeze_index = RATE;

        while !input.is_empty() {
            if self.absorb_index == RATE {
                self.state.permute();
                self.absorb_index = 0;
            }

            let chunk_size = usize::min(RATE - self.absorb_index, input.len());
            let (chunk, rest) = input.split_at(chunk_size);
            self.state.write(self.absorb_index, chunk);
            self.absorb_index += chunk_size;
            input = rest;
        }
    }

    fn squeeze(&mut self, mut length: usize) -> Vec<u8> {
        self.absorb_index = RATE;

        let mut output = Vec::new();
        while length != 0 {
            if self.squeeze_index == RATE {
                self.state.permute();
                self.squeeze_index = 0;
            }

            let chunk_size = usize::min(RATE - self.squeeze_index, length);
            output.extend_from_slice(
                self.state.read(self.squeeze_index..self.squeeze_index + chunk_size),
            );
            self.squeeze_index += chunk_size;
            length -= chunk_size;
        }
        output
    }
}
