//! Duplex Sponge Interface
//!
//! This module defines the [`DuplexSpongeInterface`] trait, which provides
//! a generic interface for cryptographic sponge functions that support
//! duplex operation (absorb and squeeze phases), and the [`Permutation`]
//! trait consumed by the sponge state.

use alloc::vec::Vec;

use crate::errors::Error;

pub mod keccak;

/// Length in bytes of the domain-separation label a sponge is created with.
pub const LABEL_LENGTH: usize = 32;

/// A trait defining the behavior of a duplex sponge construction.
///
/// A duplex sponge allows for:
/// - **Absorbing** input data into the sponge state
/// - **Squeezing** output data from the sponge state
///
/// This is the core primitive used for building cryptographic codecs.
pub trait DuplexSpongeInterface {
    /// Creates a new sponge instance from a domain-separation label.
    fn new(label: [u8; LABEL_LENGTH]) -> Self;

    /// Absorbs input data into the sponge state.
    fn absorb(&mut self, input: &[u8]);

    /// Squeezes output data from the sponge state.
    fn squeeze(&mut self, length: usize) -> Vec<u8>;
}

/// A fixed permutation over the 1600-bit sponge state, viewed as 25 little-endian lanes.
///
/// The permutation takes `&mut self` so that instrumented implementations
/// (e.g. call counters) can be plugged into a sponge.
pub trait Permutation {
    /// Applies the permutation to `state` in place.
    fn permute(&mut self, state: &mut [u64; keccak::LANES]);
}

/// Checks that `label` is exactly [`LABEL_LENGTH`] bytes long.
pub(crate) fn parse_label(label: &[u8]) -> Result<[u8; LABEL_LENGTH], Error> {
    label.try_into().map_err(|_| Error::InvalidLabelLength {
        expected: LABEL_LENGTH,
        actual: label.len(),
    })
}
