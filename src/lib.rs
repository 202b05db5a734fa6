//! # Keccak Transcript
//!
//! A Fiat-Shamir transcript for Sigma protocols, instantiated over the
//! Keccak-f\[1600\] permutation in an overwrite-mode duplex sponge.
//!
//! Prover messages (group elements) are absorbed into the sponge, and
//! verifier challenges (scalars) are squeezed out of it. Prover and verifier
//! replay the same sequence of messages and therefore derive the same
//! challenges without interacting.
//!
//! The crate is layered bottom-up:
//! - [`duplex_sponge`]: the 200-byte permutation state and the absorb/squeeze state machine,
//! - [`codec`]: byte-level and algebraic codecs over any duplex sponge,
//! - [`transcript`]: the prover-facing [`Transcript`],
//! - [`fiat_shamir`]: a non-interactive Schnorr proof built on the transcript.
//!
//! ```
//! use curve25519_dalek::RistrettoPoint;
//! use group::Group;
//! use keccak_transcript::{Transcript, TranscriptCodec};
//!
//! let label = *b"yellow submarineyellow submarine";
//! let commitment = RistrettoPoint::generator();
//!
//! let mut prover = Transcript::<RistrettoPoint>::new(label);
//! let challenge = prover.prover_message(&[commitment]).verifier_challenge();
//!
//! let mut verifier = Transcript::<RistrettoPoint>::new(label);
//! assert_eq!(challenge, verifier.prover_message(&[commitment]).verifier_challenge());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod codec;
pub mod duplex_sponge;
pub mod errors;
pub mod fiat_shamir;
pub mod group;
pub mod transcript;

#[cfg(test)]
mod tests;

pub use codec::{AlgebraicCodec, ByteCodec, WIDE_REDUCTION_BYTES};
pub use duplex_sponge::keccak::{
    DuplexSponge, KeccakDuplexSponge, KeccakF1600, KeccakPermutationState, SpongeState, CAPACITY,
    RATE, STATE_LENGTH,
};
pub use duplex_sponge::{DuplexSpongeInterface, Permutation, LABEL_LENGTH};
pub use errors::Error;
pub use fiat_shamir::SchnorrProof;
pub use transcript::{Transcript, TranscriptCodec};
