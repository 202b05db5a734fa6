//! Fiat-Shamir transcript over a duplex sponge.
//!
//! This module defines the [`TranscriptCodec`] trait and [`Transcript`], its implementation
//! over any [`DuplexSpongeInterface`] (by default the Keccak-f\[1600\] sponge).
//!
//! # Usage
//! - The prover and verifier absorb the same messages, in the same order, into identical transcripts.
//! - Both then squeeze a challenge scalar. The verifier can check that the prover used the
//!   challenge output by the transcript because it owns an identical one.
//!
//! A transcript is bound to a single proof: build a fresh one for every proof, and never
//! share one between threads.

use core::marker::PhantomData;

use alloc::vec::Vec;
use group::prime::PrimeGroup;
use group::Group;
use tracing::{instrument, trace};

use crate::codec::AlgebraicCodec;
use crate::duplex_sponge::keccak::KeccakDuplexSponge;
use crate::duplex_sponge::{parse_label, DuplexSpongeInterface, LABEL_LENGTH};
use crate::errors::Error;

/// A trait defining the behavior of a domain-separated transcript, which is typically used for Sigma protocols.
///
/// A transcript is identified by a label and is incremented with successive prover messages
/// ("absorb"). It can then output challenges unique to the messages seen so far ("squeeze").
///
/// The output is deterministic for a given set of inputs. Thus, both Prover and Verifier can
/// generate the transcript on their sides and ensure the same inputs have been used on both
/// sides of the protocol.
///
/// ## Minimal Implementation
/// Types implementing [`TranscriptCodec`] must define:
/// - `new`
/// - `prover_message`
/// - `verifier_challenge`
pub trait TranscriptCodec<G: Group> {
    /// Generates an empty transcript identified by a domain-separation label.
    fn new(label: [u8; LABEL_LENGTH]) -> Self;

    /// Absorbs a list of group elements (e.g., commitments).
    fn prover_message(&mut self, elements: &[G]) -> &mut Self
    where
        Self: Sized;

    /// Produces a scalar challenge from the transcript.
    fn verifier_challenge(&mut self) -> G::Scalar;
}

/// A Fiat-Shamir transcript over the group `G`, backed by the duplex sponge `H`.
#[derive(Clone, Debug)]
pub struct Transcript<G, H = KeccakDuplexSponge> {
    sponge: H,
    _marker: PhantomData<G>,
}

impl<G, H> Transcript<G, H>
where
    G: PrimeGroup,
    H: DuplexSpongeInterface,
{
    /// Creates a transcript from a label slice, which must be exactly [`LABEL_LENGTH`] bytes.
    pub fn try_new(label: &[u8]) -> Result<Self, Error> {
        Ok(<Self as TranscriptCodec<G>>::new(parse_label(label)?))
    }

    /// Absorbs a list of scalars sent by the prover.
    pub fn absorb_scalars(&mut self, scalars: &[G::Scalar]) -> &mut Self {
        AlgebraicCodec::<G>::absorb_scalars(&mut self.sponge, scalars);
        self
    }

    /// Produces `count` independent challenges.
    pub fn verifier_challenges(&mut self, count: usize) -> Vec<G::Scalar> {
        AlgebraicCodec::<G>::squeeze_scalars(&mut self.sponge, count)
    }
}

impl<G, H> TranscriptCodec<G> for Transcript<G, H>
where
    G: PrimeGroup,
    H: DuplexSpongeInterface,
{
    fn new(label: [u8; LABEL_LENGTH]) -> Self {
        Self {
            sponge: H::new(label),
            _marker: PhantomData,
        }
    }

    fn prover_message(&mut self, elements: &[G]) -> &mut Self {
        trace!(count = elements.len(), "absorbing prover message");
        AlgebraicCodec::<G>::absorb_elements(&mut self.sponge, elements);
        self
    }

    #[instrument(level = "trace", skip(self))]
    fn verifier_challenge(&mut self) -> G::Scalar {
        let mut challenges = AlgebraicCodec::<G>::squeeze_scalars(&mut self.sponge, 1);
        // squeeze_scalars returns exactly the requested count
        challenges.swap_remove(0)
    }
}
