//! Fiat-Shamir transformation of the Schnorr Sigma protocol.
//!
//! This module defines [`SchnorrProof`], a non-interactive proof of knowledge of a
//! discrete logarithm `x` such that `X = x * G`. The verifier's challenge is derived
//! from a [`Transcript`] which absorbs, in order, the generator `G`, the image `X`
//! and the prover's commitment `T`.
//!
//! A proof is serialized in its batchable form: the commitment followed by the response.

use alloc::vec::Vec;
use ff::Field;
use group::prime::PrimeGroup;
#[cfg(feature = "std")]
use rand::{CryptoRng, RngCore};
#[cfg(not(feature = "std"))]
use rand_core::{CryptoRng, RngCore};
use tracing::{debug, instrument};

use crate::duplex_sponge::LABEL_LENGTH;
use crate::errors::Error;
use crate::group::serialization::{
    deserialize_elements, deserialize_scalars, serialize_elements, serialize_scalars,
};
use crate::transcript::{Transcript, TranscriptCodec};

/// A non-interactive Schnorr proof over the prime-order group `G`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchnorrProof<G: PrimeGroup> {
    /// The prover's commitment `T = r * G`.
    pub commitment: G,
    /// The prover's response `s = r + c * x`.
    pub response: G::Scalar,
}

impl<G: PrimeGroup> SchnorrProof<G> {
    /// Proves knowledge of `witness` such that `image = witness * generator`.
    ///
    /// # Parameters
    /// - `label`: Domain-separation label of the transcript.
    /// - `generator`: The base of the discrete logarithm.
    /// - `witness`: The secret discrete logarithm.
    /// - `rng`: A cryptographically secure random number generator.
    #[instrument(skip_all)]
    pub fn prove(
        label: [u8; LABEL_LENGTH],
        generator: &G,
        witness: &G::Scalar,
        rng: &mut (impl RngCore + CryptoRng),
    ) -> Self {
        let image = *generator * witness;
        let nonce = G::Scalar::random(&mut *rng);
        let commitment = *generator * nonce;

        let challenge = derive_challenge(label, generator, &image, &commitment);
        let response = nonce + challenge * witness;
        debug!("schnorr proof generated");

        Self {
            commitment,
            response,
        }
    }

    /// Verifies the proof against the statement `image = x * generator`.
    ///
    /// # Errors
    /// - [`Error::VerificationFailure`] if `response * generator != commitment + challenge * image`.
    #[instrument(skip_all)]
    pub fn verify(
        &self,
        label: [u8; LABEL_LENGTH],
        generator: &G,
        image: &G,
    ) -> Result<(), Error> {
        let challenge = derive_challenge(label, generator, image, &self.commitment);

        if *generator * self.response == self.commitment + *image * challenge {
            Ok(())
        } else {
            debug!("schnorr proof rejected");
            Err(Error::VerificationFailure)
        }
    }

    /// Serializes the proof as `commitment || response`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = serialize_elements([&self.commitment]);
        bytes.extend(serialize_scalars(&[self.response]));
        bytes
    }

    /// Deserializes a proof produced by [`SchnorrProof::to_bytes`].
    ///
    /// # Errors
    /// - [`Error::Deserialization`] if the input is truncated, has trailing bytes,
    ///   or holds a non-canonical element or scalar.
    pub fn from_bytes(mut data: &[u8]) -> Result<Self, Error> {
        let commitment = deserialize_elements::<G>(&mut data, 1)?;
        let response = deserialize_scalars::<G::Scalar>(&mut data, 1)?;
        if !data.is_empty() {
            return Err(Error::Deserialization);
        }

        Ok(Self {
            commitment: commitment[0],
            response: response[0],
        })
    }
}

fn derive_challenge<G: PrimeGroup>(
    label: [u8; LABEL_LENGTH],
    generator: &G,
    image: &G,
    commitment: &G,
) -> G::Scalar {
    let mut transcript = Transcript::<G>::new(label);
    transcript.prover_message(&[*generator, *image, *commitment]);
    transcript.verifier_challenge()
}
