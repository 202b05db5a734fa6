//! # Error: Error Types for Fiat-Shamir Transcripts.
//!
//! This module defines the [`Error`] enum, which enumerates the recoverable failure modes
//! of the crate:
//! - Labels of the wrong length handed to a fallible constructor,
//! - Byte strings that do not decode to canonical group elements or scalars,
//! - Failed proof verification.
//!
//! Out-of-range accesses to the sponge state are programming errors and panic instead.

/// Represents an error encountered while building a transcript or checking a proof.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The domain-separation label does not have the required length.
    #[error("Invalid label length: expected {expected} bytes, got {actual}.")]
    InvalidLabelLength {
        /// The required label length.
        expected: usize,
        /// The length that was provided.
        actual: usize,
    },
    /// The input is not a canonical encoding of the expected values.
    #[error("Deserialization failed.")]
    Deserialization,
    /// The proof is invalid: verification failed.
    #[error("Verification failed.")]
    VerificationFailure,
}
