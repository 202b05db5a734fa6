//! Encoding and decoding utilities for Fiat-Shamir and group operations.
//!
//! Two codecs are layered over any [`DuplexSpongeInterface`](crate::DuplexSpongeInterface):
//! - [`ByteCodec`] names the raw byte operations,
//! - [`AlgebraicCodec`] translates scalars and group elements to and from those bytes.

mod algebraic;
mod bytes;

pub use algebraic::{AlgebraicCodec, WIDE_REDUCTION_BYTES};
pub use bytes::ByteCodec;
