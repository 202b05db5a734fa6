//! Algebraic codec: scalars and group elements over a byte codec.
//!
//! Absorbed values are written in their canonical encodings. Squeezed scalars are
//! sampled with a wide reduction: for a field whose elements take `n` bytes,
//! `n + 16` bytes are squeezed, read as a big-endian integer and reduced modulo
//! the field order. The statistical distance from uniform is below `2^-128`.

use alloc::vec::Vec;
use group::prime::PrimeGroup;

use crate::codec::ByteCodec;
use crate::group::serialization::{
    field_cardinality, os2ip, scalar_byte_size, scalar_from_biguint, serialize_elements,
    serialize_scalars,
};

/// Extra bytes squeezed beyond the scalar length before reducing modulo the group order.
pub const WIDE_REDUCTION_BYTES: usize = 16;

/// Algebraic view of a byte codec, for the prime-order group `G`.
///
/// Implemented for every [`ByteCodec`]. The group cannot always be inferred from the
/// arguments, in which case it is named explicitly:
///
/// ```
/// use curve25519_dalek::RistrettoPoint;
/// use keccak_transcript::{AlgebraicCodec, DuplexSpongeInterface, KeccakDuplexSponge};
///
/// let mut sponge = KeccakDuplexSponge::new([0u8; 32]);
/// let scalars = AlgebraicCodec::<RistrettoPoint>::squeeze_scalars(&mut sponge, 2);
/// assert_ne!(scalars[0], scalars[1]);
/// ```
pub trait AlgebraicCodec<G: PrimeGroup>: ByteCodec {
    /// Absorbs the concatenated big-endian encodings of `scalars`.
    fn absorb_scalars(&mut self, scalars: &[G::Scalar]) -> &mut Self {
        self.absorb_bytes(&serialize_scalars(scalars))
    }

    /// Absorbs the concatenated canonical encodings of `elements`.
    fn absorb_elements(&mut self, elements: &[G]) -> &mut Self {
        self.absorb_bytes(&serialize_elements(elements))
    }

    /// Squeezes `count` scalars, each from its own wide-reduced block of output.
    fn squeeze_scalars(&mut self, count: usize) -> Vec<G::Scalar> {
        let length = scalar_byte_size::<G::Scalar>() + WIDE_REDUCTION_BYTES;
        let order = field_cardinality::<G::Scalar>();

        (0..count)
            .map(|_| {
                let uniform_bytes = self.squeeze_bytes(length);
                let reduced = os2ip(&uniform_bytes) % &order;
                scalar_from_biguint(&reduced).expect("reduced value is below the field order")
            })
            .collect()
    }
}

impl<G: PrimeGroup, T: ByteCodec> AlgebraicCodec<G> for T {}
