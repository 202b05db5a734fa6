//! Serialization and deserialization utilities for group elements and scalars.
//!
//! This module provides functions to convert group elements and scalars to and from
//! byte representations using canonical encodings, along with the big-integer
//! helpers used for wide reduction of sponge output into the scalar field.
//!
//! Scalars are encoded big-endian whatever the byte order of the field's
//! [`PrimeField::Repr`]: little-endian representations are reversed on the way in
//! and out, big-endian ones are copied as is.

use alloc::vec::Vec;
use ff::PrimeField;
use group::prime::PrimeGroup;
use num_bigint::BigUint;
use num_traits::One;

use crate::errors::Error;

/// Returns the byte size of a field element.
#[inline]
pub fn scalar_byte_size<F: PrimeField>() -> usize {
    (F::NUM_BITS as usize).div_ceil(8)
}

/// Get the serialized length of a group element in bytes.
pub fn group_elt_serialized_len<G: PrimeGroup>() -> usize {
    G::Repr::default().as_ref().len()
}

/// Byte order of the canonical representation [`PrimeField::Repr`] of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReprEndianness {
    /// Least significant byte first (e.g. Ristretto255, BLS12-381).
    Little,
    /// Most significant byte first (e.g. secp256k1).
    Big,
}

impl ReprEndianness {
    /// Detects the byte order of `F::Repr` from the representation of one.
    pub fn of<F: PrimeField>() -> Self {
        match F::ONE.to_repr().as_ref().first() {
            Some(1) => Self::Little,
            _ => Self::Big,
        }
    }
}

/// Returns the order of the field `F`, i.e. the order of the prime-order group it is the scalar field of.
pub fn field_cardinality<F: PrimeField>() -> BigUint {
    let max = (F::ZERO - F::ONE).to_repr();
    let max = match ReprEndianness::of::<F>() {
        ReprEndianness::Little => BigUint::from_bytes_le(max.as_ref()),
        ReprEndianness::Big => BigUint::from_bytes_be(max.as_ref()),
    };
    max + BigUint::one()
}

/// Octet-string to integer: interprets `bytes` as a big-endian unsigned integer.
pub fn os2ip(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Converts an integer into a field element.
///
/// # Returns
/// - `Some(F)` if `value` is smaller than the field order.
/// - `None` otherwise.
pub fn scalar_from_biguint<F: PrimeField>(value: &BigUint) -> Option<F> {
    let mut repr = F::Repr::default();
    let dst = repr.as_mut();
    match ReprEndianness::of::<F>() {
        ReprEndianness::Little => {
            let bytes = value.to_bytes_le();
            dst.get_mut(..bytes.len())?.copy_from_slice(&bytes);
        }
        ReprEndianness::Big => {
            let bytes = value.to_bytes_be();
            let start = dst.len().checked_sub(bytes.len())?;
            dst[start..].copy_from_slice(&bytes);
        }
    }
    F::from_repr(repr).into()
}

/// Serialize a sequence of group elements into a byte vector.
///
/// # Returns
/// - A `Vec<u8>` containing the concatenated canonical compressed byte representations.
pub fn serialize_elements<'a, G: PrimeGroup>(
    elements: impl IntoIterator<Item = &'a G>,
) -> Vec<u8> {
    let mut bytes = Vec::new();
    for element in elements {
        bytes.extend_from_slice(element.to_bytes().as_ref());
    }
    bytes
}

/// Deserialize `count` group elements from the front of `data`, advancing it past them.
///
/// # Errors
/// - [`Error::Deserialization`] if `data` is too short or any encoding is not a valid element.
pub fn deserialize_elements<G: PrimeGroup>(
    data: &mut &[u8],
    count: usize,
) -> Result<Vec<G>, Error> {
    let element_len = group_elt_serialized_len::<G>();
    let mut elements = Vec::with_capacity(count);
    for _ in 0..count {
        let (head, tail) = data
            .split_at_checked(element_len)
            .ok_or(Error::Deserialization)?;
        let mut repr = G::Repr::default();
        repr.as_mut().copy_from_slice(head);

        let element: Option<G> = G::from_bytes(&repr).into();
        elements.push(element.ok_or(Error::Deserialization)?);
        *data = tail;
    }
    Ok(elements)
}

/// Serialize a slice of scalar field elements into a byte vector.
///
/// # Returns
/// - A `Vec<u8>` containing the scalar bytes in big-endian order.
pub fn serialize_scalars<F: PrimeField>(scalars: &[F]) -> Vec<u8> {
    let endianness = ReprEndianness::of::<F>();
    let mut bytes = Vec::with_capacity(scalars.len() * scalar_byte_size::<F>());
    for scalar in scalars {
        let repr = scalar.to_repr();
        match endianness {
            ReprEndianness::Little => bytes.extend(repr.as_ref().iter().rev()),
            ReprEndianness::Big => bytes.extend_from_slice(repr.as_ref()),
        }
    }
    bytes
}

/// Deserialize `count` big-endian scalars from the front of `data`, advancing it past them.
///
/// # Errors
/// - [`Error::Deserialization`] if `data` is too short or any scalar is not canonical.
pub fn deserialize_scalars<F: PrimeField>(
    data: &mut &[u8],
    count: usize,
) -> Result<Vec<F>, Error> {
    let scalar_len = F::Repr::default().as_ref().len();
    let endianness = ReprEndianness::of::<F>();
    let mut scalars = Vec::with_capacity(count);
    for _ in 0..count {
        let (head, tail) = data
            .split_at_checked(scalar_len)
            .ok_or(Error::Deserialization)?;
        let mut repr = F::Repr::default();
        let repr_mut = repr.as_mut();
        repr_mut.copy_from_slice(head);
        if endianness == ReprEndianness::Little {
            repr_mut.reverse();
        }

        let scalar: Option<F> = F::from_repr(repr).into();
        scalars.push(scalar.ok_or(Error::Deserialization)?);
        *data = tail;
    }
    Ok(scalars)
}
