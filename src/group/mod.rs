/// Canonical encodings of group elements and scalars, and the integer conversions used
/// to derive scalars from sponge output.
pub mod serialization;
