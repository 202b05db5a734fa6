use alloc::vec::Vec;

use crate::duplex_sponge::DuplexSpongeInterface;

/// Byte-oriented view of a duplex sponge.
pub trait ByteCodec {
    /// Absorbs `input` as-is.
    fn absorb_bytes(&mut self, input: &[u8]) -> &mut Self;

    /// Squeezes exactly `length` bytes.
    fn squeeze_bytes(&mut self, length: usize) -> Vec<u8>;
}

impl<H: DuplexSpongeInterface> ByteCodec for H {
    fn absorb_bytes(&mut self, input: &[u8]) -> &mut Self {
        self.absorb(input);
        self
    }

    fn squeeze_bytes(&mut self, length: usize) -> Vec<u8> {
        self.squeeze(length)
    }
}
