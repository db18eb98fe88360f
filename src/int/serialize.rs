//! The binary save/load format (spec.md §6 "Binary"): a signed size field
//! followed by `|size|` limbs, each a raw little-endian-on-the-host byte
//! image. Not portable across architectures of differing limb width,
//! endianness, or nail configuration, per spec.md.

use alloc::vec::Vec;

use crate::limb::Limb;
use crate::Error;

use super::Int;

/// Size of the leading size field, in bytes.
const SIZE_FIELD_BYTES: usize = 4;

impl<const N: usize> Int<N> {
    /// The exact byte length [`Self::to_bytes`] would produce for `self`.
    pub fn binary_size(&self) -> usize {
        SIZE_FIELD_BYTES + self.asize() * Limb::SIZE
    }

    /// Serializes `self` to the binary format.
    pub fn to_bytes(&self) -> Vec<u8> {
        let (negative, mag) = self.view();
        let asize = mag.len() as i32;
        let size = if negative { -asize } else { asize };

        let mut out = Vec::with_capacity(SIZE_FIELD_BYTES + mag.len() * Limb::SIZE);
        out.extend_from_slice(&size.to_le_bytes());
        for limb in mag {
            out.extend_from_slice(&limb.get().to_le_bytes());
        }
        out
    }

    /// Deserializes `self` from the binary format.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `bytes` is truncated, or if the
    /// declared size would leave a zero top limb (spec.md §6).
    pub fn from_bytes(bytes: &[u8]) -> Result<Int<N>, Error> {
        if bytes.len() < SIZE_FIELD_BYTES {
            return Err(Error::InvalidArgument("truncated size field"));
        }
        let mut size_buf = [0u8; SIZE_FIELD_BYTES];
        size_buf.copy_from_slice(&bytes[..SIZE_FIELD_BYTES]);
        let size = i32::from_le_bytes(size_buf);
        let negative = size < 0;
        let asize = size.unsigned_abs() as usize;

        let expected_len = SIZE_FIELD_BYTES + asize * Limb::SIZE;
        if bytes.len() != expected_len {
            return Err(Error::InvalidArgument("declared size doesn't match input length"));
        }

        let mut mag = Vec::with_capacity(asize);
        for chunk in bytes[SIZE_FIELD_BYTES..].chunks_exact(Limb::SIZE) {
            let mut limb_buf = [0u8; Limb::SIZE];
            limb_buf.copy_from_slice(chunk);
            mag.push(Limb::new(u64::from_le_bytes(limb_buf)));
        }

        if asize > 0 && mag[asize - 1].is_zero() {
            return Err(Error::InvalidArgument("declared size leaves a zero top limb"));
        }

        Ok(Int::from_sign_magnitude(negative, &mag))
    }
}

#[cfg(test)]
mod tests {
    use crate::int::Int2;
    use crate::Error;

    #[test]
    fn round_trips_a_promoted_value() {
        // -(2^200 + 1)
        let base: Int2 = crate::int::dispatch::shl(&Int2::ONE, 200);
        let a = -(base + Int2::ONE);
        let bytes = a.to_bytes();
        assert_eq!(bytes.len(), a.binary_size());
        let back = Int2::from_bytes(&bytes).unwrap();
        assert_eq!(a, back);
    }

    #[test]
    fn zero_round_trips() {
        let bytes = Int2::ZERO.to_bytes();
        assert_eq!(bytes.len(), 4);
        assert_eq!(Int2::from_bytes(&bytes).unwrap(), Int2::ZERO);
    }

    #[test]
    fn rejects_a_declared_zero_top_limb() {
        let mut bytes = Int2::from(1u64).to_bytes();
        let len = bytes.len();
        bytes[len - 8..].fill(0);
        assert_eq!(
            Int2::from_bytes(&bytes),
            Err(Error::InvalidArgument("declared size leaves a zero top limb"))
        );
    }

    #[test]
    fn rejects_truncated_input() {
        assert!(Int2::from_bytes(&[0, 0]).is_err());
    }
}
