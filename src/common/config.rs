//! Configuration constants for the aging simulator.

/// Width of the per-page age counter in bits.
///
/// Recency can only be distinguished across this many aging rounds:
/// an entry untouched for `AGE_BITS` rounds decays to [`AGE_ZERO`] and is
/// indistinguishable from one untouched for longer.
pub const AGE_BITS: u32 = 8;

/// The most-significant bit of the age byte.
///
/// Set on every access, and the age a freshly admitted page starts with.
pub const MRU_BIT: u8 = 1 << (AGE_BITS - 1);

/// Age of an entry that has not been touched for at least `AGE_BITS` rounds.
pub const AGE_ZERO: u8 = 0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mru_bit_is_high_bit() {
        assert_eq!(MRU_BIT, 128);
        assert_eq!(MRU_BIT.leading_zeros(), 0);
    }

    #[test]
    fn test_age_horizon() {
        // AGE_BITS shifts take the high bit all the way to zero
        assert_eq!(MRU_BIT >> (AGE_BITS - 1), 1);
        assert_eq!((MRU_BIT >> (AGE_BITS - 1)) >> 1, AGE_ZERO);
        assert_eq!(u8::BITS, AGE_BITS);
    }
}
