//! Frame capacity type.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::common::{Error, Result};

/// Number of physical frames available to a simulation.
///
/// Always positive. The only way to obtain one from untrusted input is
/// [`FromStr`] or [`TryFrom`], both of which reject zero, negative and
/// non-numeric values with [`Error::InvalidCapacity`].
///
/// # Example
/// ```
/// use agingsim::FrameCapacity;
///
/// let capacity: FrameCapacity = "3".parse().unwrap();
/// assert_eq!(capacity.get(), 3);
/// assert!("0".parse::<FrameCapacity>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameCapacity(NonZeroUsize);

impl FrameCapacity {
    /// Create a capacity from an already-nonzero count.
    #[inline]
    pub const fn new(frames: NonZeroUsize) -> Self {
        FrameCapacity(frames)
    }

    /// Number of frames.
    #[inline]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for FrameCapacity {
    type Error = Error;

    fn try_from(frames: usize) -> Result<Self> {
        NonZeroUsize::new(frames)
            .map(FrameCapacity::new)
            .ok_or_else(|| Error::InvalidCapacity(frames.to_string()))
    }
}

impl FromStr for FrameCapacity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        trimmed
            .parse::<NonZeroUsize>()
            .map(FrameCapacity::new)
            .map_err(|_| Error::InvalidCapacity(trimmed.to_string()))
    }
}

impl fmt::Display for FrameCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} frames", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_try_from() {
        assert_eq!(FrameCapacity::try_from(4usize).unwrap().get(), 4);
        assert!(matches!(
            FrameCapacity::try_from(0usize),
            Err(Error::InvalidCapacity(v)) if v == "0"
        ));
    }

    #[test]
    fn test_capacity_new() {
        let capacity = FrameCapacity::new(NonZeroUsize::MIN);
        assert_eq!(capacity.get(), 1);
        assert_eq!(capacity, FrameCapacity::try_from(1usize).unwrap());
    }

    #[test]
    fn test_capacity_parse_rejects_invalid() {
        for bad in ["0", "-2", "abc", "", "3.5", "1e3"] {
            assert!(
                matches!(bad.parse::<FrameCapacity>(), Err(Error::InvalidCapacity(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_capacity_parse_trims() {
        assert_eq!(" 12 ".parse::<FrameCapacity>().unwrap().get(), 12);
    }

    #[test]
    fn test_capacity_display() {
        assert_eq!(format!("{}", FrameCapacity::try_from(3usize).unwrap()), "3 frames");
    }
}
