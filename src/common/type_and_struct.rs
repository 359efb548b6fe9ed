use std::cmp;
use std::ops;

/// Struct `Depth` counts the levels a tree may still grow below the
/// current node. This is just a wrapper for `usize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub(crate) struct Depth(usize);

impl From<usize> for Depth {
    #[inline]
    fn from(depth: usize) -> Self {
        Self(depth)
    }
}

impl Depth {
    /// `true` if no further branch may be grown from here.
    #[inline]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.0 == 0
    }
}

impl ops::Sub<usize> for Depth {
    type Output = Self;
    /// Descend one or more levels. Saturates at zero.
    #[inline]
    fn sub(self, other: usize) -> Self::Output {
        Self(self.0.saturating_sub(other))
    }
}

impl cmp::PartialEq<usize> for Depth {
    #[inline]
    fn eq(&self, rhs: &usize) -> bool {
        self.0.eq(rhs)
    }
}

impl cmp::PartialOrd<usize> for Depth {
    #[inline]
    fn partial_cmp(&self, other: &usize) -> Option<cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}

/// Struct `Threshold` is the split value of a branch node.
/// This is just a wrapper for `f64`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(transparent)]
pub(crate) struct Threshold(pub(crate) f64);

impl From<f64> for Threshold {
    #[inline]
    fn from(threshold: f64) -> Self {
        Self(threshold)
    }
}

impl cmp::PartialEq<f64> for Threshold {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.0.eq(other)
    }
}
