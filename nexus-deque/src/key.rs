//! Sentinel-based node keys.
//!
//! Links between nodes are slab keys. A reserved sentinel (`usize::MAX`)
//! stands in for "no node" so a link costs one word instead of an
//! `Option<usize>`.

/// A copyable key type with a sentinel "none" value.
pub(crate) trait Key: Copy + Eq {
    /// Sentinel value representing "no node".
    const NONE: Self;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this is not the sentinel value.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Converts the sentinel to `None`.
    #[inline]
    fn into_option(self) -> Option<Self> {
        if self.is_none() { None } else { Some(self) }
    }
}

// `slab` hands out dense keys starting at 0, so it never reaches `usize::MAX`.
impl Key for usize {
    const NONE: Self = usize::MAX;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel() {
        assert!(usize::NONE.is_none());
        assert!(!usize::NONE.is_some());
        assert_eq!(usize::NONE.into_option(), None);
    }

    #[test]
    fn occupied() {
        assert!(0usize.is_some());
        assert_eq!(7usize.into_option(), Some(7));
    }
}
