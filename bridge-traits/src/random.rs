//! Randomness Abstraction
//!
//! Provides an injectable random-choice capability so that random retrieval
//! can be made deterministic in tests.

/// Random index source
///
/// Implementations must pick uniformly among `0..len`.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::random::RandomSource;
///
/// fn pick<'a>(random: &dyn RandomSource, titles: &'a [String]) -> Option<&'a String> {
///     random.pick_index(titles.len()).and_then(|i| titles.get(i))
/// }
/// ```
pub trait RandomSource: Send + Sync {
    /// Pick an index in `0..len`
    ///
    /// Returns `None` when `len` is zero.
    fn pick_index(&self, len: usize) -> Option<usize>;
}

/// Random source that always answers the same position
///
/// Positions past the end clamp to the last element, so a source built with
/// `0` always picks the first element and `usize::MAX` always the last.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandomSource {
    position: usize,
}

impl FixedRandomSource {
    pub fn new(position: usize) -> Self {
        Self { position }
    }

    pub fn first() -> Self {
        Self::new(0)
    }

    pub fn last() -> Self {
        Self::new(usize::MAX)
    }
}

impl RandomSource for FixedRandomSource {
    fn pick_index(&self, len: usize) -> Option<usize> {
        match len {
            0 => None,
            _ if self.position >= len => Some(len - 1),
            _ => Some(self.position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_source_empty() {
        assert_eq!(FixedRandomSource::first().pick_index(0), None);
        assert_eq!(FixedRandomSource::last().pick_index(0), None);
    }

    #[test]
    fn test_fixed_source_clamps_to_last() {
        assert_eq!(FixedRandomSource::first().pick_index(3), Some(0));
        assert_eq!(FixedRandomSource::last().pick_index(3), Some(2));
        assert_eq!(FixedRandomSource::new(1).pick_index(3), Some(1));
        assert_eq!(FixedRandomSource::new(7).pick_index(3), Some(2));
    }
}
