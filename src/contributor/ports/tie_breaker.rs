//! Random source used to choose among equally eligible candidates.

/// Picks one position out of a list of equally eligible candidates.
///
/// Implementations must return every index in `0..len` with equal
/// probability and must only be called with `len > 0`.
pub trait TieBreaker: Send + Sync {
    /// Returns an index in `0..len`.
    fn pick(&self, len: usize) -> usize;
}
