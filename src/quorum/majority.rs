//! Majority quorum threshold.

/// Minimum number of healthy members required for a roster of size `n`.
///
/// Standard majority rule, `(n - 1) / 2 + 1`: a cluster of 1 needs 1,
/// of 3 needs 2, of 5 needs 3. Holds `1 <= min_required(n) <= n` for
/// all n >= 1. For the degenerate n = 0 (empty or unreadable roster)
/// the result is 1, which the controller's shortfall check turns into
/// a quorum failure.
pub fn min_required(n: usize) -> usize {
    n.saturating_sub(1) / 2 + 1
}
