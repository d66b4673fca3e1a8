//! The capacity policy shared by every reallocation of a [`Vector`](super::Vector).
//!
//! Growing to hold `n` elements allocates [`grow_cap(n)`](grow_cap) slots: `n` scaled by
//! `GROWTH_FACTOR_NUM / GROWTH_FACTOR_DEN`, with the spare slots capped at [`MAX_SLACK`]. A Vector
//! shrinks back down to `grow_cap(len)` as soon as its capacity exceeds that value, so a buffer
//! never holds more slack than the policy would have handed out in the first place.

/// Numerator of the growth factor (1.5).
pub const GROWTH_FACTOR_NUM: usize = 3;
/// Denominator of the growth factor (1.5).
pub const GROWTH_FACTOR_DEN: usize = 2;
/// The maximum number of spare slots a single growth step may add.
pub const MAX_SLACK: usize = 50;

/// Returns the capacity allocated when a Vector has to hold `target` elements: the smaller of
/// `floor(target * 1.5)` and `target + MAX_SLACK`. Saturates rather than overflowing, leaving the
/// layout check to report absurd capacities.
///
/// # Examples
/// ```
/// # use standard_containers::collections::contiguous::vector::grow_cap;
/// assert_eq!(grow_cap(0), 0);
/// assert_eq!(grow_cap(1), 1);
/// assert_eq!(grow_cap(7), 10);
/// assert_eq!(grow_cap(100), 150);
/// assert_eq!(grow_cap(1000), 1050);
/// ```
pub const fn grow_cap(target: usize) -> usize {
    let scaled = target.saturating_mul(GROWTH_FACTOR_NUM - GROWTH_FACTOR_DEN) / GROWTH_FACTOR_DEN;
    let slack = if scaled < MAX_SLACK { scaled } else { MAX_SLACK };
    target.saturating_add(slack)
}

/// Returns true if a buffer of `cap` slots holds more slack than [`grow_cap`] allows for `len`
/// elements.
pub const fn is_over_allocated(len: usize, cap: usize) -> bool {
    cap > grow_cap(len)
}
