//! Counting primitives in floating point.
//!
//! Results are exact while they fit in an `f64` mantissa (factorials up to 18!, and quotients of exactly
//! representable values). Beyond 170! the factorial overflows to infinity, so large arguments lose all precision.

/// Calculates `n!`.
///
/// # Examples
/// ```
/// use diestat::combinatorics::factorial;
///
/// assert_eq!(factorial(0), 1.0);
/// assert_eq!(factorial(13), 6_227_020_800.0);
/// ```
#[must_use]
pub fn factorial(n: u32) -> f64 {
	(2..=n).map(f64::from).product()
}

/// Calculates the number of ordered selections of `r` items out of `n`. Selecting more than `n` yields 0.
///
/// # Examples
/// ```
/// use diestat::combinatorics::permutation;
///
/// assert_eq!(permutation(16, 3), 3360.0);
/// assert_eq!(permutation(3, 4), 0.0);
/// ```
#[must_use]
pub fn permutation(n: u32, r: u32) -> f64 {
	match n.checked_sub(r) {
		Some(rest) => factorial(n) / factorial(rest),
		None => 0.0,
	}
}

/// Calculates the number of unordered selections of `k` items out of `n`. Selecting more than `n` yields 0.
///
/// # Examples
/// ```
/// use diestat::combinatorics::combination;
///
/// assert_eq!(combination(16, 3), 560.0);
/// assert_eq!(combination(16, 13), 560.0);
/// ```
#[must_use]
pub fn combination(n: u32, k: u32) -> f64 {
	permutation(n, k) / factorial(k)
}
