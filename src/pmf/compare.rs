//! Probabilities of comparisons between independent outcomes.

use super::Distribution;

/// Probability that an outcome of `a` is strictly less than an independent outcome of `b`.
pub(super) fn less_than(a: &Distribution, b: &Distribution) -> f64 {
	joint(a, b, |x, y| x < y)
}

/// Probability that an outcome of `a` is within `tolerance` of an independent outcome of `b`.
pub(super) fn equal(a: &Distribution, b: &Distribution, tolerance: f64) -> f64 {
	joint(a, b, |x, y| (x - y).abs() <= tolerance)
}

/// Probability that an outcome of `x` lies between independent outcomes of `low` and `high`.
///
/// When `inclusive`, values within `tolerance` of a bound count as inside it.
pub(super) fn between(x: &Distribution, low: &Distribution, high: &Distribution, tolerance: f64, inclusive: bool) -> f64 {
	let below = |a: f64, b: f64| a < b || (inclusive && (a - b).abs() <= tolerance);

	x.iter()
		.map(|(value, prob)| {
			let above_low: f64 = low.iter().filter(|&(l, _)| below(l, value)).map(|(_, p)| p).sum();
			let below_high: f64 = high.iter().filter(|&(h, _)| below(value, h)).map(|(_, p)| p).sum();
			prob * above_low * below_high
		})
		.sum()
}

/// Accumulates the joint probability of every pair of outcomes that satisfies a predicate, in O(N·M).
fn joint(a: &Distribution, b: &Distribution, pred: impl Fn(f64, f64) -> bool) -> f64 {
	let mut total = 0.0;
	for (x, px) in a.iter() {
		for (y, py) in b.iter() {
			if pred(x, y) {
				total += px * py;
			}
		}
	}
	total
}
