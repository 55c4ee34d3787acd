//! Distribution of the sum of two independent outcomes.

use alloc::{vec, vec::Vec};
use core::iter;

use super::{Distribution, Error, MAX_SUPPORT_WIDTH};

/// Computes the distribution of the sum of two independent outcomes by discrete convolution.
///
/// Both supports are assumed to be contiguous, unit-spaced, ascending integer ranges: probabilities are aligned by
/// their index, starting from each distribution's minimum value. The output covers every integer from the sum of the
/// minimums to that plus `a.len() + b.len() - 2`.
///
/// # Errors
/// If either minimum value isn't an integer, [`Error::NonIntegralSupport`] is returned.
/// If the minimums are further apart than [`MAX_SUPPORT_WIDTH`], [`Error::SupportTooWide`] is returned.
///
/// # Examples
/// ```
/// use diestat::pmf::{convolve, Distribution};
///
/// let coin = Distribution::new(vec![1.0, 2.0], vec![0.5, 0.5])?;
/// let two_coins = convolve(&coin, &coin)?;
/// assert_eq!(two_coins.values(), &[2.0, 3.0, 4.0]);
/// assert_eq!(two_coins.probabilities(), &[0.25, 0.5, 0.25]);
/// # Ok::<(), diestat::pmf::Error>(())
/// ```
#[expect(clippy::cast_precision_loss, reason = "Output length is bounded by the support width limit")]
pub fn convolve(a: &Distribution, b: &Distribution) -> Result<Distribution, Error> {
	let a_min = integral(a.min_value())?;
	let b_min = integral(b.min_value())?;

	// Left-pad whichever side starts further left so both index from the same value
	let offset = b_min - a_min;
	let padding = width(offset.abs())?;
	let mut a_probs = a.probabilities().to_vec();
	let mut b_probs = b.probabilities().to_vec();
	if offset > 0.0 {
		b_probs.splice(0..0, iter::repeat(0.0).take(padding));
	} else if offset < 0.0 {
		a_probs.splice(0..0, iter::repeat(0.0).take(padding));
	}

	// The padding carries through to the front of the output, so it gets dropped again
	let probs = discrete_convolve(&a_probs, &b_probs)
		.into_iter()
		.skip(padding)
		.collect::<Vec<_>>();

	let start = a_min + b_min;
	let values = (0..probs.len()).map(|offset| start + offset as f64).collect();
	Ok(Distribution::from_rows_unchecked(values, probs))
}

/// Full discrete convolution of two sequences.
fn discrete_convolve(a: &[f64], b: &[f64]) -> Vec<f64> {
	let mut out = vec![0.0; (a.len() + b.len()).saturating_sub(1)];
	for (i, x) in a.iter().enumerate() {
		for (j, y) in b.iter().enumerate() {
			if let Some(slot) = out.get_mut(i + j) {
				*slot += x * y;
			}
		}
	}
	out
}

/// Ensures a value is an integer.
pub(super) fn integral(value: f64) -> Result<f64, Error> {
	if value.fract() == 0.0 {
		Ok(value)
	} else {
		Err(Error::NonIntegralSupport(value))
	}
}

/// Converts the distance between two integral values into a number of integers to lay out.
#[expect(
	clippy::cast_possible_truncation,
	clippy::cast_sign_loss,
	clippy::cast_precision_loss,
	reason = "Distance is checked against the limit first"
)]
pub(super) fn width(distance: f64) -> Result<usize, Error> {
	if distance >= 0.0 && distance <= MAX_SUPPORT_WIDTH as f64 {
		Ok(distance as usize)
	} else {
		Err(Error::SupportTooWide(distance))
	}
}
