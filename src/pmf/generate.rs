//! Generators for dice distributions: sums, exploding dice, and the highest of several dice.

use alloc::vec::Vec;
use core::fmt;

use super::{
	check_sum,
	convolve::{convolve, integral, width},
	normalize, Config, Distribution, Error, Source,
};
use crate::{
	combinatorics::combination,
	dice::{Dice, Kind},
};

/// What a PMF's distribution is generated from
#[derive(Debug, Clone, PartialEq)]
#[expect(clippy::exhaustive_enums, reason = "A distribution is either given or generated")]
pub enum Description {
	/// An explicit distribution that is only ever re-validated
	Literal(Distribution),

	/// Dice parameters that the distribution is generated from
	Dice(Dice),
}

impl Description {
	/// Interprets a source as dice parameters of the given kind, falling back to a literal distribution.
	///
	/// A source holding exactly two numbers that are both positive integers is read as `(count, sides)`. Everything
	/// else, including any PMF-like object, is normalized into a literal distribution.
	///
	/// # Errors
	/// If the source is neither dice parameters nor normalizable, the normalization error is returned.
	///
	/// # Examples
	/// ```
	/// use diestat::{dice::Kind, pmf::{Description, Source}, Dice};
	///
	/// let desc = Description::interpret(&Source::from([3.0, 8.0]), Kind::Highest)?;
	/// assert_eq!(desc, Description::Dice(Dice::new_highest(3, 8)));
	///
	/// let desc = Description::interpret(&Source::from([[1.0, 2.0], [0.5, 0.5]]), Kind::Highest)?;
	/// assert!(matches!(desc, Description::Literal(..)));
	/// # Ok::<(), diestat::pmf::Error>(())
	/// ```
	pub fn interpret(source: &Source<'_>, kind: Kind) -> Result<Self, Error> {
		if source.size() == 2 && !matches!(source, Source::Accessor(..)) {
			let numbers = source.flatten();
			if let [count, sides] = numbers[..] {
				if let (Some(count), Some(sides)) = (dice_param(count), dice_param(sides)) {
					return Ok(Self::Dice(Dice::with_kind(count, sides, kind)));
				}
			}
		}

		normalize(source.clone()).map(Self::Literal)
	}
}

impl fmt::Display for Description {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Literal(dist) => write!(f, "literal distribution of {} outcomes", dist.len()),
			Self::Dice(dice) => write!(f, "{dice}"),
		}
	}
}

/// Reads a number as a dice count or side count, if it is a positive integer.
#[expect(
	clippy::cast_possible_truncation,
	clippy::cast_sign_loss,
	reason = "Range and integrality are checked beforehand"
)]
fn dice_param(x: f64) -> Option<u32> {
	(x >= 1.0 && x <= f64::from(u32::MAX) && x.fract() == 0.0).then(|| x as u32)
}

/// Generates the distribution for a description at the tolerance and limits of a config.
///
/// This is a pure function: regenerating at a new tolerance yields a new distribution, leaving the old one untouched.
///
/// # Errors
/// If the dice are invalid, an exploding truncation can't converge, or the result doesn't sum to 1 within the
/// tolerance, an error variant is returned.
pub fn regenerate(description: &Description, config: &Config) -> Result<Distribution, Error> {
	log::trace!("regenerating {description} at tolerance {}", config.tolerance);

	let dist = match description {
		Description::Literal(dist) => dist.clone(),
		Description::Dice(dice) if !dice.is_valid() => return Err(Error::InvalidDice(*dice)),
		Description::Dice(dice) => match dice.kind {
			Kind::Sum => sum_of(dice.count, dice.sides)?,
			Kind::Exploding => exploding_of(dice.count, dice.sides, config)?,
			Kind::Highest => highest_of(dice.count, dice.sides)?,
		},
	};

	check_sum(dist.probabilities(), config.tolerance)?;
	Ok(dist)
}

/// Generates the distribution of the sum of `count` dice with `sides` sides each.
///
/// # Errors
/// Zero dice or zero sides fail with [`Error::InvalidDice`].
///
/// # Examples
/// ```
/// use diestat::pmf::sum_of;
///
/// let dist = sum_of(2, 6)?;
/// assert_eq!(dist.values(), &[2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
/// assert!((dist.probabilities()[5] - 6.0 / 36.0).abs() < 1e-12);
/// # Ok::<(), diestat::pmf::Error>(())
/// ```
pub fn sum_of(count: u32, sides: u32) -> Result<Distribution, Error> {
	let dice = Dice::new(count, sides);
	if !dice.is_valid() {
		return Err(Error::InvalidDice(dice));
	}
	fold_dice(&Distribution::uniform_die(sides), count)
}

/// Adds `count` independent copies of a single die's distribution together. Fewer than two copies yield the die
/// itself.
fn fold_dice(die: &Distribution, count: u32) -> Result<Distribution, Error> {
	let mut acc = die.clone();
	for _ in 1..count {
		acc = convolve(&acc, die)?;
	}
	Ok(acc)
}

/// Truncated distribution of a single exploding die
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::exhaustive_structs)]
pub struct Truncated {
	/// Distribution up to the truncation point
	pub distribution: Distribution,

	/// Number of explosion levels appended beyond the first roll
	pub levels: u32,
}

/// Generates the distribution of a single exploding die, truncated once its probabilities sum to 1 within
/// `tolerance`.
///
/// The maximum face never terminates a roll, so it gets no probability of its own. Every explosion level `k` repeats
/// the faces shifted up by `k * sides`, with each face's probability raised to the power `k + 1`.
///
/// # Errors
/// If the probabilities haven't summed to 1 within `tolerance` after `max_levels` levels, [`Error::ConvergenceFailure`]
/// is returned. Zero sides fail with [`Error::InvalidDice`].
///
/// # Examples
/// ```
/// use diestat::pmf::exploding_die;
///
/// let coarse = exploding_die(6, 1e-3, 100)?;
/// let fine = exploding_die(6, 1e-9, 100)?;
/// assert!(fine.levels > coarse.levels);
/// assert_eq!(fine.distribution.len(), 6 * (fine.levels as usize + 1));
/// # Ok::<(), diestat::pmf::Error>(())
/// ```
pub fn exploding_die(sides: u32, tolerance: f64, max_levels: u32) -> Result<Truncated, Error> {
	if sides == 0 {
		return Err(Error::InvalidDice(Dice::new_exploding(1, sides)));
	}

	let (base_values, mut base_probs) = Distribution::uniform_die(sides).into_rows();
	if let Some(max_face) = base_probs.last_mut() {
		*max_face = 0.0;
	}

	let mut values = base_values.clone();
	let mut probs = base_probs.clone();
	let mut levels: u32 = 0;
	while check_sum(&probs, tolerance).is_err() {
		if levels >= max_levels {
			log::warn!("exploding d{sides} failed to reach tolerance {tolerance:e} within {levels} levels");
			return Err(Error::ConvergenceFailure {
				sides,
				levels,
				tolerance,
			});
		}

		levels = levels.saturating_add(1);
		let shift = f64::from(levels) * f64::from(sides);
		let power = i32::try_from(levels.saturating_add(1)).unwrap_or(i32::MAX);
		values.extend(base_values.iter().map(|value| value + shift));
		probs.extend(base_probs.iter().map(|prob| prob.powi(power)));
	}

	log::debug!("truncated exploding d{sides} after {levels} levels at tolerance {tolerance:e}");
	Ok(Truncated {
		distribution: Distribution::from_rows_unchecked(values, probs),
		levels,
	})
}

/// Generates the distribution of the sum of `count` exploding dice.
///
/// The single die is truncated at a tolerance tightened by a factor of 10 per additional die, so that the error
/// compounded by the convolutions still fits within the config's tolerance.
fn exploding_of(count: u32, sides: u32, config: &Config) -> Result<Distribution, Error> {
	let exponent = i32::try_from(count.saturating_sub(1)).unwrap_or(i32::MAX);
	let tightened = config.tolerance / 10_f64.powi(exponent);
	let die = exploding_die(sides, tightened, config.max_levels)?;

	check_sum(die.distribution.probabilities(), config.tolerance)?;
	fold_dice(&die.distribution, count)
}

/// Generates the distribution of the highest face shown by `count` dice with `sides` sides each.
///
/// The probability of a maximum of `Z` sums, over every number `i` of dice showing `Z`, the chance that exactly those
/// `i` dice show `Z` while the rest show less. Binomial coefficients come from [`combination`], whose `f64` factorials
/// overflow past 170 dice; such counts produce a distribution that fails validation.
///
/// # Errors
/// Zero dice or zero sides fail with [`Error::InvalidDice`].
///
/// # Examples
/// ```
/// use diestat::pmf::highest_of;
///
/// let dist = highest_of(2, 6)?;
/// for (face, prob) in dist.iter() {
/// 	assert!((prob - (2.0 * face - 1.0) / 36.0).abs() < 1e-12);
/// }
/// # Ok::<(), diestat::pmf::Error>(())
/// ```
pub fn highest_of(count: u32, sides: u32) -> Result<Distribution, Error> {
	let dice = Dice::new_highest(count, sides);
	if !dice.is_valid() {
		return Err(Error::InvalidDice(dice));
	}

	let faces = f64::from(sides);
	let single = 1.0 / faces;

	let probs = (1..=sides)
		.map(|face| {
			let below = (f64::from(face) - 1.0) / faces;
			(1..=count)
				.map(|showing| {
					let rest = i32::try_from(count.saturating_sub(showing)).unwrap_or(i32::MAX);
					let showing_pow = i32::try_from(showing).unwrap_or(i32::MAX);
					combination(count, showing) * single.powi(showing_pow) * below.powi(rest)
				})
				.sum()
		})
		.collect::<Vec<f64>>();

	Ok(Distribution::from_rows_unchecked((1..=sides).map(f64::from).collect(), probs))
}

/// Computes the distribution of the higher of two independent outcomes.
///
/// The output covers every integer from the lowest to the highest value of either input, with each pair of outcomes
/// contributing its joint probability to the bucket of the larger value.
///
/// # Errors
/// If any value isn't an integer, [`Error::NonIntegralSupport`] is returned. If the values span more integers than
/// [`MAX_SUPPORT_WIDTH`](super::MAX_SUPPORT_WIDTH), [`Error::SupportTooWide`] is returned.
#[expect(
	clippy::cast_possible_truncation,
	clippy::cast_sign_loss,
	clippy::cast_precision_loss,
	reason = "Values are checked to be integral and offsets are non-negative"
)]
pub(crate) fn take_highest(a: &Distribution, b: &Distribution) -> Result<Distribution, Error> {
	for &value in a.values().iter().chain(b.values()) {
		integral(value)?;
	}

	let low = a.min_value().min(b.min_value());
	let high = a.max_value().max(b.max_value());
	let mut probs = alloc::vec![0.0; width(high - low)?.saturating_add(1)];

	for (a_value, a_prob) in a.iter() {
		for (b_value, b_prob) in b.iter() {
			let index = (a_value.max(b_value) - low) as usize;
			if let Some(bucket) = probs.get_mut(index) {
				*bucket += a_prob * b_prob;
			}
		}
	}

	let values = (0..probs.len()).map(|offset| low + offset as f64).collect();
	Ok(Distribution::from_rows_unchecked(values, probs))
}
