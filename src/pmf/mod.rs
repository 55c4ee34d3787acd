//! Discrete probability mass functions over numeric outcomes, along with everything that can be done with them.
//!
//! A [`Pmf`] is an immutable snapshot: a canonical [`Distribution`], the [`Description`] it was generated from, and
//! the [`Config`] (tolerance and limits) it was generated with. Changing the tolerance produces a new snapshot through
//! [`Pmf::with_tolerance`].

mod compare;
mod convolve;
pub mod generate;
pub mod source;

use alloc::{
	format,
	string::{String, ToString},
	vec::Vec,
};
use core::fmt;

pub use self::{
	convolve::convolve,
	generate::{exploding_die, highest_of, regenerate, sum_of, Description, Truncated},
	source::{check_sum, normalize, validate, AsDistribution, Distribution, Source},
};
use crate::{
	dice::{Dice, Kind, Sampler},
	expr::Describe,
};

/// Largest resolution the sampler will draw at
pub const MAX_RESOLUTION: u64 = 1 << 52;

/// Largest number of integers an operation will lay out between the lowest and highest value of a support
pub const MAX_SUPPORT_WIDTH: usize = 1 << 24;

/// A discrete probability mass function: a set of `(value, probability)` pairs whose probabilities sum to 1 within a
/// tolerance.
///
/// # Examples
/// ```
/// use diestat::Pmf;
///
/// let d4 = Pmf::new([[1.0, 2.0, 3.0, 4.0], [0.25, 0.25, 0.25, 0.25]])?;
/// assert_eq!(d4.expected_value(), 2.5);
/// assert_eq!(d4.len(), 4);
/// # Ok::<(), diestat::pmf::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Pmf {
	/// Published distribution
	dist: Distribution,

	/// What the distribution is generated from
	description: Description,

	/// Tolerance and limits the distribution was generated with
	config: Config,

	/// Whether the distribution is a truncation of an unbounded one
	boundedness: Boundedness,
}

impl Pmf {
	/// Creates a PMF from an explicit distribution, using the default [`Config`].
	///
	/// # Errors
	/// If the source can't be normalized, or its probabilities don't sum to 1 within the tolerance, an error variant is
	/// returned.
	///
	/// # Examples
	/// ```
	/// use diestat::{pmf::Error, Pmf};
	///
	/// let bad = Pmf::new([[1.0, 2.0, 3.0, 4.0], [0.25, 0.25, 0.25, 0.26]]);
	/// assert!(matches!(bad, Err(Error::Sum { .. })));
	///
	/// let bad = Pmf::new(vec![vec![0.1; 10]]);
	/// assert!(matches!(bad, Err(Error::Shape(..))));
	///
	/// let bad = Pmf::new(None::<f64>);
	/// assert!(matches!(bad, Err(Error::NullDistribution)));
	///
	/// let point = Pmf::new(42)?;
	/// assert_eq!(point.get(0), Some((42.0, 1.0)));
	/// # Ok::<(), Error>(())
	/// ```
	pub fn new<'a>(source: impl Into<Source<'a>>) -> Result<Self, Error> {
		Self::with_config(source, Config::default())
	}

	/// Creates a PMF from an explicit distribution with a specific [`Config`].
	///
	/// If the source is another PMF-like object that carries its own tolerance, validation uses that tolerance, but
	/// the new PMF still adopts `config`.
	///
	/// # Errors
	/// See [`Self::new`].
	pub fn with_config<'a>(source: impl Into<Source<'a>>, config: Config) -> Result<Self, Error> {
		let source = source.into();
		let boundedness = source.boundedness();
		let dist = validate(source, config.tolerance)?;
		Ok(Self {
			description: Description::Literal(dist.clone()),
			dist,
			config,
			boundedness,
		})
	}

	/// Creates a PMF generated from dice parameters.
	///
	/// # Errors
	/// If the dice have no dice or no sides, [`Error::InvalidDice`] is returned. Exploding dice can additionally fail
	/// with [`Error::ConvergenceFailure`].
	///
	/// # Examples
	/// ```
	/// use diestat::{Config, Dice, Pmf};
	///
	/// let pmf = Pmf::from_dice(Dice::new(2, 6), Config::default())?;
	/// assert_eq!(pmf.values().first(), Some(&2.0));
	/// assert_eq!(pmf.values().last(), Some(&12.0));
	/// # Ok::<(), diestat::pmf::Error>(())
	/// ```
	pub fn from_dice(dice: Dice, config: Config) -> Result<Self, Error> {
		if !dice.is_valid() {
			return Err(Error::InvalidDice(dice));
		}
		Self::from_description(Description::Dice(dice), config)
	}

	/// Creates a PMF of a given kind from either a `(count, sides)` pair or a literal distribution.
	///
	/// The source is first interpreted as a pair of dice parameters. Only if that fails is it treated as a literal
	/// distribution, so a literal distribution holding exactly two numbers is always read as dice parameters.
	///
	/// # Errors
	/// See [`Self::from_dice`] and [`Self::new`].
	///
	/// # Examples
	/// ```
	/// use diestat::{dice::Kind, Config, Pmf};
	///
	/// // (2, 6) is read as two six-sided dice
	/// let pair = Pmf::generate([2.0, 6.0], Kind::Sum, Config::default())?;
	/// assert_eq!(pair.len(), 11);
	///
	/// // A literal distribution is kept as-is
	/// let literal = Pmf::generate([[1.0, 2.0], [0.5, 0.5]], Kind::Sum, Config::default())?;
	/// assert_eq!(literal.values(), &[1.0, 2.0]);
	/// # Ok::<(), diestat::pmf::Error>(())
	/// ```
	pub fn generate<'a>(source: impl Into<Source<'a>>, kind: Kind, config: Config) -> Result<Self, Error> {
		let source = source.into();
		let description = Description::interpret(&source, kind)?;

		let mut pmf = Self::from_description(description, config)?;
		pmf.boundedness = match source.boundedness() {
			Boundedness::Finite => pmf.boundedness,
			Boundedness::TruncatedInfinite { .. } => config.unbounded(),
		};
		Ok(pmf)
	}

	/// Creates a PMF of the sum of `count` dice with `sides` sides each, using the default [`Config`].
	///
	/// # Errors
	/// See [`Self::from_dice`].
	///
	/// # Examples
	/// ```
	/// use diestat::Pmf;
	///
	/// let d6 = Pmf::sum_of(1, 6)?;
	/// assert!((d6.expected_value() - 3.5).abs() < 1e-9);
	/// # Ok::<(), diestat::pmf::Error>(())
	/// ```
	pub fn sum_of(count: u32, sides: u32) -> Result<Self, Error> {
		Self::from_dice(Dice::new(count, sides), Config::default())
	}

	/// Creates a PMF of the sum of `count` exploding dice with `sides` sides each, using the default [`Config`].
	///
	/// # Errors
	/// See [`Self::from_dice`].
	pub fn exploding(count: u32, sides: u32) -> Result<Self, Error> {
		Self::from_dice(Dice::new_exploding(count, sides), Config::default())
	}

	/// Creates a PMF of the highest face of `count` dice with `sides` sides each, using the default [`Config`].
	///
	/// # Errors
	/// See [`Self::from_dice`].
	pub fn highest_of(count: u32, sides: u32) -> Result<Self, Error> {
		Self::from_dice(Dice::new_highest(count, sides), Config::default())
	}

	/// Generates the distribution for a description and wraps it into a PMF.
	pub(crate) fn from_description(description: Description, config: Config) -> Result<Self, Error> {
		let dist = regenerate(&description, &config)?;
		let boundedness = match &description {
			Description::Dice(Dice {
				kind: Kind::Exploding,
				..
			}) => config.unbounded(),
			Description::Dice(..) | Description::Literal(..) => Boundedness::Finite,
		};

		Ok(Self {
			dist,
			description,
			config,
			boundedness,
		})
	}

	/// Wraps a freshly computed distribution (the result of an operation between PMFs) into a PMF.
	fn from_result(dist: Distribution, config: Config, boundedness: Boundedness) -> Result<Self, Error> {
		check_sum(dist.probabilities(), config.tolerance)?;
		Ok(Self {
			description: Description::Literal(dist.clone()),
			dist,
			config,
			boundedness,
		})
	}

	/// Coerces an operand into a PMF, falling back to this PMF's config for anything that doesn't carry its own
	/// tolerance.
	fn coerce<'a>(&self, other: impl Into<Source<'a>>) -> Result<Self, Error> {
		let other = other.into();
		let config = Config {
			tolerance: other.own_tolerance().unwrap_or(self.config.tolerance),
			..self.config
		};
		Self::with_config(other, config)
	}

	/// Creates a new snapshot of this PMF regenerated at a different tolerance.
	///
	/// Generated PMFs are regenerated in full from their dice parameters; literal ones are re-validated.
	///
	/// # Errors
	/// If the distribution doesn't validate at the new tolerance, or an exploding truncation can't converge, an error
	/// variant is returned.
	///
	/// # Examples
	/// ```
	/// use diestat::Pmf;
	///
	/// let coarse = Pmf::exploding(1, 6)?;
	/// let fine = coarse.with_tolerance(1e-9)?;
	/// assert!(fine.len() > coarse.len());
	/// assert_eq!(fine.tolerance(), 1e-9);
	/// # Ok::<(), diestat::pmf::Error>(())
	/// ```
	pub fn with_tolerance(&self, tolerance: f64) -> Result<Self, Error> {
		self.with_new_config(Config { tolerance, ..self.config })
	}

	/// Creates a new snapshot of this PMF regenerated with a different [`Config`].
	///
	/// # Errors
	/// See [`Self::with_tolerance`].
	pub fn with_new_config(&self, config: Config) -> Result<Self, Error> {
		let dist = regenerate(&self.description, &config)?;
		let boundedness = match self.boundedness {
			Boundedness::Finite => Boundedness::Finite,
			Boundedness::TruncatedInfinite { .. } => config.unbounded(),
		};

		Ok(Self {
			dist,
			description: self.description.clone(),
			config,
			boundedness,
		})
	}

	/// Computes the distribution of the sum of an outcome of this PMF and an independent outcome of another.
	///
	/// The result's tolerance is the larger of the two tolerances. Both supports are expected to be contiguous,
	/// unit-spaced integer ranges (see [`convolve()`]).
	///
	/// # Errors
	/// If the other operand is invalid, or either minimum value isn't an integer, an error variant is returned.
	///
	/// # Examples
	/// ```
	/// use diestat::Pmf;
	///
	/// let d6 = Pmf::sum_of(1, 6)?;
	/// let two = d6.convolve(&d6)?;
	/// let direct = Pmf::sum_of(2, 6)?;
	/// assert_eq!(two.values(), direct.values());
	///
	/// let plus_three = d6.convolve(3)?;
	/// assert_eq!(plus_three.values(), &[4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
	/// # Ok::<(), diestat::pmf::Error>(())
	/// ```
	pub fn convolve<'a>(&self, other: impl Into<Source<'a>>) -> Result<Self, Error> {
		let other = self.coerce(other)?;
		let config = Config {
			tolerance: self.tolerance().max(other.tolerance()),
			..self.config
		};
		let dist = convolve(&self.dist, &other.dist)?;
		Self::from_result(dist, config, self.boundedness.either(other.boundedness))
	}

	/// Computes the distribution of the higher of an outcome of this PMF and an independent outcome of another.
	///
	/// The result covers every integer from the lowest to the highest value of either operand, and its tolerance is the
	/// larger of the two tolerances.
	///
	/// # Errors
	/// If the other operand is invalid, or any value isn't an integer, an error variant is returned.
	///
	/// # Examples
	/// ```
	/// use diestat::Pmf;
	///
	/// let d6 = Pmf::highest_of(1, 6)?;
	/// let pair = d6.take_highest(&d6)?;
	/// let direct = Pmf::highest_of(2, 6)?;
	/// for (a, b) in pair.probabilities().iter().zip(direct.probabilities()) {
	/// 	assert!((a - b).abs() < 1e-12);
	/// }
	/// # Ok::<(), diestat::pmf::Error>(())
	/// ```
	pub fn take_highest<'a>(&self, other: impl Into<Source<'a>>) -> Result<Self, Error> {
		let other = self.coerce(other)?;
		let config = Config {
			tolerance: self.tolerance().max(other.tolerance()),
			..self.config
		};
		let dist = generate::take_highest(&self.dist, &other.dist)?;
		Self::from_result(dist, config, self.boundedness.either(other.boundedness))
	}

	/// Probability that an outcome of this PMF is less than an independent outcome of another.
	///
	/// # Errors
	/// If the other operand is invalid, an error variant is returned.
	///
	/// # Examples
	/// ```
	/// use diestat::Pmf;
	///
	/// let d20 = Pmf::sum_of(1, 20)?;
	/// assert!((d20.less_than(11)? - 0.5).abs() < 1e-9);
	/// # Ok::<(), diestat::pmf::Error>(())
	/// ```
	pub fn less_than<'a>(&self, other: impl Into<Source<'a>>) -> Result<f64, Error> {
		let other = self.coerce(other)?;
		Ok(compare::less_than(&self.dist, &other.dist))
	}

	/// Probability that an outcome of this PMF equals an independent outcome of another.
	///
	/// Values count as equal when they are within *this* PMF's tolerance; the other operand's tolerance is not
	/// considered.
	///
	/// # Errors
	/// If the other operand is invalid, an error variant is returned.
	///
	/// # Examples
	/// ```
	/// use diestat::Pmf;
	///
	/// let d20 = Pmf::sum_of(1, 20)?;
	/// assert!((d20.equal_to(10)? - 0.05).abs() < 1e-9);
	/// # Ok::<(), diestat::pmf::Error>(())
	/// ```
	pub fn equal_to<'a>(&self, other: impl Into<Source<'a>>) -> Result<f64, Error> {
		let other = self.coerce(other)?;
		Ok(compare::equal(&self.dist, &other.dist, self.tolerance()))
	}

	/// Probability that an outcome of this PMF is less than or equal to an independent outcome of another.
	///
	/// # Errors
	/// If the other operand is invalid, an error variant is returned.
	pub fn at_most<'a>(&self, other: impl Into<Source<'a>>) -> Result<f64, Error> {
		let other = self.coerce(other)?;
		Ok(compare::less_than(&self.dist, &other.dist) + compare::equal(&self.dist, &other.dist, self.tolerance()))
	}

	/// Probability that an outcome of this PMF differs from an independent outcome of another.
	///
	/// # Errors
	/// If the other operand is invalid, an error variant is returned.
	pub fn not_equal_to<'a>(&self, other: impl Into<Source<'a>>) -> Result<f64, Error> {
		Ok(1.0 - self.equal_to(other)?)
	}

	/// Probability that an outcome of this PMF is greater than an independent outcome of another.
	///
	/// # Errors
	/// If the other operand is invalid, an error variant is returned.
	pub fn greater_than<'a>(&self, other: impl Into<Source<'a>>) -> Result<f64, Error> {
		let other = self.coerce(other)?;
		Ok(compare::less_than(&other.dist, &self.dist))
	}

	/// Probability that an outcome of this PMF is greater than or equal to an independent outcome of another.
	///
	/// # Errors
	/// If the other operand is invalid, an error variant is returned.
	pub fn at_least<'a>(&self, other: impl Into<Source<'a>>) -> Result<f64, Error> {
		let other = self.coerce(other)?;
		Ok(compare::less_than(&other.dist, &self.dist) + compare::equal(&self.dist, &other.dist, self.tolerance()))
	}

	/// Probability that an outcome of this PMF lies between independent outcomes of two bounds, inclusive of both.
	///
	/// All three outcomes are considered jointly, unlike two separate comparisons against each bound.
	///
	/// # Errors
	/// If either bound is invalid, an error variant is returned.
	///
	/// # Examples
	/// ```
	/// use diestat::Pmf;
	///
	/// let d20 = Pmf::sum_of(1, 20)?;
	/// assert!((d20.within(1, 10)? - 0.5).abs() < 1e-9);
	/// assert!((d20.within(1, 1)? - 0.05).abs() < 1e-9);
	/// # Ok::<(), diestat::pmf::Error>(())
	/// ```
	pub fn within<'a, 'b>(&self, low: impl Into<Source<'a>>, high: impl Into<Source<'b>>) -> Result<f64, Error> {
		let low = self.coerce(low)?;
		let high = self.coerce(high)?;
		Ok(compare::between(&self.dist, &low.dist, &high.dist, self.tolerance(), true))
	}

	/// Probability that an outcome of this PMF lies strictly between independent outcomes of two bounds.
	///
	/// # Errors
	/// If either bound is invalid, an error variant is returned.
	///
	/// # Examples
	/// ```
	/// use diestat::Pmf;
	///
	/// let d20 = Pmf::sum_of(1, 20)?;
	/// assert!((d20.strictly_within(9, 11)? - 0.05).abs() < 1e-9);
	/// # Ok::<(), diestat::pmf::Error>(())
	/// ```
	pub fn strictly_within<'a, 'b>(
		&self,
		low: impl Into<Source<'a>>,
		high: impl Into<Source<'b>>,
	) -> Result<f64, Error> {
		let low = self.coerce(low)?;
		let high = self.coerce(high)?;
		Ok(compare::between(&self.dist, &low.dist, &high.dist, self.tolerance(), false))
	}

	/// Calculates the moment of order `k` (the sum of each value raised to `k`, weighted by its probability).
	#[must_use]
	pub fn moment(&self, k: i32) -> f64 {
		self.dist.iter().map(|(value, prob)| value.powi(k) * prob).sum()
	}

	/// Calculates the expected value (the first moment).
	///
	/// # Examples
	/// ```
	/// use diestat::Pmf;
	///
	/// let ev = Pmf::sum_of(4, 4)?.expected_value();
	/// assert!((ev - 10.0).abs() < 1e-9);
	/// # Ok::<(), diestat::pmf::Error>(())
	/// ```
	#[must_use]
	pub fn expected_value(&self) -> f64 {
		self.moment(1)
	}

	/// Calculates the variance (second moment less the squared expected value).
	#[must_use]
	pub fn variance(&self) -> f64 {
		let ev = self.expected_value();
		self.moment(2) - ev * ev
	}

	/// Gets the tolerance, used both to validate the probability total and to treat values as equal.
	#[must_use]
	#[inline]
	pub const fn tolerance(&self) -> f64 {
		self.config.tolerance
	}

	/// Gets the config the PMF was generated with.
	#[must_use]
	#[inline]
	pub const fn config(&self) -> &Config {
		&self.config
	}

	/// Gets what the distribution was generated from.
	#[must_use]
	#[inline]
	pub const fn description(&self) -> &Description {
		&self.description
	}

	/// Gets whether this is a truncation of an unbounded distribution.
	#[must_use]
	#[inline]
	pub const fn boundedness(&self) -> Boundedness {
		self.boundedness
	}

	/// Gets the published distribution.
	#[must_use]
	#[inline]
	pub const fn distribution(&self) -> &Distribution {
		&self.dist
	}

	/// Gets the outcome values.
	#[must_use]
	#[inline]
	pub fn values(&self) -> &[f64] {
		self.dist.values()
	}

	/// Gets the probabilities, in the same order as the values.
	#[must_use]
	#[inline]
	pub fn probabilities(&self) -> &[f64] {
		self.dist.probabilities()
	}

	/// Gets the `(value, probability)` pair at an index.
	#[must_use]
	pub fn get(&self, index: usize) -> Option<(f64, f64)> {
		Some((*self.values().get(index)?, *self.probabilities().get(index)?))
	}

	/// Iterates over `(value, probability)` pairs in stored order.
	pub fn iter(&self) -> impl ExactSizeIterator<Item = (f64, f64)> + '_ {
		self.dist.iter()
	}

	/// Gets the number of outcomes N (the distribution is of size 2xN).
	#[must_use]
	#[inline]
	pub fn len(&self) -> usize {
		self.dist.len()
	}

	/// Always `false`; a PMF has at least one outcome.
	#[must_use]
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.dist.is_empty()
	}

	/// Determines how finely the unit interval needs to be divided to sample this distribution: the reciprocal of
	/// the smallest probability (or smallest difference between consecutive probabilities), squared.
	#[must_use]
	#[expect(
		clippy::cast_possible_truncation,
		clippy::cast_sign_loss,
		clippy::cast_precision_loss,
		reason = "Resolution is clamped to a range f64 represents exactly"
	)]
	pub fn resolution(&self) -> u64 {
		let probs = self.probabilities();
		let absmin = probs.iter().copied().fold(f64::INFINITY, f64::min);
		let relmin = probs
			.windows(2)
			.map(|pair| pair[1] - pair[0])
			.fold(f64::INFINITY, f64::min);
		let realmin = if relmin == 0.0 || relmin.is_infinite() {
			absmin
		} else {
			absmin.min(relmin)
		};

		let resolution = (1.0 / realmin).powi(2).ceil();
		if resolution.is_finite() && resolution <= MAX_RESOLUTION as f64 {
			(resolution as u64).max(1)
		} else {
			log::debug!("clamping sampling resolution {resolution} to {MAX_RESOLUTION}");
			MAX_RESOLUTION
		}
	}

	/// Draws a value from the distribution by mapping a uniform draw from `1..=resolution` onto the cumulative
	/// probabilities, in stored order.
	///
	/// # Examples
	/// ```
	/// use diestat::{dice::sampler::Val as ValSampler, Pmf};
	///
	/// let pmf = Pmf::new([[10.0, 25.0], [0.25, 0.75]])?;
	/// assert_eq!(pmf.sample(&mut ValSampler(1)), 10.0);
	/// assert_eq!(pmf.sample(&mut ValSampler(u64::MAX)), 25.0);
	/// # Ok::<(), diestat::pmf::Error>(())
	/// ```
	#[expect(clippy::cast_precision_loss, reason = "Resolution never exceeds 2^52")]
	pub fn sample(&self, sampler: &mut impl Sampler) -> f64 {
		let resolution = self.resolution();
		let point = sampler.draw(resolution) as f64 / resolution as f64;
		log::trace!("sampling {} outcomes at {point} (resolution {resolution})", self.len());

		let mut cumulative = 0.0;
		for (value, prob) in self.iter() {
			cumulative += prob;
			if cumulative >= point {
				return value;
			}
		}

		// Rounding left the total just short of the drawn point
		self.values().last().copied().unwrap_or_default()
	}

	/// Computes the label used when describing the PMF.
	fn label(&self) -> String {
		match &self.description {
			Description::Dice(dice) => dice.to_string(),
			Description::Literal(..) => String::from("pmf"),
		}
	}
}

impl AsDistribution for Pmf {
	#[inline]
	fn distribution(&self) -> &Distribution {
		&self.dist
	}

	#[inline]
	fn tolerance(&self) -> Option<f64> {
		Some(self.config.tolerance)
	}

	#[inline]
	fn boundedness(&self) -> Boundedness {
		self.boundedness
	}
}

impl<'a> From<&'a Pmf> for Source<'a> {
	#[inline]
	fn from(pmf: &'a Pmf) -> Self {
		Self::Accessor(pmf)
	}
}

impl Describe for Pmf {
	/// Builds a string of the PMF's label and its `value: probability` pairs.
	///
	/// If `list_limit` is specified and there are more pairs than it, the list is truncated and appended with
	/// "X more...". Truncated unbounded distributions always stop at their preview limit instead, regardless of
	/// `list_limit`.
	///
	/// # Examples
	/// ```
	/// use diestat::{expr::Describe, Pmf};
	///
	/// let pmf = Pmf::new([[1.0, 2.0, 3.0, 4.0], [0.25, 0.25, 0.25, 0.25]])?;
	/// assert_eq!(pmf.describe(None), "pmf[1: 0.25, 2: 0.25, 3: 0.25, 4: 0.25]");
	/// assert_eq!(pmf.describe(Some(2)), "pmf[1: 0.25, 2: 0.25, 2 more...]");
	/// # Ok::<(), diestat::pmf::Error>(())
	/// ```
	fn describe(&self, list_limit: Option<usize>) -> String {
		let list_limit = match self.boundedness {
			Boundedness::Finite => list_limit.unwrap_or(usize::MAX),
			Boundedness::TruncatedInfinite { preview_limit } => preview_limit,
		};
		let truncated = self.len().saturating_sub(list_limit);

		format!(
			"{}[{}{}]",
			self.label(),
			self.iter()
				.take(list_limit)
				.map(|(value, prob)| format!("{value}: {prob}"))
				.collect::<Vec<_>>()
				.join(", "),
			if truncated > 0 {
				format!(", {truncated} more...")
			} else {
				String::new()
			}
		)
	}
}

impl fmt::Display for Pmf {
	/// Formats the value using the given formatter. [Read more][core::fmt::Debug::fmt()]
	///
	/// The output is equivalent to calling [`Self::describe(None)`].
	///
	/// [`Self::describe(None)`]: Self::describe()
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.describe(None))
	}
}

/// Whether a distribution is complete or a truncation of an unbounded one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[expect(clippy::exhaustive_enums, reason = "A distribution is either bounded or it isn't")]
pub enum Boundedness {
	/// The support is finite and fully listed.
	#[default]
	Finite,

	/// The support is unbounded and has been truncated to a tolerance. Only `preview_limit` terms get rendered.
	TruncatedInfinite {
		/// Number of terms to render
		preview_limit: usize,
	},
}

impl Boundedness {
	/// Combines the boundedness of two operands: the result is unbounded if either of them is.
	#[must_use]
	pub const fn either(self, other: Self) -> Self {
		match self {
			Self::TruncatedInfinite { .. } => self,
			Self::Finite => other,
		}
	}
}

/// Tolerance and limits governing validation, truncation, and rendering
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(clippy::exhaustive_structs)]
pub struct Config {
	/// Maximum allowed deviation of a probability total from 1, and the distance within which two values are equal
	pub tolerance: f64,

	/// Maximum number of explosion levels an exploding die is expanded to before giving up
	pub max_levels: u32,

	/// Number of terms rendered for truncated unbounded distributions
	pub preview_limit: usize,
}

impl Config {
	/// Default tolerance
	pub const DEFAULT_TOLERANCE: f64 = 1e-5;

	/// Default maximum explosion levels
	pub const DEFAULT_MAX_LEVELS: u32 = 1024;

	/// Default number of rendered terms for unbounded distributions
	pub const DEFAULT_PREVIEW_LIMIT: usize = 40;

	/// Creates a new config builder.
	///
	/// # Examples
	/// ```
	/// use diestat::Config;
	///
	/// let config = Config::builder().tolerance(1e-8).max_levels(64).build();
	/// assert_eq!(config.tolerance, 1e-8);
	/// assert_eq!(config.max_levels, 64);
	/// assert_eq!(config.preview_limit, Config::DEFAULT_PREVIEW_LIMIT);
	/// ```
	#[must_use]
	#[inline]
	pub fn builder() -> ConfigBuilder {
		ConfigBuilder::default()
	}

	/// Boundedness tag for unbounded distributions generated with this config.
	#[must_use]
	#[inline]
	pub const fn unbounded(&self) -> Boundedness {
		Boundedness::TruncatedInfinite {
			preview_limit: self.preview_limit,
		}
	}
}

impl Default for Config {
	fn default() -> Self {
		Self {
			tolerance: Self::DEFAULT_TOLERANCE,
			max_levels: Self::DEFAULT_MAX_LEVELS,
			preview_limit: Self::DEFAULT_PREVIEW_LIMIT,
		}
	}
}

/// Builds a [`Config`] with a fluent interface.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder(Config);

impl ConfigBuilder {
	/// Sets the tolerance.
	#[must_use]
	pub const fn tolerance(mut self, tolerance: f64) -> Self {
		self.0.tolerance = tolerance;
		self
	}

	/// Sets the maximum number of explosion levels.
	#[must_use]
	pub const fn max_levels(mut self, max_levels: u32) -> Self {
		self.0.max_levels = max_levels;
		self
	}

	/// Sets the number of rendered terms for unbounded distributions.
	#[must_use]
	pub const fn preview_limit(mut self, preview_limit: usize) -> Self {
		self.0.preview_limit = preview_limit;
		self
	}

	/// Finalizes the config.
	#[must_use]
	pub const fn build(self) -> Config {
		self.0
	}
}

/// An error resulting from building or operating on a distribution
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
	/// No distribution was given at all.
	#[error("unable to process null distribution")]
	NullDistribution,

	/// The input is not a well-formed two-row structure, or a row has no elements.
	#[error("input does not appear to be 2xN in dimension: {0}")]
	Shape(&'static str),

	/// The probabilities don't sum to 1 within the tolerance.
	#[error("probabilities sum to {total}, not 1 within a tolerance of {tolerance}")]
	Sum {
		/// Actual total of the probabilities
		total: f64,

		/// Tolerance the total was checked against
		tolerance: f64,
	},

	/// The input couldn't be coerced into a distribution at all.
	#[error("could not cast input to a distribution: {0}")]
	Cast(&'static str),

	/// An exploding die's truncation didn't reach the required tolerance within the allowed number of levels.
	///
	/// # Examples
	/// ```
	/// use diestat::{pmf::Error, Pmf};
	///
	/// // A one-sided die explodes forever
	/// assert!(matches!(Pmf::exploding(1, 1), Err(Error::ConvergenceFailure { .. })));
	/// ```
	#[error("exploding d{sides} did not converge to a tolerance of {tolerance} within {levels} levels")]
	ConvergenceFailure {
		/// Number of sides of the die
		sides: u32,

		/// Number of levels that were generated
		levels: u32,

		/// Tolerance that was required
		tolerance: f64,
	},

	/// An operation that indexes outcomes by value met a value that isn't an integer.
	#[error("operation requires integer values, but found {0}")]
	NonIntegralSupport(f64),

	/// An operation would have to lay out more integers than [`MAX_SUPPORT_WIDTH`] to cover the values involved.
	#[error("support spanning {0} integers is wider than the limit of {max}", max = MAX_SUPPORT_WIDTH)]
	SupportTooWide(f64),

	/// Dice parameters with no dice or no sides.
	#[error("{0} must have at least one die with at least one side")]
	InvalidDice(Dice),
}
