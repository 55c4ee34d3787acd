//! Canonical distribution storage and the normalization of loosely-shaped inputs into it.

use alloc::{borrow::Cow, vec, vec::Vec};
use core::fmt;

use super::{Boundedness, Error};

/// Canonical storage of a distribution: two parallel rows of equal, non-zero length.
///
/// Values are neither required to be sorted nor unique. A `Distribution` only guarantees its shape and that every
/// number in it is finite; whether its probabilities sum to 1 is checked by [`validate`] against a tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
	/// Outcome values
	values: Vec<f64>,

	/// Probability of the outcome at the same index
	probabilities: Vec<f64>,
}

impl Distribution {
	/// Creates a distribution from a row of values and a row of probabilities.
	///
	/// # Errors
	/// If the rows are empty or of differing lengths, or contain non-finite numbers, an error variant is returned.
	/// The probability total is *not* checked here.
	///
	/// # Examples
	/// ```
	/// use diestat::pmf::{Distribution, Error};
	///
	/// let dist = Distribution::new(vec![1.0, 2.0], vec![0.5, 0.5])?;
	/// assert_eq!(dist.len(), 2);
	///
	/// assert!(matches!(Distribution::new(vec![], vec![]), Err(Error::Shape(..))));
	/// assert!(matches!(Distribution::new(vec![1.0], vec![0.5, 0.5]), Err(Error::Cast(..))));
	/// # Ok::<(), Error>(())
	/// ```
	pub fn new(values: Vec<f64>, probabilities: Vec<f64>) -> Result<Self, Error> {
		if values.len() != probabilities.len() {
			return Err(Error::Cast("rows have differing lengths"));
		}
		if values.is_empty() {
			return Err(Error::Shape("a row has no elements"));
		}
		if values.iter().chain(&probabilities).any(|x| !x.is_finite()) {
			return Err(Error::Cast("contains a non-finite number"));
		}

		Ok(Self { values, probabilities })
	}

	/// Creates a distribution with a single value that occurs with certainty.
	#[must_use]
	pub fn point(value: f64) -> Self {
		Self {
			values: vec![value],
			probabilities: vec![1.0],
		}
	}

	/// Creates a uniform distribution over the faces `1..=sides` of a single die.
	pub(crate) fn uniform_die(sides: u32) -> Self {
		let prob = 1.0 / f64::from(sides);
		Self {
			values: (1..=sides).map(f64::from).collect(),
			probabilities: vec![prob; sides as usize],
		}
	}

	/// Creates a distribution from rows that are already known to be well-formed.
	pub(crate) const fn from_rows_unchecked(values: Vec<f64>, probabilities: Vec<f64>) -> Self {
		Self { values, probabilities }
	}

	/// Gets the outcome values.
	#[must_use]
	#[inline]
	pub fn values(&self) -> &[f64] {
		&self.values
	}

	/// Gets the probabilities, in the same order as the values.
	#[must_use]
	#[inline]
	pub fn probabilities(&self) -> &[f64] {
		&self.probabilities
	}

	/// Gets the number of outcomes N (the distribution is of size 2xN).
	#[must_use]
	#[inline]
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Always `false`; a distribution has at least one outcome.
	#[must_use]
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Iterates over `(value, probability)` pairs in stored order.
	pub fn iter(&self) -> impl ExactSizeIterator<Item = (f64, f64)> + '_ {
		self.values.iter().copied().zip(self.probabilities.iter().copied())
	}

	/// Sum of all probabilities.
	#[must_use]
	pub fn total(&self) -> f64 {
		self.probabilities.iter().sum()
	}

	/// Smallest value.
	#[must_use]
	pub fn min_value(&self) -> f64 {
		self.values.iter().copied().fold(f64::INFINITY, f64::min)
	}

	/// Largest value.
	#[must_use]
	pub fn max_value(&self) -> f64 {
		self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
	}

	/// Splits the distribution into its value and probability rows.
	#[must_use]
	pub fn into_rows(self) -> (Vec<f64>, Vec<f64>) {
		(self.values, self.probabilities)
	}
}

/// Capability of exposing a distribution, used to accept PMF-like objects as operands.
///
/// The distribution is always copied out of the accessor, never aliased.
pub trait AsDistribution {
	/// Gets the distribution.
	fn distribution(&self) -> &Distribution;

	/// Gets the object's own tolerance, if it has one. Validation prefers it over any fallback tolerance.
	fn tolerance(&self) -> Option<f64> {
		None
	}

	/// Gets whether the object represents a truncated unbounded distribution.
	fn boundedness(&self) -> Boundedness {
		Boundedness::Finite
	}
}

impl AsDistribution for Distribution {
	#[inline]
	fn distribution(&self) -> &Distribution {
		self
	}
}

/// An operand in any of the shapes a distribution can be described with, before normalization.
///
/// Every public operation accepts `impl Into<Source>`, so plain numbers, arrays of rows, and other PMFs can all be
/// passed directly.
///
/// # Examples
/// ```
/// use diestat::pmf::{normalize, Source};
///
/// // A bare scalar becomes a one-point distribution
/// let dist = normalize(Source::from(7))?;
/// assert_eq!(dist.values(), &[7.0]);
/// assert_eq!(dist.probabilities(), &[1.0]);
///
/// // Two rows of values and probabilities
/// let dist = normalize([[1.0, 2.0], [0.25, 0.75]])?;
/// assert_eq!(dist.len(), 2);
/// # Ok::<(), diestat::pmf::Error>(())
/// ```
#[derive(Clone)]
#[non_exhaustive]
pub enum Source<'a> {
	/// No distribution at all
	Absent,

	/// Single number
	Scalar(f64),

	/// One-dimensional row of numbers
	Flat(Cow<'a, [f64]>),

	/// Rows of numbers; a valid distribution has exactly two: values, then probabilities
	Rows(Cow<'a, [Vec<f64>]>),

	/// Object exposing its own distribution
	Accessor(&'a dyn AsDistribution),
}

impl Source<'_> {
	/// Counts how many numbers the source holds in total, regardless of shape.
	#[must_use]
	pub fn size(&self) -> usize {
		match self {
			Self::Absent => 0,
			Self::Scalar(..) => 1,
			Self::Flat(row) => row.len(),
			Self::Rows(rows) => rows.iter().map(Vec::len).sum(),
			Self::Accessor(acc) => acc.distribution().len().saturating_mul(2),
		}
	}

	/// Gets every number the source holds, flattened in row order.
	pub(crate) fn flatten(&self) -> Vec<f64> {
		match self {
			Self::Absent => Vec::new(),
			Self::Scalar(x) => vec![*x],
			Self::Flat(row) => row.to_vec(),
			Self::Rows(rows) => rows.iter().flatten().copied().collect(),
			Self::Accessor(acc) => {
				let dist = acc.distribution();
				dist.values().iter().chain(dist.probabilities()).copied().collect()
			}
		}
	}

	/// Gets the tolerance the source carries itself, if any.
	#[must_use]
	pub fn own_tolerance(&self) -> Option<f64> {
		match self {
			Self::Accessor(acc) => acc.tolerance(),
			_ => None,
		}
	}

	/// Gets the boundedness the source carries itself. Anything other than an accessor is finite.
	#[must_use]
	pub fn boundedness(&self) -> Boundedness {
		match self {
			Self::Accessor(acc) => acc.boundedness(),
			_ => Boundedness::Finite,
		}
	}
}

impl fmt::Debug for Source<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Absent => f.write_str("Absent"),
			Self::Scalar(x) => f.debug_tuple("Scalar").field(x).finish(),
			Self::Flat(row) => f.debug_tuple("Flat").field(row).finish(),
			Self::Rows(rows) => f.debug_tuple("Rows").field(rows).finish(),
			Self::Accessor(acc) => f.debug_tuple("Accessor").field(acc.distribution()).finish(),
		}
	}
}

impl From<f64> for Source<'_> {
	#[inline]
	fn from(value: f64) -> Self {
		Self::Scalar(value)
	}
}

impl From<i32> for Source<'_> {
	#[inline]
	fn from(value: i32) -> Self {
		Self::Scalar(f64::from(value))
	}
}

impl From<u32> for Source<'_> {
	#[inline]
	fn from(value: u32) -> Self {
		Self::Scalar(f64::from(value))
	}
}

impl<'a> From<&'a [f64]> for Source<'a> {
	#[inline]
	fn from(row: &'a [f64]) -> Self {
		Self::Flat(Cow::Borrowed(row))
	}
}

impl From<Vec<f64>> for Source<'_> {
	#[inline]
	fn from(row: Vec<f64>) -> Self {
		Self::Flat(Cow::Owned(row))
	}
}

impl<const N: usize> From<[f64; N]> for Source<'_> {
	#[inline]
	fn from(row: [f64; N]) -> Self {
		Self::Flat(Cow::Owned(row.to_vec()))
	}
}

impl<'a> From<&'a [Vec<f64>]> for Source<'a> {
	#[inline]
	fn from(rows: &'a [Vec<f64>]) -> Self {
		Self::Rows(Cow::Borrowed(rows))
	}
}

impl From<Vec<Vec<f64>>> for Source<'_> {
	#[inline]
	fn from(rows: Vec<Vec<f64>>) -> Self {
		Self::Rows(Cow::Owned(rows))
	}
}

impl<const N: usize, const R: usize> From<[[f64; N]; R]> for Source<'_> {
	#[inline]
	fn from(rows: [[f64; N]; R]) -> Self {
		Self::Rows(Cow::Owned(rows.iter().map(|row| row.to_vec()).collect()))
	}
}

impl From<(Vec<f64>, Vec<f64>)> for Source<'_> {
	#[inline]
	fn from((values, probabilities): (Vec<f64>, Vec<f64>)) -> Self {
		Self::Rows(Cow::Owned(vec![values, probabilities]))
	}
}

impl<'a> From<&'a Distribution> for Source<'a> {
	#[inline]
	fn from(dist: &'a Distribution) -> Self {
		Self::Accessor(dist)
	}
}

impl From<Distribution> for Source<'_> {
	#[inline]
	fn from(dist: Distribution) -> Self {
		let (values, probabilities) = dist.into_rows();
		Self::Rows(Cow::Owned(vec![values, probabilities]))
	}
}

impl<'a, T: Into<Source<'a>>> From<Option<T>> for Source<'a> {
	#[inline]
	fn from(source: Option<T>) -> Self {
		source.map_or(Self::Absent, Into::into)
	}
}

/// Coerces any source into the canonical two-row structure. Does not check the probability total.
///
/// Anything holding exactly one number becomes a one-point distribution of that value with probability 1.
///
/// # Errors
/// - [`Error::NullDistribution`] for [`Source::Absent`]
/// - [`Error::Shape`] when there aren't exactly two rows or a row is empty
/// - [`Error::Cast`] for ragged rows or non-finite numbers
pub fn normalize<'a>(source: impl Into<Source<'a>>) -> Result<Distribution, Error> {
	let source = source.into();

	if source.size() == 1 {
		let value = source.flatten().first().copied().ok_or(Error::Cast("unable to read single value"))?;
		if !value.is_finite() {
			return Err(Error::Cast("contains a non-finite number"));
		}
		return Ok(Distribution::point(value));
	}

	match source {
		Source::Absent => Err(Error::NullDistribution),
		Source::Scalar(..) => Err(Error::Cast("unable to read single value")),
		Source::Flat(..) => Err(Error::Shape("input is one-dimensional")),
		Source::Rows(rows) => match &*rows {
			[values, probabilities] => {
				if values.is_empty() || probabilities.is_empty() {
					return Err(Error::Shape("a row has no elements"));
				}
				Distribution::new(values.clone(), probabilities.clone())
			}
			_ => Err(Error::Shape("input does not have exactly two rows")),
		},
		Source::Accessor(acc) => Ok(acc.distribution().clone()),
	}
}

/// Checks that probabilities sum to 1 within a tolerance.
///
/// # Errors
/// If the total differs from 1 by more than `tolerance` (or cannot be computed), [`Error::Sum`] is returned.
pub fn check_sum(probabilities: &[f64], tolerance: f64) -> Result<(), Error> {
	let total: f64 = probabilities.iter().sum();
	let within = (1.0 - total).abs() <= tolerance;
	if within {
		Ok(())
	} else {
		Err(Error::Sum { total, tolerance })
	}
}

/// Normalizes a source and checks its probability total.
///
/// The tolerance used is the source's *own* tolerance if it carries one (see [`AsDistribution::tolerance`]),
/// otherwise `fallback`.
///
/// # Errors
/// Any error from [`normalize`] or [`check_sum`].
///
/// # Examples
/// ```
/// use diestat::pmf::{validate, Error};
///
/// let bad = validate([[1.0, 2.0, 3.0, 4.0], [0.25, 0.25, 0.25, 0.26]], 1e-5);
/// assert!(matches!(bad, Err(Error::Sum { .. })));
///
/// let good = validate([[1.0, 2.0, 3.0, 4.0], [0.25, 0.25, 0.25, 0.25]], 1e-5)?;
/// assert_eq!(good.len(), 4);
/// # Ok::<(), Error>(())
/// ```
pub fn validate<'a>(source: impl Into<Source<'a>>, fallback: f64) -> Result<Distribution, Error> {
	let source = source.into();
	let tolerance = source.own_tolerance().unwrap_or(fallback);
	let dist = normalize(source)?;
	check_sum(dist.probabilities(), tolerance)?;
	Ok(dist)
}
