//! Abstractions for drawing the uniform integers that [`Pmf::sample`] maps onto a distribution.
//!
//! [`Pmf::sample`]: crate::pmf::Pmf::sample

use core::iter::Peekable;

#[cfg(feature = "fastrand")]
use fastrand::Rng;

/// Draws uniformly distributed integers - the only source of randomness when sampling.
pub trait Sampler {
	/// Draws an integer uniformly from `1..=resolution`. `resolution` is always at least 1.
	#[must_use]
	fn draw(&mut self, resolution: u64) -> u64;
}

/// Draws integers using [fastrand]. Requires the `fastrand` feature (enabled by default).
///
/// # Examples
///
/// ## Default fastrand sampler
/// ```
/// use diestat::{dice::sampler::FastRand, Pmf};
///
/// let d6 = Pmf::sum_of(1, 6)?;
/// let mut sampler = FastRand::default();
/// let value = d6.sample(&mut sampler);
/// assert!((1.0..=6.0).contains(&value));
/// # Ok::<(), diestat::pmf::Error>(())
/// ```
///
/// ## Manually seeded fastrand sampler
/// ```
/// use diestat::{dice::sampler::FastRand, Pmf};
///
/// let d6 = Pmf::sum_of(1, 6)?;
/// let first = d6.sample(&mut FastRand::with_seed(0x750c38d574400));
/// let second = d6.sample(&mut FastRand::with_seed(0x750c38d574400));
/// assert_eq!(first, second);
/// # Ok::<(), diestat::pmf::Error>(())
/// ```
#[cfg(feature = "fastrand")]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "std", derive(Default))]
pub struct FastRand(Rng);

#[cfg(feature = "fastrand")]
impl FastRand {
	/// Creates a new fastrand sampler that uses the given RNG instance to draw.
	#[must_use]
	#[inline]
	pub const fn new(rng: Rng) -> Self {
		Self(rng)
	}

	/// Creates a new fastrand sampler that uses a pre-seeded RNG instance to draw.
	#[must_use]
	#[inline]
	pub fn with_seed(seed: u64) -> Self {
		Self(Rng::with_seed(seed))
	}
}

#[cfg(feature = "fastrand")]
impl Sampler for FastRand {
	#[inline]
	fn draw(&mut self, resolution: u64) -> u64 {
		self.0.u64(1..=resolution.max(1))
	}
}

/// Always draws one specific integer, clamped into `1..=resolution`.
///
/// # Examples
/// ```
/// use diestat::{dice::sampler::Val as ValSampler, Pmf};
///
/// // A uniform d4 samples at a resolution of 16, so a draw of 16 lands on the last face
/// let d4 = Pmf::sum_of(1, 4)?;
/// assert_eq!(d4.resolution(), 16);
/// assert_eq!(d4.sample(&mut ValSampler(16)), 4.0);
/// assert_eq!(d4.sample(&mut ValSampler(1)), 1.0);
/// # Ok::<(), diestat::pmf::Error>(())
/// ```
#[derive(Debug, Default, Clone)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Val(pub u64);

impl Sampler for Val {
	#[inline]
	fn draw(&mut self, resolution: u64) -> u64 {
		self.0.clamp(1, resolution.max(1))
	}
}

/// Draws integers from an iterator of values. Mainly useful for testing purposes.
///
/// # Examples
/// ```
/// use diestat::{dice::sampler::Iter as IterSampler, Pmf};
///
/// let d4 = Pmf::sum_of(1, 4)?;
/// let mut sampler = IterSampler::new([4, 5, 12, 13]);
/// let values: Vec<_> = (0..4).map(|_| d4.sample(&mut sampler)).collect();
/// assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0]);
/// # Ok::<(), diestat::pmf::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Iter<I: Iterator<Item = u64>>(Peekable<I>);

impl<I: Iterator<Item = u64>> Iter<I> {
	/// Checks whether the iterator still has values available.
	#[inline]
	pub fn can_draw(&mut self) -> bool {
		self.0.peek().is_some()
	}

	/// Creates a new sampler that uses the given iterator to provide draws.
	#[must_use]
	#[inline]
	pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
		Self(iter.into_iter().peekable())
	}
}

impl<I: Iterator<Item = u64>> Sampler for Iter<I> {
	/// Draws the next value from the iterator, clamped into `1..=resolution`.
	///
	/// # Panics
	/// If the iterator has finished, this will panic.
	#[inline]
	#[expect(
		clippy::expect_used,
		reason = "Mostly for testing, otherwise manual checking of can_draw() is expected"
	)]
	fn draw(&mut self, resolution: u64) -> u64 {
		self.0.next().expect("iterator is finished").clamp(1, resolution.max(1))
	}
}
