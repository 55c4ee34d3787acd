//! Dice parameters that describe generated distributions, and the means of sampling from them.
//!
//! A [`Dice`] is only a description (`XdY`, `XeY`, or `XhY`). Turning one into probabilities is the job of
//! [`Pmf::from_dice`].
//!
//! [`Pmf::from_dice`]: crate::pmf::Pmf::from_dice

pub mod sampler;

use core::fmt;

pub use self::sampler::Sampler;

/// A set of one or more dice with a specific number of sides, along with how their faces are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_structs)]
pub struct Dice {
	/// Number of dice to roll
	pub count: u32,

	/// Number of sides for each die
	pub sides: u32,

	/// How the faces of the dice are combined into a single outcome
	pub kind: Kind,
}

impl Dice {
	/// Creates a new set of dice with a given count and number of sides whose faces are summed.
	#[must_use]
	pub const fn new(count: u32, sides: u32) -> Self {
		Self::with_kind(count, sides, Kind::Sum)
	}

	/// Creates a new set of exploding dice with a given count and number of sides.
	#[must_use]
	pub const fn new_exploding(count: u32, sides: u32) -> Self {
		Self::with_kind(count, sides, Kind::Exploding)
	}

	/// Creates a new set of dice with a given count and number of sides where only the highest face counts.
	#[must_use]
	pub const fn new_highest(count: u32, sides: u32) -> Self {
		Self::with_kind(count, sides, Kind::Highest)
	}

	/// Creates a new set of dice with a given count, number of sides, and kind.
	#[must_use]
	pub const fn with_kind(count: u32, sides: u32, kind: Kind) -> Self {
		Self { count, sides, kind }
	}

	/// Checks whether the dice can generate a distribution at all (at least one die with at least one side).
	#[must_use]
	#[inline]
	pub const fn is_valid(&self) -> bool {
		self.count > 0 && self.sides > 0
	}

	/// Creates a new dice builder.
	#[must_use]
	#[inline]
	pub fn builder() -> Builder {
		Builder::default()
	}
}

impl Default for Dice {
	/// Creates the default dice (1d20).
	#[inline]
	fn default() -> Self {
		Self::new(1, 20)
	}
}

impl fmt::Display for Dice {
	/// Formats the dice in `XdY`, `XeY`, or `XhY` notation.
	///
	/// # Examples
	/// ```
	/// use diestat::Dice;
	///
	/// assert_eq!(Dice::new(2, 6).to_string(), "2d6");
	/// assert_eq!(Dice::new_exploding(3, 10).to_string(), "3e10");
	/// assert_eq!(Dice::new_highest(4, 8).to_string(), "4h8");
	/// ```
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}{}{}", self.count, self.kind.symbol(), self.sides)
	}
}

/// The way the faces of several dice are combined into one outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[expect(clippy::exhaustive_enums, reason = "Each kind has its own generator")]
pub enum Kind {
	/// All faces are added together (`d`).
	#[default]
	Sum,

	/// All faces are added together, and any die showing its maximum face is rolled again and added (`e`).
	/// The resulting distribution has an unbounded support that gets truncated to a tolerance.
	Exploding,

	/// Only the highest face shown counts (`h`).
	Highest,
}

impl Kind {
	/// Gets the notation letter for this kind.
	#[must_use]
	pub const fn symbol(self) -> char {
		match self {
			Self::Sum => 'd',
			Self::Exploding => 'e',
			Self::Highest => 'h',
		}
	}

	/// Gets the kind matching a notation letter, if any.
	///
	/// # Examples
	/// ```
	/// use diestat::dice::Kind;
	///
	/// assert_eq!(Kind::from_symbol('e'), Some(Kind::Exploding));
	/// assert_eq!(Kind::from_symbol('x'), None);
	/// ```
	#[must_use]
	pub const fn from_symbol(symbol: char) -> Option<Self> {
		match symbol {
			'd' => Some(Self::Sum),
			'e' => Some(Self::Exploding),
			'h' => Some(Self::Highest),
			_ => None,
		}
	}
}

/// Builds [`Dice`] with a fluent interface.
///
/// # Examples
/// ```
/// use diestat::{dice::Kind, Dice};
///
/// let dice = Dice::builder().count(3).sides(6).kind(Kind::Exploding).build();
/// assert_eq!(dice, Dice::new_exploding(3, 6));
///
/// let dice = Dice::builder().count(2).sides(20).highest().build();
/// assert_eq!(dice.to_string(), "2h20");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Builder(Dice);

impl Builder {
	/// Sets the number of dice to roll.
	#[must_use]
	pub const fn count(mut self, count: u32) -> Self {
		self.0.count = count;
		self
	}

	/// Sets the number of sides per die.
	#[must_use]
	pub const fn sides(mut self, sides: u32) -> Self {
		self.0.sides = sides;
		self
	}

	/// Sets how the faces are combined.
	#[must_use]
	pub const fn kind(mut self, kind: Kind) -> Self {
		self.0.kind = kind;
		self
	}

	/// Makes the dice explode on their maximum face.
	#[must_use]
	pub const fn exploding(self) -> Self {
		self.kind(Kind::Exploding)
	}

	/// Makes only the highest face count.
	#[must_use]
	pub const fn highest(self) -> Self {
		self.kind(Kind::Highest)
	}

	/// Finalizes the dice.
	#[must_use]
	pub const fn build(self) -> Dice {
		self.0
	}
}
