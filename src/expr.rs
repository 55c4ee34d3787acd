//! AST-like data structures for combining dice distributions into full expressions.

use alloc::{boxed::Box, format, string::String, string::ToString};
use core::fmt;

use crate::{
	dice::Dice,
	pmf::{Config, Error, Pmf},
};

/// Individual elements of a dice distribution expression
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Expr {
	/// Standalone integer (a distribution with a single certain outcome)
	Num(i32),

	/// Dice literal
	Dice(Dice),

	/// Sum of two independent expressions
	Add(Box<Self>, Box<Self>),

	/// Higher of two independent expressions
	Highest(Box<Self>, Box<Self>),
}

impl Expr {
	/// Evaluates the expression into the distribution of its outcome, with all distributions generated using the
	/// given config.
	///
	/// # Errors
	/// If any dice are invalid, or any distribution can't be generated or combined, an error variant is returned.
	///
	/// # Examples
	/// ```
	/// use diestat::{expr::Expr, Config, Dice};
	///
	/// let expr = Expr::Add(Box::new(Expr::Dice(Dice::new(1, 6))), Box::new(Expr::Num(2)));
	/// let pmf = expr.eval(&Config::default())?;
	/// assert_eq!(pmf.values(), &[3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
	/// # Ok::<(), diestat::pmf::Error>(())
	/// ```
	pub fn eval(&self, config: &Config) -> Result<Pmf, Error> {
		match self {
			Self::Num(x) => Pmf::with_config(*x, *config),
			Self::Dice(dice) => Pmf::from_dice(*dice, *config),
			Self::Add(a, b) => a.eval(config)?.convolve(&b.eval(config)?),
			Self::Highest(a, b) => a.eval(config)?.take_highest(&b.eval(config)?),
		}
	}

	/// Checks whether the expression is deterministic (always has the same outcome).
	/// A [`Self::Num`] is always deterministic, a [`Self::Dice`] only when its dice have one side, and binary
	/// expressions when both of their children are.
	#[must_use]
	pub fn is_deterministic(&self) -> bool {
		match self {
			Self::Num(..) => true,
			Self::Dice(dice) => dice.sides == 1,
			Self::Add(a, b) | Self::Highest(a, b) => a.is_deterministic() && b.is_deterministic(),
		}
	}

	/// Describes the expression as an operand of a sum, wrapping it in parentheses if it binds more loosely.
	/// A sum on the right-hand side is wrapped too, since sums group to the left when parsed.
	fn describe_operand(&self, rhs: bool) -> String {
		match self {
			Self::Highest(..) => paren_wrap(self.describe(None)),
			Self::Add(..) if rhs => paren_wrap(self.describe(None)),
			Self::Num(..) | Self::Dice(..) | Self::Add(..) => self.describe(None),
		}
	}

	/// Describes the expression as an operand of a take-highest, wrapping a take-highest on the right-hand side in
	/// parentheses.
	fn describe_highest_operand(&self, rhs: bool) -> String {
		match self {
			Self::Highest(..) if rhs => paren_wrap(self.describe(None)),
			Self::Num(..) | Self::Dice(..) | Self::Add(..) | Self::Highest(..) => self.describe(None),
		}
	}
}

impl Describe for Expr {
	/// Builds a full usable expression string from the expressions. A take-highest operation inside a sum is wrapped in
	/// parentheses, since `|` binds more loosely than `+`, and so is a right-hand operand of the same operator, since
	/// both operators group to the left. All strings output from this result in the exact same expression layout when
	/// re-parsing them.
	///
	/// `list_limit` does not affect the output of this implementation in any way since there are no possible lists of
	/// elements included, so it is always safe to pass `None`.
	///
	/// # Examples
	/// ```
	/// use diestat::{expr::{Describe, Expr}, Dice};
	///
	/// let expr = Expr::Add(
	/// 	Box::new(Expr::Highest(Box::new(Expr::Dice(Dice::new(1, 6))), Box::new(Expr::Num(3)))),
	/// 	Box::new(Expr::Dice(Dice::new_exploding(2, 4))),
	/// );
	/// assert_eq!(expr.describe(None), "(1d6 | 3) + 2e4");
	/// ```
	fn describe(&self, _list_limit: Option<usize>) -> String {
		match self {
			Self::Num(x) => x.to_string(),
			Self::Dice(dice) => dice.to_string(),
			Self::Add(a, b) => format!("{} + {}", a.describe_operand(false), b.describe_operand(true)),
			Self::Highest(a, b) => format!(
				"{} | {}",
				a.describe_highest_operand(false),
				b.describe_highest_operand(true)
			),
		}
	}
}

impl fmt::Display for Expr {
	/// Formats the value using the given formatter. [Read more][core::fmt::Debug::fmt()]
	///
	/// The output of this implementation is equivalent to [`Self::describe(None)`].
	///
	/// [`Self::describe(None)`]: Self::describe()
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.describe(None))
	}
}

/// Trait to allow creation of expanded descriptions with an optional max number of individual listed elements where
/// applicable
pub trait Describe {
	/// Builds a detailed description string. Anything that lists multiple elements (such as the outcomes of a
	/// distribution) should list them all, or ideally up to `list_limit` of them.
	#[must_use]
	fn describe(&self, list_limit: Option<usize>) -> String;
}

/// Wraps a string in parentheses.
#[must_use]
fn paren_wrap(mut text: String) -> String {
	text.insert(0, '(');
	text.push(')');
	text
}
