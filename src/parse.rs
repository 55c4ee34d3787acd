//! Parser generators for dice notation and distribution expressions, using [chumsky].
//! Requires the `parse` feature (enabled by default).

use alloc::{
	boxed::Box,
	format,
	string::{String, ToString},
	vec::Vec,
};
use core::str;

use chumsky::prelude::*;

use crate::{
	dice::{Dice, Kind},
	expr::Expr,
};

/// Generates a parser that specifically handles dice terms like "d20", "2d6", "3e6", "4h8", etc.
///
/// # Examples
/// ```
/// use chumsky::Parser;
/// use diestat::{parse::dice_part, Dice};
///
/// let dice = dice_part().parse("3e6").into_output();
/// assert_eq!(dice, Some(Dice::new_exploding(3, 6)));
/// ```
pub fn dice_part<'src>() -> impl Parser<'src, &'src str, Dice, extra::Err<Rich<'src, char>>> + Clone {
	let kind = choice((
		just('d').to(Kind::Sum),
		just('e').to(Kind::Exploding),
		just('h').to(Kind::Highest),
	));

	text::int(10)
		.or_not()
		.then(kind)
		.then(text::int(10))
		.try_map(|((count, kind), sides): ((Option<&str>, Kind), &str), span| {
			let count = count
				.unwrap_or("1")
				.parse()
				.map_err(|err| Rich::custom(span, format!("Dice count: {err}")))?;
			let sides = sides
				.parse()
				.map_err(|err| Rich::custom(span, format!("Dice sides: {err}")))?;

			let dice = Dice::with_kind(count, sides, kind);
			if dice.is_valid() {
				Ok(dice)
			} else {
				Err(Rich::custom(span, "Dice need at least one die and one side"))
			}
		})
}

/// Generates a parser that specifically handles dice terms like "d20", "2d6", "3e6", "4h8", etc.
/// and expects end of input
pub fn dice<'src>() -> impl Parser<'src, &'src str, Dice, extra::Err<Rich<'src, char>>> + Clone {
	dice_part().then_ignore(end())
}

/// Generates a parser that handles full expressions: dice terms, integers, sums (`+`), take-highest (`|`, binding
/// more loosely than `+`), and grouping with parentheses.
///
/// # Examples
/// ```
/// use chumsky::Parser;
/// use diestat::{expr::Expr, parse::expr_part, Dice};
///
/// let expr = expr_part().parse("2d6 + 1 | 1d12").into_output();
/// assert_eq!(
/// 	expr,
/// 	Some(Expr::Highest(
/// 		Box::new(Expr::Add(Box::new(Expr::Dice(Dice::new(2, 6))), Box::new(Expr::Num(1)))),
/// 		Box::new(Expr::Dice(Dice::new(1, 12))),
/// 	))
/// );
/// ```
pub fn expr_part<'src>() -> impl Parser<'src, &'src str, Expr, extra::Err<Rich<'src, char>>> + Clone {
	// Helper function for operators
	let op = |c| just(c).padded();

	recursive(|expr| {
		// Parser for numbers
		let int = text::int(10).try_map(|s: &str, span| {
			s.parse()
				.map(Expr::Num)
				.map_err(|err| Rich::custom(span, format!("{err}")))
		});

		// Parser for dice literals
		let dice = dice_part().map(Expr::Dice);

		// Parser for expressions enclosed in parentheses
		let atom = dice.or(int).or(expr.delimited_by(just('('), just(')'))).padded();

		// Parser for sums
		let sum = atom.clone().foldl(op('+').ignore_then(atom).repeated(), |lhs, rhs| {
			Expr::Add(Box::new(lhs), Box::new(rhs))
		});

		// Parser for take-highest
		sum.clone().foldl(op('|').ignore_then(sum).repeated(), |lhs, rhs| {
			Expr::Highest(Box::new(lhs), Box::new(rhs))
		})
	})
}

/// Generates a parser that handles full expressions and expects end of input
pub fn expr<'src>() -> impl Parser<'src, &'src str, Expr, extra::Err<Rich<'src, char>>> + Clone {
	expr_part().then_ignore(end())
}

/// Error that can occur while parsing a string into dice or an expression via [`str::parse()`]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{details}")]
#[non_exhaustive]
pub struct Error {
	/// Details of every problem the parser ran into
	pub details: String,
}

impl Error {
	/// Joins a set of parser errors into a single error.
	fn from_rich(errs: &[Rich<'_, char>]) -> Self {
		Self {
			details: errs.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "),
		}
	}
}

impl str::FromStr for Dice {
	type Err = Error;

	/// Parses dice notation, ignoring case.
	///
	/// # Examples
	/// ```
	/// use diestat::Dice;
	///
	/// assert_eq!("2D6".parse::<Dice>(), Ok(Dice::new(2, 6)));
	/// assert!("0d6".parse::<Dice>().is_err());
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let lc = s.to_lowercase();
		let result = dice().parse(&lc).into_result().map_err(|errs| Error::from_rich(&errs));
		result
	}
}

impl str::FromStr for Expr {
	type Err = Error;

	/// Parses a full expression, ignoring case.
	///
	/// # Examples
	/// ```
	/// use diestat::{expr::Expr, Config};
	///
	/// let expr: Expr = "1d6 + 1d6".parse()?;
	/// let pmf = expr.eval(&Config::default())?;
	/// assert_eq!(pmf.len(), 11);
	/// # Ok::<(), Box<dyn std::error::Error>>(())
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let lc = s.to_lowercase();
		let result = expr().parse(&lc).into_result().map_err(|errs| Error::from_rich(&errs));
		result
	}
}
