use chumsky::Parser;

use crate::{
	dice::Kind,
	expr::Expr,
	parse::{dice as dice_parser, Error},
	Config, Dice,
};

#[test]
fn dice_notation() {
	let parser = dice_parser();
	assert_eq!(parser.parse("d20").into_output(), Some(Dice::new(1, 20)));
	assert_eq!(parser.parse("2d6").into_output(), Some(Dice::new(2, 6)));
	assert_eq!(parser.parse("3e10").into_output(), Some(Dice::new_exploding(3, 10)));
	assert_eq!(parser.parse("4h8").into_output(), Some(Dice::new_highest(4, 8)));
}

#[test]
fn dice_from_str_ignores_case() {
	assert_eq!("2D6".parse::<Dice>(), Ok(Dice::new(2, 6)));
	assert_eq!("1E6".parse::<Dice>().map(|dice| dice.kind), Ok(Kind::Exploding));
}

#[test]
fn bad_dice_rejected() {
	for input in ["0d6", "2d0", "2x6", "d", "2d", "2d6 + 1"] {
		assert!(input.parse::<Dice>().is_err(), "{input} parsed as dice");
	}
}

#[test]
fn error_details() {
	let err: Error = "2d0".parse::<Dice>().unwrap_err();
	assert!(err.details.contains("at least one"));
}

#[test]
fn sum_binds_tighter_than_highest() {
	let expr: Expr = "1 + 2 | 3 + 4".parse().unwrap();
	assert_eq!(
		expr,
		Expr::Highest(
			Box::new(Expr::Add(Box::new(Expr::Num(1)), Box::new(Expr::Num(2)))),
			Box::new(Expr::Add(Box::new(Expr::Num(3)), Box::new(Expr::Num(4)))),
		)
	);
}

#[test]
fn parentheses_group() {
	let expr: Expr = "(1d6 | 3) + 2".parse().unwrap();
	assert_eq!(
		expr,
		Expr::Add(
			Box::new(Expr::Highest(
				Box::new(Expr::Dice(Dice::new(1, 6))),
				Box::new(Expr::Num(3))
			)),
			Box::new(Expr::Num(2)),
		)
	);
}

#[test]
fn operators_fold_left() {
	let expr: Expr = "1d4+1d6+1d8".parse().unwrap();
	assert_eq!(
		expr,
		Expr::Add(
			Box::new(Expr::Add(
				Box::new(Expr::Dice(Dice::new(1, 4))),
				Box::new(Expr::Dice(Dice::new(1, 6)))
			)),
			Box::new(Expr::Dice(Dice::new(1, 8))),
		)
	);
}

#[test]
fn description_reparses() {
	for input in ["(1d6 | 3) + 2e4", "1d6 + 3 | 2h4", "d20", "((2d6))", "1 + (2 + 3)", "1d4 | (2 | (1d6 | 3))"] {
		let expr: Expr = input.parse().unwrap();
		let reparsed: Expr = expr.to_string().parse().unwrap();
		assert_eq!(reparsed, expr);
	}
}

#[test]
fn incomplete_expressions_rejected() {
	for input in ["", "2d6 +", "| 3", "(1d6", "1d6)", "2d6 - 1"] {
		assert!(input.parse::<Expr>().is_err(), "{input:?} parsed as an expression");
	}
}

#[test]
fn parsed_expression_evaluates() {
	let expr: Expr = "2d6 + 1 | 1d12".parse().unwrap();
	let pmf = expr.eval(&Config::default()).unwrap();
	assert_eq!(pmf.values().first(), Some(&1.0));
	assert_eq!(pmf.values().last(), Some(&13.0));
	assert!((pmf.distribution().total() - 1.0).abs() < 1e-9);
}
