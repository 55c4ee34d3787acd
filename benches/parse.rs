#![feature(test)]

extern crate test;

use chumsky::Parser;
use diestat::expr::Expr;
use test::Bencher;

const LONG_EXPR: &str = "(4d8 + 2e10 | 3h12 + 7) + (1d20 + 1d20 | 2d10 + (5 | 1d4)) + 10d6 + 4 | 2e6 + 2e6 + 100";

#[bench]
fn parse_basic(b: &mut Bencher) {
	let parser = diestat::parser();
	b.iter(|| parser.parse("4d8 + 4").unwrap());
}

#[bench]
fn parse_complex(b: &mut Bencher) {
	let parser = diestat::parser();
	b.iter(|| parser.parse("4e8 + 2d10 | (3h6 + 6)").unwrap());
}

#[bench]
fn parse_long(b: &mut Bencher) {
	let parser = diestat::parser();
	b.iter(|| parser.parse(LONG_EXPR).unwrap())
}

#[bench]
fn parser_creation(b: &mut Bencher) {
	b.iter(diestat::parser);
}

#[bench]
fn fromstr_basic(b: &mut Bencher) {
	b.iter(|| "4d8 + 4".parse::<Expr>().unwrap());
}

#[bench]
fn fromstr_complex(b: &mut Bencher) {
	b.iter(|| "4e8 + 2d10 | (3h6 + 6)".parse::<Expr>().unwrap());
}

#[bench]
fn fromstr_long(b: &mut Bencher) {
	b.iter(|| LONG_EXPR.parse::<Expr>().unwrap())
}
