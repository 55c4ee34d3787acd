use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use ariadne::{Color, Label, Report, ReportKind, Source};
use chumsky::Parser;
use diestat::{dice::sampler::FastRand, Config};

fn main() -> ExitCode {
	let args = env::args();
	let input = if args.len() > 1 {
		// Obtain the expression by combining all args passed to the executable, so that it can be left unquoted
		// even with spaces. The first argument is ignored since it is typically the name of the executable itself.
		args.skip(1).collect::<Vec<String>>().join(" ")
	} else {
		let mut lines = io::stdin().lines();

		// If there isn't already input available in stdin, display a prompt for it
		if lines.size_hint().1.is_none() {
			print!("Enter dice expression: ");
			let _ = io::stdout().flush();
		}

		// Grab the first line available from stdin
		match lines.next() {
			Some(Ok(line)) => line,
			_ => return ExitCode::FAILURE,
		}
	};
	let input = input.to_lowercase();

	println!("Input: {input}");

	let ast = match diestat::parser().parse(&input).into_result() {
		Ok(ast) => ast,
		Err(errs) => {
			for err in errs {
				let span = err.span().start..err.span().end;
				let _ = Report::build(ReportKind::Error, span.clone())
					.with_message("unable to parse dice expression")
					.with_label(Label::new(span).with_message(err.to_string()).with_color(Color::Red))
					.finish()
					.eprint(Source::from(&input));
			}
			return ExitCode::FAILURE;
		}
	};

	println!("Parsed: {ast}");
	println!("Deterministic: {}", ast.is_deterministic());

	match ast.eval(&Config::default()) {
		Ok(pmf) => {
			println!();
			println!("Distribution: {pmf}");
			println!("Expected value: {}", pmf.expected_value());
			println!("Variance: {}", pmf.variance());
			println!("Sample: {}", pmf.sample(&mut FastRand::default()));
			ExitCode::SUCCESS
		}
		Err(err) => {
			eprintln!("Evaluation error: {err}");
			ExitCode::FAILURE
		}
	}
}
