use approx::assert_abs_diff_eq;

use crate::{
	dice::Kind,
	expr::Describe,
	pmf::{Boundedness, Description, Error},
	Config, Dice, Pmf,
};

const D4: [[f64; 4]; 2] = [[1.0, 2.0, 3.0, 4.0], [0.25, 0.25, 0.25, 0.25]];

#[test]
fn literal_accepted() {
	let pmf = Pmf::new(D4).unwrap();
	assert_eq!(pmf.values(), &[1.0, 2.0, 3.0, 4.0]);
	assert_eq!(pmf.probabilities(), &[0.25, 0.25, 0.25, 0.25]);
	assert_eq!(pmf.tolerance(), Config::DEFAULT_TOLERANCE);
	assert_eq!(pmf.boundedness(), Boundedness::Finite);
}

#[test]
fn bad_total_rejected() {
	let result = Pmf::new([[1.0, 2.0, 3.0, 4.0], [0.25, 0.25, 0.25, 0.26]]);
	match result {
		Err(Error::Sum { total, tolerance }) => {
			assert_abs_diff_eq!(total, 1.01, epsilon = 1e-12);
			assert_eq!(tolerance, Config::DEFAULT_TOLERANCE);
		}
		other => panic!("expected a sum error, got {other:?}"),
	}
}

#[test]
fn total_within_tolerance_accepted() {
	let loose = [[1.0, 2.0], [0.5, 0.500_001]];
	assert!(Pmf::new(loose).is_ok());

	let strict = Config::builder().tolerance(1e-7).build();
	assert!(matches!(Pmf::with_config(loose, strict), Err(Error::Sum { .. })));
}

#[test]
fn single_row_rejected() {
	let result = Pmf::new(vec![vec![0.1; 10]]);
	assert!(matches!(result, Err(Error::Shape(..))));
}

#[test]
fn flat_row_rejected() {
	let result = Pmf::new(vec![0.1; 10]);
	assert!(matches!(result, Err(Error::Shape(..))));
}

#[test]
fn three_rows_rejected() {
	let result = Pmf::new([[1.0, 2.0], [0.5, 0.5], [0.5, 0.5]]);
	assert!(matches!(result, Err(Error::Shape(..))));
}

#[test]
fn empty_rows_rejected() {
	let result = Pmf::new(vec![Vec::<f64>::new(), Vec::new()]);
	assert!(matches!(result, Err(Error::Shape(..))));
}

#[test]
fn ragged_rows_rejected() {
	let result = Pmf::new(vec![vec![1.0, 2.0], vec![1.0]]);
	assert!(matches!(result, Err(Error::Cast(..))));
}

#[test]
fn non_finite_rejected() {
	assert!(matches!(Pmf::new(f64::NAN), Err(Error::Cast(..))));
	assert!(matches!(Pmf::new([[1.0, f64::INFINITY], [0.5, 0.5]]), Err(Error::Cast(..))));
}

#[test]
fn absent_rejected() {
	assert_eq!(Pmf::new(None::<f64>), Err(Error::NullDistribution));
}

#[test]
fn scalar_becomes_point() {
	let pmf = Pmf::new(42).unwrap();
	assert_eq!(pmf.len(), 1);
	assert_eq!(pmf.get(0), Some((42.0, 1.0)));
	assert_eq!(pmf.get(1), None);

	let pmf = Pmf::new(vec![-3.0]).unwrap();
	assert_eq!(pmf.get(0), Some((-3.0, 1.0)));
}

#[test]
fn invalid_dice_rejected() {
	assert_eq!(Pmf::sum_of(0, 6), Err(Error::InvalidDice(Dice::new(0, 6))));
	assert_eq!(Pmf::highest_of(3, 0), Err(Error::InvalidDice(Dice::new_highest(3, 0))));
}

#[test]
fn expected_values() {
	assert_abs_diff_eq!(Pmf::sum_of(1, 6).unwrap().expected_value(), 3.5, epsilon = 1e-9);
	assert_abs_diff_eq!(Pmf::sum_of(1, 12).unwrap().expected_value(), 6.5, epsilon = 1e-9);
	assert_abs_diff_eq!(Pmf::sum_of(4, 4).unwrap().expected_value(), 10.0, epsilon = 1e-9);
}

#[test]
fn variance_of_d6() {
	let d6 = Pmf::sum_of(1, 6).unwrap();
	assert_abs_diff_eq!(d6.variance(), 35.0 / 12.0, epsilon = 1e-9);
	assert_abs_diff_eq!(d6.moment(0), 1.0, epsilon = 1e-12);
	assert_abs_diff_eq!(d6.moment(2), 91.0 / 6.0, epsilon = 1e-9);
}

#[test]
fn two_d6_paths_agree() {
	let expected = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0].map(|ways| ways / 36.0);
	let values = (2..=12).map(f64::from).collect::<Vec<_>>();
	let literal = Pmf::new((values.clone(), expected.to_vec())).unwrap();

	let direct = Pmf::sum_of(2, 6).unwrap();
	let d6 = Pmf::sum_of(1, 6).unwrap();
	let added = d6.convolve(&d6).unwrap();

	for pmf in [&direct, &added] {
		assert_eq!(pmf.values(), values.as_slice());
		for (actual, expected) in pmf.probabilities().iter().zip(literal.probabilities()) {
			assert_abs_diff_eq!(*actual, *expected, epsilon = 1e-12);
		}
	}
}

#[test]
fn convolve_with_scalar_shifts() {
	let d4 = Pmf::new(D4).unwrap();
	let shifted = d4.convolve(-1).unwrap();
	assert_eq!(shifted.values(), &[0.0, 1.0, 2.0, 3.0]);
	assert_eq!(shifted.probabilities(), d4.probabilities());
}

#[test]
fn convolve_adopts_looser_tolerance() {
	let loose = Pmf::with_config(D4, Config::builder().tolerance(1e-3).build()).unwrap();
	let strict = Pmf::with_config(D4, Config::builder().tolerance(1e-9).build()).unwrap();
	assert_eq!(strict.convolve(&loose).unwrap().tolerance(), 1e-3);
	assert_eq!(loose.convolve(&strict).unwrap().tolerance(), 1e-3);
}

#[test]
fn operand_validated_at_own_tolerance() {
	let off = Pmf::with_config([[1.0, 2.0], [0.5, 0.5001]], Config::builder().tolerance(1e-3).build()).unwrap();
	let strict = Pmf::with_config(D4, Config::builder().tolerance(1e-9).build()).unwrap();

	// The operand carries its own looser tolerance, so it passes
	assert!(strict.convolve(&off).is_ok());

	// The same numbers without a tolerance of their own fall back to the strict one
	assert!(matches!(strict.convolve([[1.0, 2.0], [0.5, 0.5001]]), Err(Error::Sum { .. })));
}

#[test]
fn unbounded_propagates() {
	let exploding = Pmf::exploding(1, 6).unwrap();
	let d4 = Pmf::new(D4).unwrap();

	assert_eq!(exploding.boundedness(), Config::default().unbounded());
	assert_eq!(d4.convolve(&exploding).unwrap().boundedness(), Config::default().unbounded());
	assert_eq!(exploding.take_highest(&d4).unwrap().boundedness(), Config::default().unbounded());
	assert_eq!(d4.convolve(&d4).unwrap().boundedness(), Boundedness::Finite);
}

#[test]
fn describe_lists_pairs() {
	let pmf = Pmf::new(D4).unwrap();
	assert_eq!(pmf.to_string(), "pmf[1: 0.25, 2: 0.25, 3: 0.25, 4: 0.25]");
	assert_eq!(pmf.describe(Some(3)), "pmf[1: 0.25, 2: 0.25, 3: 0.25, 1 more...]");
	assert_eq!(Pmf::sum_of(1, 2).unwrap().to_string(), "1d2[1: 0.5, 2: 0.5]");
}

#[test]
fn describe_truncated_previews_limit() {
	let pmf = Pmf::exploding(1, 6).unwrap();
	assert_eq!(pmf.len(), 42);

	let description = pmf.describe(None);
	assert!(description.starts_with("1e6[1: "));
	assert!(description.ends_with(", 2 more...]"));
	assert_eq!(description.matches(": ").count(), Config::DEFAULT_PREVIEW_LIMIT);

	// An explicit limit doesn't override the preview limit
	assert_eq!(pmf.describe(Some(5)), description);
}

#[test]
fn preview_limit_configurable() {
	let config = Config::builder().preview_limit(3).build();
	let pmf = Pmf::from_dice(Dice::new_exploding(1, 6), config).unwrap();
	assert!(pmf.describe(None).ends_with(", 39 more...]"));
}

#[test]
fn with_tolerance_regenerates() {
	let coarse = Pmf::exploding(1, 6).unwrap();
	let fine = coarse.with_tolerance(1e-9).unwrap();

	assert_eq!(coarse.len(), 42);
	assert_eq!(fine.len(), 72);
	assert_eq!(fine.tolerance(), 1e-9);
	assert_eq!(coarse.tolerance(), Config::DEFAULT_TOLERANCE);
	assert_eq!(fine.description(), coarse.description());
	assert_abs_diff_eq!(fine.distribution().total(), 1.0, epsilon = 1e-9);
}

#[test]
fn with_tolerance_revalidates_literal() {
	let pmf = Pmf::new([[1.0, 2.0], [0.5, 0.500_001]]).unwrap();
	assert!(matches!(pmf.with_tolerance(1e-8), Err(Error::Sum { .. })));
	assert!(pmf.with_tolerance(1e-3).is_ok());
}

#[test]
fn generate_reads_pair_as_dice() {
	let pmf = Pmf::generate([2.0, 6.0], Kind::Sum, Config::default()).unwrap();
	assert_eq!(pmf.description(), &Description::Dice(Dice::new(2, 6)));
	assert_eq!(pmf.len(), 11);

	let pmf = Pmf::generate([3.0, 4.0], Kind::Highest, Config::default()).unwrap();
	assert_eq!(pmf.description(), &Description::Dice(Dice::new_highest(3, 4)));

	let pmf = Pmf::generate([1.0, 6.0], Kind::Exploding, Config::default()).unwrap();
	assert_eq!(pmf.boundedness(), Config::default().unbounded());
}

#[test]
fn generate_reads_two_number_rows_as_dice() {
	// Exactly two numbers are always dice parameters, even when shaped like a distribution
	let pmf = Pmf::generate([[3.0], [1.0]], Kind::Sum, Config::default()).unwrap();
	assert_eq!(pmf.description(), &Description::Dice(Dice::new(3, 1)));
	assert_eq!(pmf.values(), &[3.0]);
}

#[test]
fn generate_keeps_literals() {
	let pmf = Pmf::generate(D4, Kind::Exploding, Config::default()).unwrap();
	assert!(matches!(pmf.description(), Description::Literal(..)));
	assert_eq!(pmf.values(), &[1.0, 2.0, 3.0, 4.0]);

	let d6 = Pmf::sum_of(1, 6).unwrap();
	let copy = Pmf::generate(&d6, Kind::Sum, Config::default()).unwrap();
	assert_eq!(copy.distribution(), d6.distribution());
	assert!(matches!(copy.description(), Description::Literal(..)));
}

#[test]
fn generate_rejects_non_dice_pairs() {
	let result = Pmf::generate([2.0, 0.5], Kind::Sum, Config::default());
	assert!(matches!(result, Err(Error::Shape(..))));
}
