use crate::combinatorics::{combination, factorial, permutation};

#[test]
fn factorial_known_values() {
	assert_eq!(factorial(0), 1.0);
	assert_eq!(factorial(1), 1.0);
	assert_eq!(factorial(5), 120.0);
	assert_eq!(factorial(13), 6_227_020_800.0);
}

#[test]
fn factorial_overflows_to_infinity() {
	assert!(factorial(170).is_finite());
	assert!(factorial(171).is_infinite());
}

#[test]
fn permutation_known_values() {
	assert_eq!(permutation(16, 3), 3360.0);
	assert_eq!(permutation(5, 5), 120.0);
	assert_eq!(permutation(5, 0), 1.0);
}

#[test]
fn permutation_of_more_than_available() {
	assert_eq!(permutation(3, 4), 0.0);
	assert_eq!(combination(3, 4), 0.0);
}

#[test]
fn combination_known_values() {
	assert_eq!(combination(16, 3), 560.0);
	assert_eq!(combination(16, 13), 560.0);
	assert_eq!(combination(10, 5), 252.0);
	assert_eq!(combination(7, 0), 1.0);
}
