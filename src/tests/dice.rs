use crate::dice::{Dice, Kind};

#[test]
fn display_notation() {
	assert_eq!(Dice::new(2, 6).to_string(), "2d6");
	assert_eq!(Dice::new_exploding(1, 10).to_string(), "1e10");
	assert_eq!(Dice::new_highest(3, 20).to_string(), "3h20");
}

#[test]
fn default_is_d20() {
	assert_eq!(Dice::default(), Dice::new(1, 20));
}

#[test]
fn builder_kinds() {
	let dice = Dice::builder().count(4).sides(8).build();
	assert_eq!(dice, Dice::new(4, 8));

	let dice = Dice::builder().count(4).sides(8).exploding().build();
	assert_eq!(dice.kind, Kind::Exploding);

	let dice = Dice::builder().count(4).sides(8).exploding().highest().build();
	assert_eq!(dice.kind, Kind::Highest);
}

#[test]
fn validity() {
	assert!(Dice::new(1, 1).is_valid());
	assert!(!Dice::new(0, 6).is_valid());
	assert!(!Dice::new_exploding(2, 0).is_valid());
}

#[test]
fn kind_symbols() {
	for kind in [Kind::Sum, Kind::Exploding, Kind::Highest] {
		assert_eq!(Kind::from_symbol(kind.symbol()), Some(kind));
	}
	assert_eq!(Kind::from_symbol('x'), None);
}
