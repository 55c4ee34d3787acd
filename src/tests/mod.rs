mod combinatorics;
mod dice;
#[cfg(feature = "parse")]
mod parse;
mod pmf;
