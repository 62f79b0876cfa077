//! Basic types for working with wordier tiles.
mod letter;
mod tile;

use crate::error::Error;
use tinyvec::ArrayVec;

pub use letter::Letter;
pub use tile::Tile;

/// The five letters of a row, in column order.
pub type Word = ArrayVec<[Letter; 5]>;

/// Parse a string into letters. Fails on anything that is not a
/// lowercase ascii letter.
pub(crate) fn parse_letters(s: &str) -> Result<Vec<Letter>, Error> {
    use std::convert::TryFrom;
    s.chars().map(Letter::try_from).collect()
}
