use crate::board::{Board, SIZE, TILE_COUNT};
use crate::error::Error;
use crate::tiles::{parse_letters, Letter, Tile};
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use std::fs::read_to_string;

/// How many letters of the real puzzle seed the decoy layout.
const DECOY_SEED: usize = 10;

/// A calendar of daily puzzles: 25 letters, row-major, per date.
#[derive(Debug, Clone, Default)]
pub struct Puzzles {
    entries: HashMap<NaiveDate, Vec<Letter>>,
}

impl Puzzles {
    /// Read the calendar from a file with one `YYYY-MM-DD <25 letters>`
    /// entry per line. Blank lines and lines starting with `#` are
    /// skipped.
    /// ## Errors
    /// If the file can not be read or an entry can not be parsed.
    pub fn from_file(path: &str) -> Result<Puzzles, Error> {
        let text = read_to_string(path).map_err(|source| Error::ReadError {
            path: String::from(path),
            source,
        })?;
        let mut entries = HashMap::new();
        for line in text.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next(), parts.next()) {
                (Some(date), Some(letters), None) => {
                    let (date, letters) = Self::parse_entry(date, letters)?;
                    entries.insert(date, letters);
                }
                _ => return Err(Error::PuzzleParse(String::from(line))),
            }
        }
        Ok(Puzzles { entries })
    }

    /// Build a calendar from `(date, letters)` pairs.
    /// ## Errors
    /// If a date or letter sequence can not be parsed.
    /// ## Examples
    /// ```
    /// # use wordier_engine::{Puzzles, Error};
    /// let puzzles = Puzzles::from_pairs(&[
    ///     ("2024-05-01", "crnaeslatebreadghostquilt"),
    /// ])?;
    /// assert_eq!(puzzles.len(), 1);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Puzzles, Error> {
        let mut entries = HashMap::new();
        for &(date, letters) in pairs {
            let (date, letters) = Self::parse_entry(date, letters)?;
            entries.insert(date, letters);
        }
        Ok(Puzzles { entries })
    }

    fn parse_entry(date: &str, letters: &str) -> Result<(NaiveDate, Vec<Letter>), Error> {
        let date = date
            .parse::<NaiveDate>()
            .map_err(|_| Error::PuzzleParse(String::from(date)))?;
        let letters = parse_letters(letters)?;
        if letters.len() != TILE_COUNT {
            return Err(Error::PuzzleParse(format!(
                "{}: {} letters, expect {}",
                date,
                letters.len(),
                TILE_COUNT
            )));
        }
        Ok((date, letters))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The raw letters for a date, row-major, if that date has a puzzle.
    pub fn letters_for(&self, date: NaiveDate) -> Option<&[Letter]> {
        self.entries.get(&date).map(Vec::as_slice)
    }

    /// A fresh board for a date: letter `i` goes to row `i / 5`,
    /// col `i % 5`. No wordlist attached yet.
    pub fn board_for(&self, date: NaiveDate) -> Option<Board> {
        self.letters_for(date).map(|letters| {
            let tiles = tiles_row_major(letters);
            // positions are generated row-major, validation can not fail
            Board::from_tiles(tiles).unwrap()
        })
    }
}

/// Lay letters out on the grid in row-major order.
fn tiles_row_major(letters: &[Letter]) -> Vec<Tile> {
    letters
        .iter()
        .enumerate()
        .map(|(i, &value)| Tile::new(value, (i / SIZE) as u8, (i % SIZE) as u8))
        .collect()
}

/// The decoy layout shuffled during the idle animation: cell positions
/// are dealt out at random, the first [`DECOY_SEED`] tiles keep letters
/// of the real puzzle and the rest draw random letters. Never shown a
/// wordlist, never part of the real session.
pub fn scrambled<R: Rng + ?Sized>(letters: &[Letter], rng: &mut R) -> Vec<Tile> {
    let mut cells: Vec<(u8, u8)> = (0..TILE_COUNT)
        .map(|i| ((i / SIZE) as u8, (i % SIZE) as u8))
        .collect();
    cells.shuffle(rng);
    cells
        .into_iter()
        .enumerate()
        .map(|(i, (row, col))| {
            let value = if i < DECOY_SEED && i < letters.len() {
                letters[i]
            } else {
                Letter::nth(rng.gen_range(0..Letter::COUNT))
            };
            Tile::new(value, row, col)
        })
        .collect()
}
