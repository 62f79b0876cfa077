use crate::error::Error;
use crate::rowset::RowSet;
use crate::tiles::{parse_letters, Letter, Tile, Word};
use crate::wordlist::Wordlist;
use std::fmt;

/// Rows and columns of the daily puzzle board.
pub const SIZE: usize = 5;
/// Tiles on the daily puzzle board.
pub const TILE_COUNT: usize = SIZE * SIZE;

/// The two practice rows shown in the how-to-play dialog.
const TUTORIAL_ROWS: &[&str] = &["shdpe", "orare"];

/// Represents the state of a wordier board.
/// * `rows` x 5 lettered tiles, each occupying exactly one grid cell,
/// * the wordlist used to validate row words,
/// * the set of rows currently reading as a word.
///
/// The daily puzzle board is 5x5; the tutorial board from
/// [`Board::tutorial`] has 2 rows. Every cell holds exactly one tile at
/// all times, and swaps only ever exchange the positions of two tiles,
/// so the cell-to-tile mapping stays a bijection.
#[derive(Debug, Clone)]
pub struct Board {
    tiles: Vec<Tile>,
    rows: usize,
    solved: RowSet,
    wordlist: Wordlist,
}

/// The outcome of a single tile swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapResult {
    /// Index of the tile that was moved.
    pub source: usize,
    /// Index of the tile it changed places with.
    pub target: usize,
    /// Rows whose word changed with this swap: one row for a horizontal
    /// swap, the two involved rows for a vertical swap.
    pub affected: RowSet,
    /// Rows that became solved.
    pub solved_now: RowSet,
    /// Rows that became unsolved.
    pub unsolved_now: RowSet,
    /// All currently solved rows.
    pub solved: RowSet,
    /// True when every row on the board reads as a word.
    pub complete: bool,
}

/// Display the board as one line of letters per row.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = (0..self.rows as u8)
            .map(|row| self.row_word(row).iter().map(|l| l.as_char()).collect())
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", repr)
    }
}

impl Board {
    /// Create a board from 5 strings of 5 letters each, row 0 first.
    /// The wordlist starts empty, so no row is solved; see the
    /// `with_wordlist` builders.
    /// ## Errors
    /// If the row count or a row length is off, or a character is not a
    /// lowercase ascii letter.
    /// ## Examples
    /// ```
    /// # use wordier_engine::{Board, Error};
    /// let board = Board::from_rows(&["crnae", "slate", "bread", "ghost", "quilt"])?;
    /// assert_eq!(board.rows(), 5);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Board, Error> {
        if rows.len() != SIZE {
            return Err(Error::InvalidRowCount(rows.len()));
        }
        Self::from_row_strings(rows)
    }

    /// Create a board from a plain tile snapshot, the restore path for
    /// persisted state. Tile order is kept: index `i` in `tiles` stays
    /// index `i` on the board.
    /// ## Errors
    /// If `tiles` is not a 25-element bijection onto the 5x5 grid.
    pub fn from_tiles(tiles: Vec<Tile>) -> Result<Board, Error> {
        if tiles.len() != TILE_COUNT {
            return Err(Error::InvalidTileCount(tiles.len()));
        }
        Self::validate(&tiles, SIZE)?;
        Ok(Self::from_parts(tiles, SIZE))
    }

    /// The fixed two-row practice board, rows `shdpe` and `orare`.
    /// Sliding the `d` down turns row 0 into `shape`.
    pub fn tutorial() -> Board {
        // the tutorial rows are static and valid, parsing can not fail
        Self::from_row_strings(TUTORIAL_ROWS).unwrap()
    }

    fn from_row_strings(rows: &[&str]) -> Result<Board, Error> {
        let mut tiles = Vec::with_capacity(rows.len() * SIZE);
        for (row, s) in rows.iter().enumerate() {
            let letters = parse_letters(s)?;
            if letters.len() != SIZE {
                return Err(Error::InvalidRowLength(String::from(*s), letters.len()));
            }
            for (col, &value) in letters.iter().enumerate() {
                tiles.push(Tile::new(value, row as u8, col as u8));
            }
        }
        Ok(Self::from_parts(tiles, rows.len()))
    }

    fn from_parts(tiles: Vec<Tile>, rows: usize) -> Board {
        Board {
            tiles,
            rows,
            solved: RowSet::new(),
            wordlist: Wordlist::default(),
        }
    }

    /// Check that every cell of the `rows` x 5 grid is claimed by exactly
    /// one tile. Tile count is already known to match, so it suffices
    /// that no two tiles collide and none lies outside the grid.
    fn validate(tiles: &[Tile], rows: usize) -> Result<(), Error> {
        let mut seen = 0u32;
        for tile in tiles {
            let (row, col) = (tile.row as usize, tile.col as usize);
            if row >= rows || col >= SIZE {
                return Err(Error::PositionConflict {
                    row: tile.row,
                    col: tile.col,
                });
            }
            let bit = 1u32 << (row * SIZE + col);
            if seen & bit != 0 {
                return Err(Error::PositionConflict {
                    row: tile.row,
                    col: tile.col,
                });
            }
            seen |= bit;
        }
        Ok(())
    }

    /// Attach a wordlist and return the modified board.
    /// Re-evaluates all rows, establishing the initial solved set.
    pub fn with_wordlist(mut self, wordlist: Wordlist) -> Board {
        self.wordlist = wordlist;
        self.solved = self.check_all();
        self
    }

    /// Specify the wordlist by a list of words, and return the modified
    /// board.
    /// ## Errors
    /// If a word can not be encoded.
    /// ## Examples
    /// ```
    /// # use wordier_engine::{Board, Error};
    /// let board = Board::tutorial().with_wordlist_from_words(&["shape", "snore"])?;
    /// assert!(board.solved().is_empty());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_wordlist_from_words(self, words: &[&str]) -> Result<Board, Error> {
        Ok(self.with_wordlist(Wordlist::from_words(words)?))
    }

    /// Specify the wordlist by reading it from `wordfile`, and return the
    /// modified board.
    /// ## Errors
    /// If the wordfile does not exist or cannot be encoded.
    pub fn with_wordlist_from_file(self, wordfile: &str) -> Result<Board, Error> {
        Ok(self.with_wordlist(Wordlist::from_file(wordfile)?))
    }

    /// Number of rows on this board: 5, or 2 for the tutorial board.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The tiles in index order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// A plain copy of the tiles for the persistence layer.
    /// [`Board::from_tiles`] accepts it back.
    pub fn snapshot(&self) -> Vec<Tile> {
        self.tiles.clone()
    }

    /// Return reference to our wordlist.
    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    /// The rows currently reading as a word.
    pub fn solved(&self) -> RowSet {
        self.solved
    }

    /// True when every row reads as a word: the terminal state.
    pub fn is_complete(&self) -> bool {
        self.solved.len() == self.rows
    }

    /// The tile at a cell, or None outside the grid.
    pub fn tile_at(&self, row: u8, col: u8) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.row == row && t.col == col)
    }

    /// The letters of `row` read in column order 0..4.
    pub fn row_word(&self, row: u8) -> Word {
        let mut word = Word::from_array_len([Letter::default(); SIZE], SIZE);
        for tile in &self.tiles {
            if tile.row == row {
                word[tile.col as usize] = tile.value;
            }
        }
        word
    }

    /// Re-evaluate the given rows against the wordlist without touching
    /// board state. Used for the initial render and after a restore.
    pub fn check_rows(&self, rows: RowSet) -> RowSet {
        let mut solved = RowSet::new();
        for row in rows.iter() {
            if self.wordlist.is_word(&self.row_word(row)) {
                solved.insert(row);
            }
        }
        solved
    }

    /// Re-evaluate every row. See [`Board::check_rows`].
    pub fn check_all(&self) -> RowSet {
        self.check_rows(RowSet::all(self.rows))
    }

    /// Slide the tile at `index` one cell, exchanging places with the
    /// tile at `(row + dy, col + dx)`. Letters stay at their indices;
    /// only the two positions swap. The affected rows are re-checked and
    /// the solved set updated.
    ///
    /// All failures leave the board unchanged.
    /// ## Errors
    /// - [`Error::NoSuchTile`] if `index` is outside the board.
    /// - [`Error::InvalidDirection`] if `(dx, dy)` is not a single
    ///   orthogonal step.
    /// - [`Error::OutOfBounds`] if no tile occupies the destination cell.
    /// ## Examples
    /// ```
    /// # use wordier_engine::{Board, Error};
    /// let mut board = Board::tutorial().with_wordlist_from_words(&["shape", "snore"])?;
    /// let result = board.swap(2, 0, 1)?;
    /// assert!(result.solved_now.contains(0));
    /// assert_eq!(board.to_string(), "shape\nordre");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn swap(&mut self, index: usize, dx: i8, dy: i8) -> Result<SwapResult, Error> {
        if index >= self.tiles.len() {
            return Err(Error::NoSuchTile(index));
        }
        match (dx, dy) {
            (1, 0) | (-1, 0) | (0, 1) | (0, -1) => {}
            _ => return Err(Error::InvalidDirection { dx, dy }),
        }
        let source = self.tiles[index];
        let row = source.row as i8 + dy;
        let col = source.col as i8 + dx;
        let target = self
            .tiles
            .iter()
            .position(|t| t.is_at(row, col))
            .ok_or(Error::OutOfBounds { row, col })?;

        self.tiles[index].row = row as u8;
        self.tiles[index].col = col as u8;
        self.tiles[target].row = source.row;
        self.tiles[target].col = source.col;

        let mut affected = RowSet::new();
        affected.insert(self.tiles[index].row);
        affected.insert(self.tiles[target].row);

        let before = self.solved;
        let checked = self.check_rows(affected);
        for row in affected.iter() {
            if checked.contains(row) {
                self.solved.insert(row);
            } else {
                self.solved.remove(row);
            }
        }

        Ok(SwapResult {
            source: index,
            target,
            affected,
            solved_now: self.solved.difference(before),
            unsolved_now: before.difference(self.solved),
            solved: self.solved,
            complete: self.is_complete(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    type Result<T> = std::result::Result<T, Error>;

    const TEST_WORDS: &[&str] = &["crane", "slate", "bread", "ghost", "quilt", "shape", "snore"];

    // row 0 is "crnae"; swapping cols 2 and 3 makes it "crane"
    const TEST_STATE: &[&str] = &["crnae", "slate", "bread", "ghost", "quilt"];

    fn test_board() -> Board {
        Board::from_rows(TEST_STATE)
            .unwrap()
            .with_wordlist_from_words(TEST_WORDS)
            .unwrap()
    }

    #[test]
    fn test_initial_solved_rows() -> Result<()> {
        let board = test_board();
        assert_eq!(board.solved(), vec![1u8, 2, 3, 4].into_iter().collect());
        assert!(!board.is_complete());
        Ok(())
    }

    #[test]
    fn test_tutorial_example() -> Result<()> {
        // the how-to-play demo: slide the 'd' of "shdpe" down into "orare"
        let mut board = Board::tutorial().with_wordlist_from_words(TEST_WORDS)?;
        assert!(board.solved().is_empty());

        let result = board.swap(2, 0, 1)?;
        assert_eq!(result.target, 7);
        assert_eq!(result.affected, vec![0u8, 1].into_iter().collect());
        assert_eq!(result.solved_now, vec![0u8].into_iter().collect());
        assert!(result.unsolved_now.is_empty());
        assert_eq!(result.solved, vec![0u8].into_iter().collect());
        assert!(!result.complete);
        assert_eq!(board.to_string(), "shape\nordre");
        Ok(())
    }

    #[test]
    fn test_horizontal_swap_completes_board() -> Result<()> {
        let mut board = test_board();
        let result = board.swap(2, 1, 0)?;
        assert_eq!(result.target, 3);
        assert_eq!(result.affected, vec![0u8].into_iter().collect());
        assert_eq!(result.solved_now, vec![0u8].into_iter().collect());
        assert!(result.complete);
        assert!(board.is_complete());
        assert_eq!(board.to_string(), "crane\nslate\nbread\nghost\nquilt");
        Ok(())
    }

    #[test]
    fn test_swap_is_its_own_inverse() -> Result<()> {
        let mut board = test_board();
        let snapshot = board.snapshot();
        board.swap(7, 0, 1)?;
        // the moved tile now occupies the destination cell
        board.swap(7, 0, -1)?;
        assert_eq!(board.snapshot(), snapshot);
        assert_eq!(board.solved(), vec![1u8, 2, 3, 4].into_iter().collect());
        Ok(())
    }

    #[test]
    fn test_unaffected_rows_keep_their_status() -> Result<()> {
        let mut board = test_board();
        // break row 4, then swap within row 0: row 4 must stay unsolved
        board.swap(21, 1, 0)?;
        let result = board.swap(0, 1, 0)?;
        assert_eq!(result.affected, vec![0u8].into_iter().collect());
        assert!(!result.solved.contains(4));
        assert!(result.solved.contains(2));
        Ok(())
    }

    #[test]
    fn test_out_of_bounds_right_edge() {
        let mut board = test_board();
        let snapshot = board.snapshot();
        // index 4 sits at row 0, col 4
        let err = board.swap(4, 1, 0).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { row: 0, col: 5 }));
        assert_eq!(board.snapshot(), snapshot);
    }

    #[test]
    fn test_out_of_bounds_top_edge() {
        let mut board = test_board();
        assert!(matches!(
            board.swap(0, 0, -1),
            Err(Error::OutOfBounds { row: -1, col: 0 })
        ));
    }

    #[test]
    fn test_invalid_direction() {
        let mut board = test_board();
        for &(dx, dy) in &[(1i8, 1i8), (-1, 1), (0, 0), (2, 0), (0, -2)] {
            assert!(matches!(
                board.swap(12, dx, dy),
                Err(Error::InvalidDirection { .. })
            ));
        }
    }

    #[test]
    fn test_no_such_tile() {
        let mut board = test_board();
        assert!(matches!(board.swap(25, 1, 0), Err(Error::NoSuchTile(25))));
    }

    #[test]
    fn test_bijection_preserved() -> Result<()> {
        let mut board = test_board();
        let moves: &[(usize, i8, i8)] = &[
            (0, 1, 0),
            (7, 0, 1),
            (24, -1, 0),
            (24, 0, -1),
            (12, 0, 1),
            (12, 1, 0),
            (0, 0, 1),
        ];
        for &(index, dx, dy) in moves {
            board.swap(index, dx, dy)?;
        }
        let cells: HashSet<(u8, u8)> = board.tiles().iter().map(|t| (t.row, t.col)).collect();
        assert_eq!(cells.len(), TILE_COUNT);
        assert!(cells.iter().all(|&(r, c)| r < 5 && c < 5));
        Ok(())
    }

    #[test]
    fn test_check_rows_does_not_mutate() -> Result<()> {
        let board = test_board();
        let solved = board.solved();
        let checked = board.check_rows(RowSet::all(5));
        assert_eq!(checked, solved);
        assert_eq!(board.solved(), solved);
        Ok(())
    }

    #[test]
    fn test_full_solve_detected_by_check_all() -> Result<()> {
        let board = Board::from_rows(&["crane", "slate", "bread", "ghost", "quilt"])?
            .with_wordlist_from_words(TEST_WORDS)?;
        assert_eq!(board.check_all().len(), 5);
        assert!(board.is_complete());
        Ok(())
    }

    #[test]
    fn test_from_tiles_roundtrip() -> Result<()> {
        let board = test_board();
        let restored = Board::from_tiles(board.snapshot())?
            .with_wordlist_from_words(TEST_WORDS)?;
        assert_eq!(restored.solved(), board.solved());
        assert_eq!(restored.to_string(), board.to_string());
        Ok(())
    }

    #[test]
    #[should_panic(expected = "InvalidTileCount(24)")]
    fn test_from_tiles_wrong_count() {
        let mut tiles = test_board().snapshot();
        tiles.pop();
        Board::from_tiles(tiles).unwrap();
    }

    #[test]
    #[should_panic(expected = "PositionConflict")]
    fn test_from_tiles_duplicate_cell() {
        let mut tiles = test_board().snapshot();
        tiles[3].row = 1;
        tiles[3].col = 1;
        Board::from_tiles(tiles).unwrap();
    }

    #[test]
    #[should_panic(expected = "PositionConflict")]
    fn test_from_tiles_off_grid() {
        let mut tiles = test_board().snapshot();
        tiles[3].row = 7;
        Board::from_tiles(tiles).unwrap();
    }

    #[test]
    #[should_panic(expected = "InvalidRowCount(2)")]
    fn test_from_rows_wrong_count() {
        Board::from_rows(&["crane", "slate"]).unwrap();
    }

    #[test]
    #[should_panic(expected = "InvalidRowLength")]
    fn test_from_rows_wrong_length() {
        Board::from_rows(&["crane", "slate", "bread", "ghost", "quil"]).unwrap();
    }

    #[test]
    fn test_tile_at() {
        let board = test_board();
        assert_eq!(board.tile_at(0, 2).unwrap().value.as_char(), 'n');
        assert!(board.tile_at(5, 0).is_none());
    }
}
