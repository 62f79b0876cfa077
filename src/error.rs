use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading a wordfile or puzzle calendar
    #[error("File \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Character is not a lowercase ascii letter
    #[error("Invalid letter '{0}'")]
    InvalidLetter(char),

    /// A dictionary word needs exactly 5 letters
    #[error("Invalid word \"{0}\": length {1}, expect 5")]
    InvalidWordLength(String, usize),

    /// Error parsing board state from strings
    #[error("Invalid number of rows {0} (expect 5)")]
    InvalidRowCount(usize),

    /// Parsing a row on the board needs 5 letters
    #[error("Invalid row \"{0}\": length {1}, expect 5")]
    InvalidRowLength(String, usize),

    /// A daily puzzle board needs 25 tiles
    #[error("Invalid number of tiles {0} (expect 25)")]
    InvalidTileCount(usize),

    /// Two tiles claim the same cell, or a tile lies outside the grid
    #[error("Conflicting tile position row:{row}, col:{col}")]
    PositionConflict { row: u8, col: u8 },

    /// Tile index outside the board
    #[error("No tile with index {0}")]
    NoSuchTile(usize),

    /// Requested swap is not a single orthogonal step
    #[error("Invalid swap direction dx:{dx}, dy:{dy}")]
    InvalidDirection { dx: i8, dy: i8 },

    /// Swap destination has no tile
    #[error("No tile at row:{row}, col:{col}")]
    OutOfBounds { row: i8, col: i8 },

    /// Error parsing a puzzle calendar entry
    #[error("Invalid puzzle entry \"{0}\"")]
    PuzzleParse(String),
}
