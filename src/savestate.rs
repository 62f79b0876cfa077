use crate::stats::History;
use crate::tiles::Tile;

/// Everything the persistence layer stores between visits, mirroring the
/// browser build's local-storage keys. Plain data: the board is restored
/// and re-validated through [`Session::resume`](crate::Session::resume).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaveState {
    /// ISO date the tiles belong to.
    pub date: String,
    /// Snapshot of the 25 puzzle tiles.
    pub tiles: Vec<Tile>,
    /// Elapsed play time in seconds.
    pub elapsed: u32,
    /// Outcomes of all days played so far.
    pub history: History,
}
