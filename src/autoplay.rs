use crate::board::{Board, SwapResult, SIZE};
use crate::error::Error;
use rand::Rng;

/// Shuffles a decoy board while no game is running.
///
/// The decoy is cosmetic: it carries no wordlist, so no row ever counts
/// as solved, and it is independent of the real session's board. One
/// [`step`](Autoplay::step) per timer tick keeps the tiles drifting.
#[derive(Debug, Clone)]
pub struct Autoplay {
    board: Board,
}

impl Autoplay {
    pub fn new(board: Board) -> Autoplay {
        Autoplay { board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Perform one random adjacent swap: a random tile moves along a
    /// random axis, pushed inward at the edges so the move always lands
    /// on the grid.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<SwapResult, Error> {
        let index = rng.gen_range(0..self.board.tiles().len());
        let tile = self.board.tiles()[index];
        let last_row = (self.board.rows() - 1) as u8;
        let last_col = (SIZE - 1) as u8;
        let (dx, dy) = if rng.gen::<bool>() {
            let dx = if tile.col == last_col {
                -1
            } else if tile.col > 0 && rng.gen::<bool>() {
                -1
            } else {
                1
            };
            (dx, 0)
        } else {
            let dy = if tile.row == last_row {
                -1
            } else if tile.row > 0 && rng.gen::<bool>() {
                -1
            } else {
                1
            };
            (0, dy)
        };
        self.board.swap(index, dx, dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::scrambled;
    use crate::tiles::parse_letters;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_steps_always_land_on_the_grid() {
        let letters = parse_letters("crnaeslatebreadghostquilt").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let board = Board::from_tiles(scrambled(&letters, &mut rng)).unwrap();
        let mut autoplay = Autoplay::new(board);
        for _ in 0..500 {
            let result = autoplay.step(&mut rng).unwrap();
            assert!(result.solved.is_empty());
        }
        let cells: HashSet<(u8, u8)> = autoplay
            .board()
            .tiles()
            .iter()
            .map(|t| (t.row, t.col))
            .collect();
        assert_eq!(cells.len(), autoplay.board().tiles().len());
    }
}
