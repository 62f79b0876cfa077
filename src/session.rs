use crate::board::{Board, SwapResult};
use crate::error::Error;
use crate::savestate::SaveState;
use crate::stats::{History, Stats};
use crate::wordlist::Wordlist;

/// Session policy knobs that varied between game builds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// End the day as failed after this many moves without a full solve.
    /// `None` lets play continue indefinitely.
    pub move_cap: Option<u32>,
}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed but not started; the clock is not running.
    Ready,
    /// Accepting moves, clock ticking.
    Running,
    /// Clock stopped, moves ignored; resumable.
    Paused,
    /// Every row reads as a word. Terminal.
    Solved,
    /// The move cap was reached without a full solve. Terminal.
    Failed,
}

/// A swap routed through the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapReport {
    pub swap: SwapResult,
    /// Set when this move ended the day.
    pub finished: Option<Phase>,
}

/// One day of play: the board plus the clock, move counter and history
/// bookkeeping that the surrounding UI drives.
///
/// The session is an explicit value owned by the caller; the engine
/// keeps no global state. All methods are synchronous, the caller is
/// expected to call [`tick`](Session::tick) once per second while a
/// game is on screen and to pause on visibility changes.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    date: String,
    elapsed: u32,
    moves: u32,
    phase: Phase,
    history: History,
    config: SessionConfig,
}

impl Session {
    /// Start a fresh session for `date` on the given board.
    pub fn new(board: Board, date: &str, history: History, config: SessionConfig) -> Session {
        let phase = if history.is_solved(date) {
            Phase::Solved
        } else {
            Phase::Ready
        };
        Session {
            board,
            date: String::from(date),
            elapsed: 0,
            moves: 0,
            phase,
            history,
            config,
        }
    }

    /// Restore a session from a persisted snapshot, re-validating the
    /// tiles into a board.
    /// ## Errors
    /// If the snapshot's tiles are not a valid board. Callers should
    /// fall back to a fresh puzzle in that case.
    pub fn resume(
        save: SaveState,
        wordlist: Wordlist,
        config: SessionConfig,
    ) -> Result<Session, Error> {
        let board = Board::from_tiles(save.tiles)?.with_wordlist(wordlist);
        let mut session = Session::new(board, &save.date, save.history, config);
        session.elapsed = save.elapsed;
        Ok(session)
    }

    /// Begin play: the day is marked attempted and moves are accepted.
    /// Does nothing unless the session is [`Phase::Ready`].
    pub fn start(&mut self) {
        if self.phase == Phase::Ready {
            self.phase = Phase::Running;
            self.history.mark_attempted(&self.date);
        }
    }

    /// Advance the clock by one second. Only ticks while running.
    pub fn tick(&mut self) {
        if self.phase == Phase::Running {
            self.elapsed += 1;
        }
    }

    /// Stop the clock, e.g. when the tab is hidden or a dialog opens.
    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
        }
    }

    /// Restart the clock after a pause.
    pub fn resume_clock(&mut self) {
        if self.phase == Phase::Paused {
            self.phase = Phase::Running;
        }
    }

    /// Route a swap gesture to the board. Returns `Ok(None)` when the
    /// session is not accepting moves (not started, paused or finished),
    /// matching the input handler's guard in the game.
    ///
    /// A full solve records today's time in the history; reaching the
    /// move cap ends the day as failed, leaving the history entry at the
    /// attempted/unresolved sentinel.
    /// ## Errors
    /// Board errors pass through; see [`Board::swap`]. The gesture
    /// should simply be ignored.
    pub fn swap(&mut self, index: usize, dx: i8, dy: i8) -> Result<Option<SwapReport>, Error> {
        if self.phase != Phase::Running {
            return Ok(None);
        }
        let swap = self.board.swap(index, dx, dy)?;
        self.moves += 1;
        let finished = if swap.complete {
            self.phase = Phase::Solved;
            self.history.record_solve(&self.date, self.elapsed);
            Some(Phase::Solved)
        } else if self.config.move_cap.map_or(false, |cap| self.moves >= cap) {
            self.phase = Phase::Failed;
            Some(Phase::Failed)
        } else {
            None
        };
        Ok(Some(SwapReport { swap, finished }))
    }

    /// Snapshot for the persistence layer.
    pub fn save_state(&self) -> SaveState {
        SaveState {
            date: self.date.clone(),
            tiles: self.board.snapshot(),
            elapsed: self.elapsed,
            history: self.history.clone(),
        }
    }

    /// Aggregate figures for the stats dialog.
    pub fn stats(&self) -> Stats {
        Stats::for_date(&self.history, &self.date)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}
