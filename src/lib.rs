//! The board engine behind the daily word game "Wordier".
//! <br>
//! A puzzle is a 5x5 grid of letter tiles. The player slides tiles one
//! cell at a time, and the day is won when all five rows read as
//! dictionary words at once. This crate owns the board model, word
//! checking, swap rules and solved-row bookkeeping, plus the session
//! layer around it: the clock, pause handling, the optional move cap,
//! per-day history, daily puzzle selection, stats and the idle-animation
//! decoy board. Rendering, gestures and storage I/O stay outside.
//!
//! # How to use `wordier_engine`
//! Build a [`Wordlist`], get a [`Board`] for today from a [`Puzzles`]
//! calendar (or restore one from a [`SaveState`]), wrap it in a
//! [`Session`] and route swap gestures through it.
//!
//! # Basic usage
//! ```
//! # use wordier_engine::{Board, Error};
//! let mut board = Board::tutorial().with_wordlist_from_words(&["shape", "snore"])?;
//! // slide the 'd' of "shdpe" down one row
//! let result = board.swap(2, 0, 1)?;
//! assert!(result.solved.contains(0));
//! assert_eq!(board.to_string(), "shape\nordre");
//! # Ok::<(), Error>(())
//! ```
mod autoplay;
mod board;
pub mod daily;
mod error;
mod puzzle;
mod rowset;
mod savestate;
mod session;
mod stats;
mod tiles;
mod wordlist;

pub use crate::autoplay::Autoplay;
pub use crate::board::{Board, SwapResult, SIZE, TILE_COUNT};
pub use crate::error::Error;
pub use crate::puzzle::{scrambled, Puzzles};
pub use crate::rowset::RowSet;
pub use crate::savestate::SaveState;
pub use crate::session::{Phase, Session, SessionConfig, SwapReport};
pub use crate::stats::{format_clock, share_message, History, Stats};
pub use crate::tiles::{Letter, Tile, Word};
pub use crate::wordlist::{Wordlist, WORD_LEN};
