//! Play through one day of Wordier from the command line, the way the
//! browser shell drives the engine.
//!
//! Run with `cargo run --example daily`.

use anyhow::Result;
use wordier_engine::{
    daily, format_clock, share_message, History, Phase, Puzzles, Session, SessionConfig, Wordlist,
};

const WORDS: &[&str] = &["crane", "slate", "bread", "ghost", "quilt"];
const DATE: &str = "2024-05-01";

fn run() -> Result<()> {
    let wordlist = Wordlist::from_words(WORDS)?;
    let puzzles = Puzzles::from_pairs(&[(DATE, "crnaeslatebreadghostquilt")])?;

    let board = puzzles
        .board_for(DATE.parse()?)
        .expect("demo calendar has this date")
        .with_wordlist(wordlist);

    let mut session = Session::new(board, DATE, History::new(), SessionConfig::default());
    session.start();
    println!("{}\n", session.board());

    // a few seconds pass, then the winning drag: slide the 'n' right
    for _ in 0..9 {
        session.tick();
    }
    if let Some(report) = session.swap(2, 1, 0)? {
        println!("{}\n", session.board());
        println!("solved rows: {:?}", report.swap.solved);
        if report.finished == Some(Phase::Solved) {
            println!("solved in {}", format_clock(session.elapsed()));
            println!("{}", share_message(session.elapsed()));
        }
    }

    let stats = session.stats();
    println!(
        "played {} solved {} rate {}%",
        stats.played,
        stats.solved,
        stats.solve_rate().unwrap_or(0)
    );

    let remaining = daily::until_next_puzzle(chrono::Utc::now());
    println!(
        "Next daily puzzle begins in {}",
        daily::countdown_text(remaining)
    );

    // hand the snapshot to whatever storage the shell uses
    let save = session.save_state();
    println!("saving {} tiles for {}", save.tiles.len(), save.date);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}
