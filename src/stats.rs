use std::collections::HashMap;

/// Per-date outcomes, keyed by ISO date string.
///
/// A missing key means the day was never attempted, `None` an attempt
/// that is still (or stayed) unresolved, `Some(seconds)` a solve in that
/// time.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct History(HashMap<String, Option<u32>>);

impl History {
    pub fn new() -> History {
        History::default()
    }

    /// Mark a day as attempted. An existing solve is kept.
    pub fn mark_attempted(&mut self, date: &str) {
        self.0.entry(String::from(date)).or_insert(None);
    }

    /// Record a solve for a day.
    pub fn record_solve(&mut self, date: &str, seconds: u32) {
        self.0.insert(String::from(date), Some(seconds));
    }

    /// The solve time for a day, if it was solved.
    pub fn solve_time(&self, date: &str) -> Option<u32> {
        self.0.get(date).copied().flatten()
    }

    pub fn is_solved(&self, date: &str) -> bool {
        self.solve_time(date).is_some()
    }

    pub fn attempted(&self, date: &str) -> bool {
        self.0.contains_key(date)
    }

    /// Days attempted.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn solve_times(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.values().filter_map(|&outcome| outcome)
    }
}

/// Aggregate figures for the stats dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Solve time of the given day, if solved.
    pub today: Option<u32>,
    /// Mean solve time over all solved days, rounded to whole seconds.
    pub average: Option<u32>,
    /// Days solved.
    pub solved: usize,
    /// Days attempted.
    pub played: usize,
}

impl Stats {
    pub fn for_date(history: &History, date: &str) -> Stats {
        let solved = history.solve_times().count();
        let total: u64 = history.solve_times().map(u64::from).sum();
        let average = if solved > 0 {
            Some(((total + solved as u64 / 2) / solved as u64) as u32)
        } else {
            None
        };
        Stats {
            today: history.solve_time(date),
            average,
            solved,
            played: history.len(),
        }
    }

    /// Share of attempted days that ended solved, as a whole percent.
    pub fn solve_rate(&self) -> Option<u32> {
        if self.played == 0 {
            return None;
        }
        let solved = self.solved as u64;
        let played = self.played as u64;
        Some(((solved * 100 + played / 2) / played) as u32)
    }
}

/// Format elapsed seconds like the in-game clock, `m:ss`.
/// ## Examples
/// ```
/// # use wordier_engine::format_clock;
/// assert_eq!(format_clock(75), "1:15");
/// assert_eq!(format_clock(9), "0:09");
/// ```
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// The text offered to the system share sheet after a solve.
pub fn share_message(seconds: u32) -> String {
    format!(
        "I solved today's Wordier puzzle in {}! Can you beat it?",
        format_clock(seconds)
    )
}
