//! Daily puzzle keying and the countdown to the next one.
//!
//! Puzzles are keyed by plain UTC calendar date; the countdown targets
//! the next 05:00 UTC, matching the published game.

use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Hour (UTC) at which the next daily puzzle is announced.
pub const ROLLOVER_HOUR: u32 = 5;

/// The calendar date keying the current puzzle.
pub fn puzzle_date(now: DateTime<Utc>) -> NaiveDate {
    now.date_naive()
}

/// The moment tomorrow's puzzle is announced: tomorrow at
/// [`ROLLOVER_HOUR`] UTC.
pub fn next_rollover(now: DateTime<Utc>) -> DateTime<Utc> {
    let tomorrow = now.date_naive() + Duration::days(1);
    // 05:00:00 is a valid time of day, unwrap can not fail
    tomorrow.and_hms_opt(ROLLOVER_HOUR, 0, 0).unwrap().and_utc()
}

/// Time remaining until the next puzzle is announced.
pub fn until_next_puzzle(now: DateTime<Utc>) -> Duration {
    next_rollover(now) - now
}

/// The countdown as shown under the start button: whole minutes up to an
/// hour, whole hours beyond that, both rounded up.
pub fn countdown_text(remaining: Duration) -> String {
    let minutes = (remaining.num_seconds() + 59) / 60;
    if minutes <= 60 {
        format!("{} minutes", minutes)
    } else {
        format!("{} hours", (minutes + 59) / 60)
    }
}
