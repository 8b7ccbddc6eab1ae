//! Night window calculus
//!
//! Pure date/time queries behind the night-based analyses. The canonical
//! night window for a calendar date D is [D 00:00, D 06:00). Every answer
//! here is a total function: degenerate input degrades to `false` or `0`
//! rather than erroring, since "no data" and "invalid range" are not
//! distinguished at this layer.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Minute of day at which the night window opens (00:00)
pub const NIGHT_START_MINUTE: u32 = 0;

/// Minute of day at which the night window closes (06:00)
pub const NIGHT_END_MINUTE: u32 = 6 * 60;

pub(crate) const MINUTES_PER_DAY: u32 = 24 * 60;

pub(crate) fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Returns true when the closed interval from `start` to `end` intersects
/// the night window of any
/// calendar date between `start.date()` and `end.date()` inclusive.
///
/// The overlap comparison is inclusive on both ends: a session ending
/// exactly at 00:00 or starting exactly at 06:00 counts as overlapping.
/// The chronotype filter and the sleepless-night counter rely on this
/// boundary behavior.
pub fn overlaps_night_window(start: NaiveDateTime, end: NaiveDateTime) -> bool {
    if end < start {
        return false;
    }

    let mut date = start.date();
    let last = end.date();
    while date <= last {
        let night_start = date.and_time(NaiveTime::MIN);
        let night_end = night_start + Duration::minutes(i64::from(NIGHT_END_MINUTE));

        if end >= night_start && start <= night_end {
            return true;
        }

        date = match date.succ_opt() {
            Some(next) => next,
            None => return false,
        };
    }

    false
}

/// Maps a timestamp to the calendar date its night belongs to.
///
/// A time-of-day strictly before 06:00 is still part of the previous
/// day's night; at or after 06:00 the timestamp belongs to its own date.
/// This is the single source of truth for night bucketing; callers must
/// not re-derive the rule.
pub fn night_date(timestamp: NaiveDateTime) -> NaiveDate {
    let date = timestamp.date();
    if minute_of_day(timestamp.time()) < NIGHT_END_MINUTE {
        date.pred_opt().unwrap_or(date)
    } else {
        date
    }
}

/// Inclusive count of calendar nights between two night dates.
/// Returns 0 when `first > last`, never a negative value.
pub fn count_nights_between(first: NaiveDate, last: NaiveDate) -> u64 {
    if first > last {
        return 0;
    }
    (last - first).num_days() as u64 + 1
}

/// True iff `time` falls inside [00:00, 06:00), independent of date
pub fn is_night_time(time: NaiveTime) -> bool {
    let minute = minute_of_day(time);
    (NIGHT_START_MINUTE..NIGHT_END_MINUTE).contains(&minute)
}
