use chrono::{DateTime, Datelike, Days, Utc, Weekday};

use super::cursor::is_at_or_before;

/// Maps an ISO weekday number (1 = Monday .. 7 = Sunday) to a [`Weekday`].
pub fn iso_weekday(number: i64) -> Option<Weekday> {
    match number {
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        7 => Some(Weekday::Sun),
        _ => None,
    }
}

/// First date on or after `cursor` that falls on `target`.
///
/// A target later in the ISO week (or the same day) lands in the cursor's own
/// week; an earlier one lands in the following week. Time of day is kept.
pub fn next_on_or_after(cursor: DateTime<Utc>, target: Weekday) -> Option<DateTime<Utc>> {
    let today = cursor.weekday().number_from_monday();
    let wanted = target.number_from_monday();
    let offset = if today <= wanted {
        wanted - today
    } else {
        7 - (today - wanted)
    };
    cursor.checked_add_days(Days::new(u64::from(offset)))
}

/// Fans one weekly cycle window out into one candidate per selected weekday.
#[derive(Debug, Clone, Copy)]
pub struct WeekdayExpander<'a> {
    weekdays: &'a [Weekday],
    anchor: DateTime<Utc>,
    cutoff: DateTime<Utc>,
}

impl<'a> WeekdayExpander<'a> {
    pub fn new(weekdays: &'a [Weekday], anchor: DateTime<Utc>, cutoff: DateTime<Utc>) -> Self {
        Self {
            weekdays,
            anchor,
            cutoff,
        }
    }

    /// Appends the occurrences of the window starting at `cursor` to `out`,
    /// in weekday input order. Candidates past the cutoff or not strictly
    /// after the anchor are dropped.
    pub fn expand_window(&self, cursor: DateTime<Utc>, out: &mut Vec<DateTime<Utc>>) {
        for &weekday in self.weekdays {
            let Some(candidate) = next_on_or_after(cursor, weekday) else {
                continue;
            };
            if candidate > self.anchor && is_at_or_before(candidate, self.cutoff) {
                out.push(candidate);
            }
        }
    }
}
