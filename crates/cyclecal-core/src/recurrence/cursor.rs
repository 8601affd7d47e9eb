use chrono::{DateTime, Days, Months, Utc};

use crate::models::CyclePeriod;

/// Advances `date` by `distance` units of `unit`.
///
/// Months and years are calendar-aware: the day of month is clamped to the
/// length of the target month (Jan 31 + 1 month = Feb 28/29). Returns `None`
/// when the result falls outside chrono's representable range.
pub fn advance(date: DateTime<Utc>, unit: CyclePeriod, distance: u32) -> Option<DateTime<Utc>> {
    match unit {
        CyclePeriod::Days => date.checked_add_days(Days::new(u64::from(distance))),
        CyclePeriod::Weeks => date.checked_add_days(Days::new(u64::from(distance) * 7)),
        CyclePeriod::Months => date.checked_add_months(Months::new(distance)),
        CyclePeriod::Years => distance
            .checked_mul(12)
            .and_then(|months| date.checked_add_months(Months::new(months))),
    }
}

/// Inclusive window check shared by every expansion path.
#[inline]
pub fn is_at_or_before(date: DateTime<Utc>, bound: DateTime<Utc>) -> bool {
    date <= bound
}

/// Position of an expansion plus its fixed step.
///
/// The step never changes once the cursor is created; each call to
/// [`advanced`](Self::advanced) yields a new cursor one step further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccurrenceCursor {
    position: DateTime<Utc>,
    unit: CyclePeriod,
    distance: u32,
}

impl OccurrenceCursor {
    pub fn new(anchor: DateTime<Utc>, unit: CyclePeriod, distance: u32) -> Self {
        Self {
            position: anchor,
            unit,
            distance,
        }
    }

    #[inline]
    pub fn position(&self) -> DateTime<Utc> {
        self.position
    }

    #[inline]
    pub fn unit(&self) -> CyclePeriod {
        self.unit
    }

    #[inline]
    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// The cursor one step further, or `None` if the date range is exhausted.
    pub fn advanced(&self) -> Option<Self> {
        advance(self.position, self.unit, self.distance).map(|position| Self {
            position,
            ..*self
        })
    }

    #[inline]
    pub fn is_at_or_before(&self, bound: DateTime<Utc>) -> bool {
        is_at_or_before(self.position, bound)
    }
}
