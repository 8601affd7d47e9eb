//! Recurrence expansion: turns a recurrence rule and its anchor into the
//! concrete occurrence dates a calendar shows.

use chrono::{DateTime, Utc, Weekday};
use serde::Deserialize;

use crate::error::DefinitionError;
use crate::models::{CyclePeriod, RecurringEvent};

pub mod cursor;
pub mod weekday;

pub use cursor::{advance, is_at_or_before, OccurrenceCursor};
pub use weekday::{iso_weekday, next_on_or_after, WeekdayExpander};

/// Validated form of a [`RecurringEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    pub period: CyclePeriod,
    /// Always at least 1
    pub distance: u32,
    /// Selected weekdays, deduplicated; only non-empty for weekly rules
    pub weekdays: Vec<Weekday>,
    /// Inclusive cutoff
    pub end_of_cycle: DateTime<Utc>,
}

impl RecurrenceRule {
    /// Builds a rule, rejecting a zero distance.
    ///
    /// Weekdays are ignored for anything but [`CyclePeriod::Weeks`]; duplicates
    /// are dropped while keeping the first-seen order.
    pub fn new(
        period: CyclePeriod,
        distance: u32,
        weekdays: Vec<Weekday>,
        end_of_cycle: DateTime<Utc>,
    ) -> Result<Self, DefinitionError> {
        if distance == 0 {
            return Err(DefinitionError::InvalidDistance(0));
        }

        let weekdays = if period == CyclePeriod::Weeks {
            let mut unique = Vec::with_capacity(weekdays.len());
            for day in weekdays {
                if !unique.contains(&day) {
                    unique.push(day);
                }
            }
            unique
        } else {
            Vec::new()
        };

        Ok(Self {
            period,
            distance,
            weekdays,
            end_of_cycle,
        })
    }

    /// Validates a raw definition from the persistence layer.
    pub fn from_event(event: &RecurringEvent) -> Result<Self, DefinitionError> {
        let period = CyclePeriod::from_wire(&event.cycle_period)
            .ok_or_else(|| DefinitionError::UnknownCyclePeriod(event.cycle_period.clone()))?;

        let distance = u32::try_from(event.distance)
            .ok()
            .filter(|d| *d >= 1)
            .ok_or(DefinitionError::InvalidDistance(event.distance))?;

        let weekdays = if period == CyclePeriod::Weeks {
            event
                .days
                .iter()
                .map(|&day| iso_weekday(day).ok_or(DefinitionError::InvalidWeekday(day)))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            Vec::new()
        };

        Self::new(period, distance, weekdays, event.end_of_cycle)
    }

    /// Whether each cycle window fans out over selected weekdays.
    #[inline]
    pub fn uses_weekdays(&self) -> bool {
        self.period == CyclePeriod::Weeks && !self.weekdays.is_empty()
    }

    /// Shortest possible length of one step, in days.
    fn min_step_days(&self) -> u64 {
        let unit = match self.period {
            CyclePeriod::Days => 1,
            CyclePeriod::Weeks => 7,
            CyclePeriod::Months => 28,
            CyclePeriod::Years => 365,
        };
        unit * u64::from(self.distance)
    }
}

/// Limits and policy for recurrence expansion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    /// Extra iterations allowed on top of the span-derived estimate
    pub iteration_margin: u32,
    /// Optional hard ceiling on loop iterations per definition; unset, the
    /// span-derived estimate alone bounds the loop
    pub max_iterations: Option<u32>,
    /// Expand definitions on the rayon pool
    pub parallel: bool,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            iteration_margin: 2,
            max_iterations: None,
            parallel: true,
        }
    }
}

/// Result of expanding one rule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Expansion {
    /// Occurrence dates in generation order
    pub occurrences: Vec<DateTime<Utc>>,
    /// Loop iterations actually performed
    pub iterations: u32,
    /// Iteration cap that applied to this expansion
    pub cap: u32,
    /// Set when the cap stopped the loop before the cutoff was reached
    pub truncated: bool,
}

/// Drives an [`OccurrenceCursor`] from the anchor to the cutoff.
#[derive(Debug, Clone, Default)]
pub struct RecurrenceExpander {
    config: ExpansionConfig,
}

impl RecurrenceExpander {
    pub fn new(config: ExpansionConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(ExpansionConfig::default())
    }

    pub fn config(&self) -> &ExpansionConfig {
        &self.config
    }

    /// Upper bound on loop iterations for `rule` anchored at `anchor`:
    /// `ceil(span / shortest step) + margin`, clamped to the configured ceiling
    /// when one is set.
    pub fn iteration_cap(&self, rule: &RecurrenceRule, anchor: DateTime<Utc>) -> u32 {
        let span_days = u64::try_from((rule.end_of_cycle - anchor).num_days()).unwrap_or(0);
        let estimate = span_days
            .div_ceil(rule.min_step_days())
            .saturating_add(u64::from(self.config.iteration_margin));
        let estimate = u32::try_from(estimate).unwrap_or(u32::MAX);
        match self.config.max_iterations {
            Some(ceiling) => estimate.min(ceiling),
            None => estimate,
        }
    }

    /// Expands `rule` into occurrences strictly after `anchor` and at or
    /// before the rule's cutoff.
    ///
    /// The loop runs while the cursor (before advancing) is inside the window.
    /// Single-step rules emit the advanced cursor; weekly rules with selected
    /// weekdays emit the window's weekday candidates and then advance.
    pub fn expand(&self, rule: &RecurrenceRule, anchor: DateTime<Utc>) -> Expansion {
        let cap = self.iteration_cap(rule, anchor);
        let cutoff = rule.end_of_cycle;
        let weekdays = WeekdayExpander::new(&rule.weekdays, anchor, cutoff);

        let mut cursor = OccurrenceCursor::new(anchor, rule.period, rule.distance);
        let mut expansion = Expansion {
            cap,
            ..Default::default()
        };

        while cursor.is_at_or_before(cutoff) {
            if expansion.iterations >= cap {
                expansion.truncated = true;
                break;
            }
            expansion.iterations += 1;

            if rule.uses_weekdays() {
                weekdays.expand_window(cursor.position(), &mut expansion.occurrences);
            }

            cursor = match cursor.advanced() {
                Some(next) => next,
                None => break,
            };

            if !rule.uses_weekdays() && cursor.is_at_or_before(cutoff) {
                expansion.occurrences.push(cursor.position());
            }
        }

        expansion
    }
}
