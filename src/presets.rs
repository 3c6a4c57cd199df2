//! named shortcuts like "Last 7 Days", resolved when they are applied

use std::fmt;

use chrono::{Datelike, Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::dates::calendar_date;
use crate::result::CommittedRange;

/// source of "today"
pub trait Clock: fmt::Debug + Send {
    fn today(&self) -> NaiveDate;
}

/// the local calendar date of the machine
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        calendar_date(&Local::now())
    }
}

/// always the same day, used for reproducible runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// how a predefined range computes its endpoints
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RangeRule {
    /// from `days` days ago up to and including today
    LastDays { days: u32 },
    /// first day of the current month up to today
    ThisMonth,
    /// the whole previous month
    PreviousMonth,
    /// a literal range, dates as "YYYY-MM-DD" strings
    Fixed { start: NaiveDate, end: NaiveDate },
}

impl RangeRule {
    /// endpoints relative to `today`, `None` if they are not representable
    pub fn resolve(&self, today: NaiveDate) -> Option<CommittedRange> {
        match self {
            RangeRule::LastDays { days } => {
                let start = today.checked_sub_days(Days::new((*days).into()))?;
                Some(CommittedRange::new(start, today))
            }
            RangeRule::ThisMonth => Some(CommittedRange::new(today.with_day(1)?, today)),
            RangeRule::PreviousMonth => {
                let end = today.with_day(1)?.pred_opt()?;
                Some(CommittedRange::new(end.with_day(1)?, end))
            }
            RangeRule::Fixed { start, end } => {
                if start > end {
                    warn!(%start, %end, "fixed range is reversed, swapping endpoints");
                }
                Some(CommittedRange::new(*start, *end))
            }
        }
    }
}

/// a labelled shortcut shown next to the calendar
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PredefinedRange {
    pub label: String,
    pub rule: RangeRule,
}

impl PredefinedRange {
    pub fn new(label: impl Into<String>, rule: RangeRule) -> Self {
        Self {
            label: label.into(),
            rule,
        }
    }

    pub fn last_days(days: u32) -> Self {
        Self::new(format!("Last {days} Days"), RangeRule::LastDays { days })
    }
}

/// the shortcuts used when no configuration provides any
pub fn default_ranges() -> Vec<PredefinedRange> {
    vec![PredefinedRange::last_days(7), PredefinedRange::last_days(30)]
}

/// Maps the index of a predefined range to concrete endpoints.
///
/// Resolution happens on every call, so relative rules always use the
/// current day of the clock.
#[derive(Debug)]
pub struct PredefinedRangeResolver {
    ranges: Vec<PredefinedRange>,
    clock: Box<dyn Clock>,
}

impl PredefinedRangeResolver {
    pub fn new(ranges: Vec<PredefinedRange>, clock: Box<dyn Clock>) -> Self {
        Self { ranges, clock }
    }

    pub fn ranges(&self) -> &[PredefinedRange] {
        &self.ranges
    }

    pub fn labels(&self) -> Vec<&str> {
        self.ranges.iter().map(|r| r.label.as_str()).collect()
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.ranges.iter().position(|r| r.label == label)
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn resolve(&self, index: usize) -> Option<CommittedRange> {
        let Some(range) = self.ranges.get(index) else {
            warn!(index, "no predefined range at this index");
            return None;
        };

        let today = self.clock.today();
        let resolved = range.rule.resolve(today);
        debug!(label = %range.label, %today, ?resolved, "predefined range resolved");
        resolved
    }
}
