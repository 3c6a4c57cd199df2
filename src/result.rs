//! the committed range and the result handed to the host

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::dates::{non_business_days_in_range, to_iso};

/// a finalized (start, end) pair, `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommittedRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl CommittedRange {
    /// builds a range from two endpoints in any order
    pub fn new(first: NaiveDate, second: NaiveDate) -> Self {
        if first <= second {
            Self {
                start: first,
                end: second,
            }
        } else {
            Self {
                start: second,
                end: first,
            }
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Saturdays and Sundays within the range, ascending
    pub fn weekends(&self) -> Vec<NaiveDate> {
        non_business_days_in_range(&self.start, &self.end)
    }
}

/// What the host receives once per completed gesture.
///
/// Serializes as `[["start", "end"], ["weekend", ...]]` with ISO-8601 dates.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeResult(
    #[serde_as(as = "[DisplayFromStr; 2]")] [NaiveDate; 2],
    #[serde_as(as = "Vec<DisplayFromStr>")] Vec<NaiveDate>,
);

impl RangeResult {
    pub fn new(range: CommittedRange) -> Self {
        Self([range.start(), range.end()], range.weekends())
    }

    pub fn range(&self) -> CommittedRange {
        CommittedRange::new(self.0[0], self.0[1])
    }

    pub fn weekends(&self) -> &[NaiveDate] {
        &self.1
    }

    pub fn iso_pair(&self) -> [String; 2] {
        [to_iso(&self.0[0]), to_iso(&self.0[1])]
    }

    pub fn iso_weekends(&self) -> Vec<String> {
        self.1.iter().map(to_iso).collect()
    }
}
