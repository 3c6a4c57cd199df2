//! two-click range selection with hover preview

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::dates::is_business_day;
use crate::result::{CommittedRange, RangeResult};

/// State of a range selection gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// nothing selected yet
    #[default]
    Empty,
    /// first endpoint chosen, `hover` previews the range while the pointer moves
    StartOnly {
        start: NaiveDate,
        hover: Option<NaiveDate>,
    },
    /// both endpoints chosen, `start <= end`
    Complete { start: NaiveDate, end: NaiveDate },
}

impl Selection {
    pub fn start(&self) -> Option<NaiveDate> {
        match self {
            Selection::Empty => None,
            Selection::StartOnly { start, .. } | Selection::Complete { start, .. } => Some(*start),
        }
    }

    pub fn end(&self) -> Option<NaiveDate> {
        match self {
            Selection::Complete { end, .. } => Some(*end),
            _ => None,
        }
    }

    /// only set while a gesture is in progress
    pub fn hover(&self) -> Option<NaiveDate> {
        match self {
            Selection::StartOnly { hover, .. } => *hover,
            _ => None,
        }
    }

    pub fn committed(&self) -> Option<CommittedRange> {
        match self {
            Selection::Complete { start, end } => Some(CommittedRange::new(*start, *end)),
            _ => None,
        }
    }

    /// the (start, end) pair used for change detection, hover is not part of it
    fn endpoints(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        (self.start(), self.end())
    }
}

/// Drives a [`Selection`] from clicks and hovers.
///
/// Every mutating call returns the [`RangeResult`] to hand to the host when the
/// (start, end) pair changed into a complete range, and `None` otherwise.
#[derive(Debug, Clone, Default)]
pub struct SelectionStateMachine {
    selection: Selection,
    observed: (Option<NaiveDate>, Option<NaiveDate>),
}

impl SelectionStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Handle a click on a date. Clicks on weekends are ignored.
    pub fn click(&mut self, date: NaiveDate) -> Option<RangeResult> {
        if !is_business_day(&date) {
            debug!(%date, "ignoring click on non-business day");
            return None;
        }

        self.selection = match self.selection {
            Selection::Empty | Selection::Complete { .. } => Selection::StartOnly {
                start: date,
                hover: None,
            },
            Selection::StartOnly { start, hover } if date < start => {
                Selection::StartOnly { start: date, hover }
            }
            Selection::StartOnly { start, .. } => Selection::Complete { start, end: date },
        };
        debug!(selection = ?self.selection, "click");

        self.detect_change()
    }

    /// Pointer entered a date (`Some`) or left the grid cell (`None`).
    /// Only meaningful while a gesture is in progress.
    pub fn hover(&mut self, date: Option<NaiveDate>) {
        if let Selection::StartOnly { hover, .. } = &mut self.selection {
            *hover = date;
        }
    }

    /// Set both endpoints at once, bypassing the weekday gate on clicks.
    pub fn apply_range(&mut self, range: CommittedRange) -> Option<RangeResult> {
        self.selection = Selection::Complete {
            start: range.start(),
            end: range.end(),
        };
        debug!(selection = ?self.selection, "range applied");

        self.detect_change()
    }

    /// Forget the current selection
    pub fn reset(&mut self) {
        self.selection = Selection::Empty;
        self.observed = self.selection.endpoints();
    }

    /// true if the date should be highlighted as part of the (preview) range
    pub fn is_in_range(&self, date: &NaiveDate) -> bool {
        match self.selection {
            Selection::Complete { start, end } => start <= *date && *date <= end,
            Selection::StartOnly {
                start,
                hover: Some(hover),
            } => start <= *date && *date <= hover,
            _ => false,
        }
    }

    /// true if the date is the start or the end of the selection
    pub fn is_endpoint(&self, date: &NaiveDate) -> bool {
        self.selection.start() == Some(*date) || self.selection.end() == Some(*date)
    }

    /// Compare the (start, end) pair by value with the last one seen and
    /// emit when it changed into a complete range.
    fn detect_change(&mut self) -> Option<RangeResult> {
        let current = self.selection.endpoints();
        if current == self.observed {
            return None;
        }
        self.observed = current;

        let range = self.selection.committed()?;
        let result = RangeResult::new(range);
        info!(
            start = %range.start(),
            end = %range.end(),
            weekends = result.weekends().len(),
            "range committed"
        );
        Some(result)
    }
}
