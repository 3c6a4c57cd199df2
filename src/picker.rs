//! one date picker instance: visible month, selection and predefined ranges

use chrono::NaiveDate;
use tracing::debug;

use crate::calendar::VisibleMonth;
use crate::presets::PredefinedRangeResolver;
use crate::result::RangeResult;
use crate::selection::{Selection, SelectionStateMachine};

/// input events a host delivers, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    ClickDate(NaiveDate),
    /// `None` when the pointer leaves a date
    HoverDate(Option<NaiveDate>),
    NavigateMonth(i32),
    /// 0-based month
    SetMonth(u32),
    SetYear(i32),
    ApplyPredefinedRange(usize),
}

/// Owns the state of a single picker. Instances are independent.
#[derive(Debug)]
pub struct DatePicker {
    visible: VisibleMonth,
    selection: SelectionStateMachine,
    presets: PredefinedRangeResolver,
}

impl DatePicker {
    pub fn new(visible: VisibleMonth, presets: PredefinedRangeResolver) -> Self {
        Self {
            visible,
            selection: SelectionStateMachine::new(),
            presets,
        }
    }

    /// starts on the month containing the clock's today
    pub fn at_today(presets: PredefinedRangeResolver) -> Self {
        let visible = VisibleMonth::containing(presets.today()).unwrap_or_default();
        Self::new(visible, presets)
    }

    /// Process one event; returns the result to surface when a range got committed.
    ///
    /// Navigation keeps any selection, including one in progress.
    pub fn handle(&mut self, event: PickerEvent) -> Option<RangeResult> {
        match event {
            PickerEvent::ClickDate(date) => self.selection.click(date),
            PickerEvent::HoverDate(date) => {
                self.selection.hover(date);
                None
            }
            PickerEvent::NavigateMonth(delta) => {
                if !self.visible.navigate(delta) {
                    debug!(delta, visible = %self.visible, "navigation out of range");
                }
                None
            }
            PickerEvent::SetMonth(month) => {
                if !self.visible.set_month(month) {
                    debug!(month, "ignoring invalid month");
                }
                None
            }
            PickerEvent::SetYear(year) => {
                if !self.visible.set_year(year) {
                    debug!(year, "ignoring unsupported year");
                }
                None
            }
            PickerEvent::ApplyPredefinedRange(index) => {
                let range = self.presets.resolve(index)?;
                self.selection.apply_range(range)
            }
        }
    }

    pub fn visible(&self) -> VisibleMonth {
        self.visible
    }

    pub fn selection(&self) -> &Selection {
        self.selection.selection()
    }

    pub fn presets(&self) -> &PredefinedRangeResolver {
        &self.presets
    }

    /// the 42 dates to render for the visible month
    pub fn grid(&self) -> Vec<NaiveDate> {
        self.visible.grid()
    }

    pub fn is_in_range(&self, date: &NaiveDate) -> bool {
        self.selection.is_in_range(date)
    }

    pub fn is_endpoint(&self, date: &NaiveDate) -> bool {
        self.selection.is_endpoint(date)
    }

    pub fn is_in_visible_month(&self, date: &NaiveDate) -> bool {
        self.visible.contains(date)
    }

    pub fn clear(&mut self) {
        self.selection.reset();
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::presets::{FixedClock, default_ranges};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn picker() -> DatePicker {
        let presets =
            PredefinedRangeResolver::new(default_ranges(), Box::new(FixedClock(date(2024, 6, 17))));
        DatePicker::at_today(presets)
    }

    #[test]
    fn starts_on_the_current_month() {
        let picker = picker();
        assert_eq!((5, 2024), (picker.visible().month(), picker.visible().year()));
        assert_eq!(Selection::Empty, *picker.selection());
        assert_eq!(42, picker.grid().len());
    }

    #[test]
    fn predefined_last_seven_days() {
        let mut picker = picker();
        let result = picker.handle(PickerEvent::ApplyPredefinedRange(0)).unwrap();
        assert_eq!(["2024-06-10", "2024-06-17"], result.iso_pair());
        assert_eq!(vec!["2024-06-15", "2024-06-16"], result.iso_weekends());

        // applying the same shortcut again does not change the pair
        assert!(picker.handle(PickerEvent::ApplyPredefinedRange(0)).is_none());
    }

    #[test]
    fn unknown_predefined_range_is_a_no_op() {
        let mut picker = picker();
        assert!(picker.handle(PickerEvent::ApplyPredefinedRange(9)).is_none());
        assert_eq!(Selection::Empty, *picker.selection());
    }

    #[test]
    fn navigation_keeps_the_selection() {
        let mut picker = picker();
        picker.handle(PickerEvent::ClickDate(date(2024, 6, 28)));
        picker.handle(PickerEvent::NavigateMonth(1));
        picker.handle(PickerEvent::SetYear(2024));
        assert!(picker.is_in_visible_month(&date(2024, 7, 1)));

        picker.handle(PickerEvent::HoverDate(Some(date(2024, 7, 3))));
        assert!(picker.is_in_range(&date(2024, 7, 1)));

        let result = picker.handle(PickerEvent::ClickDate(date(2024, 7, 5))).unwrap();
        assert_eq!(["2024-06-28", "2024-07-05"], result.iso_pair());
        assert_eq!(vec!["2024-06-29", "2024-06-30"], result.iso_weekends());
    }

    #[test]
    fn navigation_never_emits() {
        let mut picker = picker();
        picker.handle(PickerEvent::ClickDate(date(2024, 6, 3)));
        assert!(picker.handle(PickerEvent::ClickDate(date(2024, 6, 4))).is_some());

        assert!(picker.handle(PickerEvent::NavigateMonth(-1)).is_none());
        assert!(picker.handle(PickerEvent::SetMonth(11)).is_none());
        assert!(picker.handle(PickerEvent::SetMonth(12)).is_none());
        assert!(picker.handle(PickerEvent::SetYear(2030)).is_none());
        assert_eq!((11, 2030), (picker.visible().month(), picker.visible().year()));
        assert!(picker.is_endpoint(&date(2024, 6, 4)));
    }

    #[test]
    fn instances_are_independent() {
        let mut first = picker();
        let second = picker();
        first.handle(PickerEvent::ClickDate(date(2024, 6, 3)));
        assert_eq!(Selection::Empty, *second.selection());

        first.clear();
        assert_eq!(Selection::Empty, *first.selection());
    }
}
