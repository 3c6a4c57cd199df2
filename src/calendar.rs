//! month grid generation and the visible month cursor

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};

/// six full weeks, so the grid height does not change between months
pub const GRID_CELLS: usize = 42;

/// first year a [`VisibleMonth`] can show
pub const MIN_YEAR: i32 = 1;
/// last year a [`VisibleMonth`] can show, its December grid still ends in a four digit year
pub const MAX_YEAR: i32 = 9998;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// column headers of the grid, the grid starts on Sunday
pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Generate the 42 dates shown for `month` (0 = January) of `year`.
///
/// `month` is normalized into the adjacent years, so `12` is January of the
/// next year and `-1` is December of the previous year. Years outside
/// [`MIN_YEAR`]..=[`MAX_YEAR`] produce an empty grid.
pub fn month_grid(month: i32, year: i32) -> Vec<NaiveDate> {
    match VisibleMonth::new(month, year) {
        Some(visible) => visible.grid(),
        None => Vec::new(),
    }
}

/// The month currently shown by a picker. Independent of any selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleMonth {
    first: NaiveDate,
}

impl VisibleMonth {
    /// month is 0-based and may be outside 0..12, see [`month_grid`]
    pub fn new(month: i32, year: i32) -> Option<Self> {
        let year = year.checked_add(month.div_euclid(12))?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return None;
        }
        let month0 = month.rem_euclid(12).unsigned_abs();

        NaiveDate::from_ymd_opt(year, month0 + 1, 1).map(|first| Self { first })
    }

    /// the month the given date falls into
    pub fn containing(date: NaiveDate) -> Option<Self> {
        Self::new(date.month0() as i32, date.year())
    }

    /// 0-based month
    pub fn month(&self) -> u32 {
        self.first.month0()
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.first.month0() as usize]
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// true if the date belongs to this month (and is not padding of the grid)
    pub fn contains(&self, date: &NaiveDate) -> bool {
        date.year() == self.first.year() && date.month() == self.first.month()
    }

    /// move by `delta` months, rolling the year over; returns false if the target is out of range
    pub fn navigate(&mut self, delta: i32) -> bool {
        let Some(month) = (self.month() as i32).checked_add(delta) else {
            return false;
        };
        self.replace(Self::new(month, self.year()))
    }

    /// jump to a 0-based month of the current year, ignored outside 0..12
    pub fn set_month(&mut self, month: u32) -> bool {
        if month >= 12 {
            return false;
        }
        self.replace(Self::new(month as i32, self.year()))
    }

    /// jump to a year keeping the month, ignored outside the supported years
    pub fn set_year(&mut self, year: i32) -> bool {
        self.replace(Self::new(self.month() as i32, year))
    }

    fn replace(&mut self, other: Option<Self>) -> bool {
        match other {
            Some(other) => {
                *self = other;
                true
            }
            None => false,
        }
    }

    /// the 42 dates of this month's grid, oldest first
    pub fn grid(&self) -> Vec<NaiveDate> {
        let first_day = self.first.weekday().num_days_from_sunday();
        let mut days = Vec::with_capacity(GRID_CELLS);

        // tail of the previous month
        for offset in (1..=first_day).rev() {
            days.extend(self.first.checked_sub_days(Days::new(offset.into())));
        }

        // the month itself followed by the head of the next month
        let remaining = GRID_CELLS - days.len();
        days.extend(self.first.iter_days().take(remaining));

        days
    }
}

/// January 1970
impl Default for VisibleMonth {
    fn default() -> Self {
        Self {
            first: NaiveDate::default(),
        }
    }
}

impl fmt::Display for VisibleMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Duration, NaiveDate};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn grid_is_complete_for_every_month() {
        for year in [1900, 2000, 2023, 2024, 2025, 2026] {
            for month in 0..12 {
                let grid = month_grid(month, year);
                assert_eq!(GRID_CELLS, grid.len(), "{month}/{year}");

                for pair in grid.windows(2) {
                    assert_eq!(pair[0] + Duration::days(1), pair[1]);
                }

                let first = date(year, month as u32 + 1, 1);
                let index = first.weekday().num_days_from_sunday() as usize;
                assert_eq!(first, grid[index], "{month}/{year}");
            }
        }
    }

    #[test]
    fn grid_june_2024() {
        // June 1st 2024 is a Saturday
        let grid = month_grid(5, 2024);
        assert_eq!(date(2024, 5, 26), grid[0]);
        assert_eq!(date(2024, 6, 1), grid[6]);
        assert_eq!(date(2024, 6, 30), grid[35]);
        assert_eq!(date(2024, 7, 6), grid[41]);
    }

    #[test]
    fn grid_without_leading_days() {
        // September 1st 2024 is a Sunday
        let grid = month_grid(8, 2024);
        assert_eq!(date(2024, 9, 1), grid[0]);
        assert_eq!(date(2024, 10, 12), grid[41]);
    }

    #[test]
    fn month_is_normalized_into_adjacent_years() {
        assert_eq!(month_grid(0, 2025), month_grid(12, 2024));
        assert_eq!(month_grid(11, 2023), month_grid(-1, 2024));
        assert_eq!(month_grid(1, 2026), month_grid(25, 2024));
    }

    #[test]
    fn unsupported_years_give_an_empty_grid() {
        assert!(month_grid(0, 0).is_empty());
        assert!(month_grid(0, 10_000).is_empty());
        assert!(month_grid(i32::MAX, i32::MAX).is_empty());
    }

    #[test]
    fn grid_dates_keep_four_digit_years() {
        for visible in [VisibleMonth::new(11, MAX_YEAR), VisibleMonth::new(0, MIN_YEAR)] {
            for day in visible.unwrap().grid() {
                assert_eq!(10, crate::dates::to_iso(&day).len(), "{day}");
            }
        }
        assert_eq!(date(9999, 1, 9), *month_grid(11, MAX_YEAR).last().unwrap());
        assert!(month_grid(0, 9999).is_empty());
    }

    #[test]
    fn navigate_rolls_the_year_over() {
        let mut visible = VisibleMonth::new(11, 2024).unwrap();
        assert!(visible.navigate(1));
        assert_eq!((0, 2025), (visible.month(), visible.year()));

        assert!(visible.navigate(-1));
        assert!(visible.navigate(-1));
        assert_eq!((10, 2024), (visible.month(), visible.year()));
    }

    #[test]
    fn navigate_stops_at_supported_years() {
        let mut visible = VisibleMonth::new(11, MAX_YEAR).unwrap();
        assert!(!visible.navigate(1));
        assert_eq!((11, MAX_YEAR), (visible.month(), visible.year()));

        let mut visible = VisibleMonth::new(0, MIN_YEAR).unwrap();
        assert!(!visible.navigate(-1));
        assert_eq!((0, MIN_YEAR), (visible.month(), visible.year()));
    }

    #[test]
    fn set_month_and_year() {
        let mut visible = VisibleMonth::new(5, 2024).unwrap();

        assert!(!visible.set_month(12));
        assert_eq!(5, visible.month());

        assert!(visible.set_month(1));
        assert!(visible.set_year(2028));
        assert_eq!(date(2028, 2, 1), visible.first_day());

        assert!(!visible.set_year(0));
        assert_eq!(2028, visible.year());
    }

    #[test]
    fn contains_only_dates_of_the_month() {
        let visible = VisibleMonth::containing(date(2024, 6, 17)).unwrap();
        let grid = visible.grid();

        assert!(!visible.contains(&grid[0]));
        assert!(visible.contains(&date(2024, 6, 1)));
        assert!(visible.contains(&date(2024, 6, 30)));
        assert!(!visible.contains(&date(2023, 6, 15)));
        assert_eq!("June 2024", visible.to_string());
    }
}
