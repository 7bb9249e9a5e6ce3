// Calendar module - month grid arithmetic
//
// Produces the week-aligned grid a month view renders: rows of seven slots,
// Monday first, with blanks padding the edges of the month. Stepping moves
// one month at a time and carries across year boundaries. All chrono-backed,
// so leap years come out right without any hand-rolled day tables.

use chrono::{Datelike, NaiveDate};

/// A month laid out as week rows. `None` slots are the leading/trailing
/// blanks; `Some(day)` is a day-of-month starting at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    /// 1-based month, January = 1.
    pub month: u32,
    pub weeks: Vec<[Option<u32>; 7]>,
}

impl MonthGrid {
    /// Build the grid for a month. Months outside 1..=12 are clamped.
    pub fn new(year: i32, month: u32) -> Self {
        let month = month.clamp(1, 12);
        // The first of any clamped month is a valid date.
        let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default();
        let leading = first.weekday().num_days_from_monday() as usize;
        let days = days_in_month(year, month);

        let mut weeks = Vec::with_capacity(6);
        let mut week = [None; 7];
        let mut slot = leading;

        for day in 1..=days {
            week[slot] = Some(day);
            slot += 1;
            if slot == 7 {
                weeks.push(week);
                week = [None; 7];
                slot = 0;
            }
        }
        if slot > 0 {
            weeks.push(week);
        }

        Self { year, month, weeks }
    }

    /// The grid for the previous month (December wraps to the prior year).
    pub fn prev(&self) -> Self {
        let (year, month) = step_month(self.year, self.month, -1);
        Self::new(year, month)
    }

    /// The grid for the next month (January wraps to the following year).
    pub fn next(&self) -> Self {
        let (year, month) = step_month(self.year, self.month, 1);
        Self::new(year, month)
    }

    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

/// Step a (year, month) pair by a signed number of months.
pub fn step_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let total = year * 12 + month.clamp(1, 12) as i32 - 1 + delta;
    (total.div_euclid(12), (total.rem_euclid(12) + 1) as u32)
}

/// Days in a month, leap-correct: the gap between this month's first and
/// the next month's first.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let month = month.clamp(1, 12);
    let (next_year, next_month) = step_month(year, month, 1);
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = NaiveDate::from_ymd_opt(next_year, next_month, 1);
    match (first, next) {
        (Some(a), Some(b)) => b.signed_duration_since(a).num_days() as u32,
        _ => 30,
    }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

/// Column headers matching the Monday-first grid.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

#[cfg(test)]
mod tests {
    use super::*;

    /// Every day 1..=days appears exactly once, in order.
    fn flatten(grid: &MonthGrid) -> Vec<u32> {
        grid.weeks
            .iter()
            .flat_map(|w| w.iter().flatten().copied())
            .collect()
    }

    #[test]
    fn leap_february_has_29_days() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28); // century, not a leap year
        assert_eq!(days_in_month(2000, 2), 29); // quadricentennial is
    }

    #[test]
    fn grid_contains_every_day_once() {
        for (year, month) in [(2026, 2), (2024, 2), (2025, 12), (2026, 8)] {
            let grid = MonthGrid::new(year, month);
            let days: Vec<u32> = (1..=days_in_month(year, month)).collect();
            assert_eq!(flatten(&grid), days, "{}-{}", year, month);
        }
    }

    #[test]
    fn leading_blanks_align_the_first_weekday() {
        // February 2026 starts on a Sunday: six leading blanks, Monday-first.
        let grid = MonthGrid::new(2026, 2);
        assert_eq!(grid.weeks[0], [None, None, None, None, None, None, Some(1)]);

        // June 2026 starts on a Monday: no leading blanks.
        let june = MonthGrid::new(2026, 6);
        assert_eq!(june.weeks[0][0], Some(1));
    }

    #[test]
    fn trailing_blanks_pad_the_last_week() {
        let grid = MonthGrid::new(2026, 8); // 31 days, starts Saturday
        let last = grid.weeks.last().expect("august has weeks");
        assert_eq!(last[0], Some(31));
        assert!(last[1..].iter().all(Option::is_none));
    }

    #[test]
    fn stepping_wraps_year_boundaries() {
        assert_eq!(step_month(2025, 12, 1), (2026, 1));
        assert_eq!(step_month(2026, 1, -1), (2025, 12));
        assert_eq!(step_month(2026, 6, -18), (2024, 12));

        let dec = MonthGrid::new(2025, 12);
        assert_eq!((dec.next().year, dec.next().month), (2026, 1));
        assert_eq!((dec.prev().year, dec.prev().month), (2025, 11));
    }

    #[test]
    fn title_is_human_readable() {
        assert_eq!(MonthGrid::new(2026, 8).title(), "August 2026");
    }

    #[test]
    fn month_is_clamped_not_panicked() {
        let grid = MonthGrid::new(2026, 0);
        assert_eq!(grid.month, 1);
        assert_eq!(MonthGrid::new(2026, 15).month, 12);
    }
}
