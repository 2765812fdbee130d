//! Month-level date math for calendar hosts: month lengths, the Monday-first
//! cell grid a month view renders, and the navigation steps (day, month,
//! year) a grid widget binds to its keys.

use crate::error::{FolhinhaError, Result};
use chrono::{Datelike, Days, NaiveDate};

/// Cells in the fixed 6-row, 7-column month grid.
pub const GRID_CELLS: usize = 42;

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && year % 100 != 0 || year % 400 == 0
}

/// Number of days in `month` of `year`. Months outside 1..=12 are an error.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 => Ok(if is_leap_year(year) { 29 } else { 28 }),
        _ => Err(FolhinhaError::InvalidDate { year, month, day: 1 }),
    }
}

/// A month laid out as 42 cells, Monday-first: leading `None` cells up to the
/// weekday of day 1, then `Some(1..=len)`, then trailing `None`.
///
/// This is the cell arrangement an accessible month view renders; 42 cells
/// always suffice since the worst case (a 31-day month starting on a Sunday)
/// occupies 37.
///
/// # Example
///
/// ```
/// use folhinha::month::MonthGrid;
///
/// // August 2025 starts on a Friday
/// let grid = MonthGrid::new(2025, 8).unwrap();
/// assert_eq!(grid.cells()[3], None);
/// assert_eq!(grid.cells()[4], Some(1));
/// assert_eq!(grid.position_of(31), Some((4, 6)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    cells: [Option<u32>; GRID_CELLS],
}

impl MonthGrid {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(FolhinhaError::InvalidDate {
            year,
            month,
            day: 1,
        })?;
        let offset = first.weekday().num_days_from_monday() as usize;
        let len = days_in_month(year, month)?;

        let mut cells = [None; GRID_CELLS];
        for day in 1..=len {
            cells[offset + (day - 1) as usize] = Some(day);
        }
        Ok(Self { year, month, cells })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn cells(&self) -> &[Option<u32>; GRID_CELLS] {
        &self.cells
    }

    /// The grid as six rows of seven cells.
    pub fn weeks(&self) -> impl Iterator<Item = &[Option<u32>]> {
        self.cells.chunks(7)
    }

    /// `(row, column)` of `day` in the grid, if the month has that day.
    pub fn position_of(&self, day: u32) -> Option<(usize, usize)> {
        let index = self.cells.iter().position(|cell| *cell == Some(day))?;
        Some((index / 7, index % 7))
    }

    /// The date at a grid cell, or `None` for a blank cell or out-of-grid
    /// coordinates.
    pub fn date_at(&self, row: usize, column: usize) -> Option<NaiveDate> {
        if row >= 6 || column >= 7 {
            return None;
        }
        let day = self.cells[row * 7 + column]?;
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}

/// Steps `date` by whole months, landing on day 1 of the target month.
///
/// Paging always enters a month at its start; hosts that want to keep the
/// day across pages can re-select after the jump.
pub fn add_months(date: NaiveDate, delta: i32) -> Result<NaiveDate> {
    let months = date.year() as i64 * 12 + date.month0() as i64 + delta as i64;
    let year = i32::try_from(months.div_euclid(12))
        .map_err(|_| FolhinhaError::YearOutOfRange(months.div_euclid(12)))?;
    let month = months.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(FolhinhaError::YearOutOfRange(year as i64))
}

/// Steps `date` by whole years, keeping the month and clamping the day to the
/// target month's length (February 29 steps to February 28 in common years).
pub fn add_years(date: NaiveDate, delta: i32) -> Result<NaiveDate> {
    let target = date.year() as i64 + delta as i64;
    let year = i32::try_from(target).map_err(|_| FolhinhaError::YearOutOfRange(target))?;
    let day = date.day().min(days_in_month(year, date.month())?);
    NaiveDate::from_ymd_opt(year, date.month(), day)
        .ok_or(FolhinhaError::YearOutOfRange(year as i64))
}

/// Steps `date` by `days` only if the result stays within the same month and
/// year; `None` otherwise (the host typically signals the boundary with a
/// tone instead of moving).
pub fn step_within_month(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let stepped = if days < 0 {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_add_days(Days::new(days as u64))
    }?;
    (stepped.year() == date.year() && stepped.month() == date.month()).then_some(stepped)
}

/// Position of a date within its year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearDay {
    /// 1-based day number within the year.
    pub ordinal: u32,
    /// 365 or 366.
    pub total: u32,
}

impl YearDay {
    /// Days left until December 31, not counting the date itself.
    pub fn remaining(&self) -> u32 {
        self.total - self.ordinal
    }
}

/// Where `date` falls within its year, for "day N of M" style summaries.
pub fn year_day(date: NaiveDate) -> YearDay {
    let total = if is_leap_year(date.year()) { 366 } else { 365 };
    YearDay {
        ordinal: date.ordinal(),
        total,
    }
}
