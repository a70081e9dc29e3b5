//! Month grid layout for a Monday-first week.

use chrono::{Datelike, NaiveDate};

use super::month::{MonthIndex, YearMonth};
use crate::error::{McProError, McProResult};

const WEEK_LEN: usize = 7;

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCell {
    /// Padding before the 1st (or after the last day, in [`MonthGrid::weeks`]).
    Empty,
    Day(u32),
}

impl DayCell {
    pub fn day(self) -> Option<u32> {
        match self {
            DayCell::Empty => None,
            DayCell::Day(d) => Some(d),
        }
    }
}

/// Display grid for one month.
///
/// Holds `offset` empty cells followed by the days `1..=days_in_month`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: YearMonth,
    cells: Vec<DayCell>,
    offset: usize,
}

impl MonthGrid {
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of empty cells before the 1st; also the Monday-based column of the 1st.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn days_in_month(&self) -> u32 {
        (self.cells.len() - self.offset) as u32
    }

    /// Index of `day` in [`MonthGrid::cells`], if the month has that day.
    pub fn position_of(&self, day: u32) -> Option<usize> {
        (1..=self.days_in_month())
            .contains(&day)
            .then(|| self.offset + day as usize - 1)
    }

    /// Rows of seven cells, the last row padded with empty cells.
    pub fn weeks(&self) -> Vec<[DayCell; WEEK_LEN]> {
        self.cells
            .chunks(WEEK_LEN)
            .map(|chunk| {
                let mut row = [DayCell::Empty; WEEK_LEN];
                row[..chunk.len()].copy_from_slice(chunk);
                row
            })
            .collect()
    }
}

/// Number of days in `month` of `year`, leap years included.
///
/// Computed as the day before the 1st of the following month.
pub fn days_in_month(year: i32, month: MonthIndex) -> McProResult<u32> {
    let ym = YearMonth::new(year, month);
    let next = ym.next();

    NaiveDate::from_ymd_opt(next.year, next.month.number(), 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .ok_or_else(|| McProError::InvalidDate(format!("{ym} is out of range")))
}

/// Build the grid for `month` of `year`.
///
/// The weekday of the 1st is taken Sunday-based (0 = Sunday) and rebased so
/// Monday is column 0: Sunday maps to 6, any other day `d` to `d - 1`.
pub fn build_month_grid(year: i32, month: MonthIndex) -> McProResult<MonthGrid> {
    let ym = YearMonth::new(year, month);
    let days = days_in_month(year, month)?;
    let first_weekday = ym.first_day()?.weekday().num_days_from_sunday();

    let offset = if first_weekday == 0 {
        6
    } else {
        first_weekday as usize - 1
    };

    let mut cells = vec![DayCell::Empty; offset];
    cells.extend((1..=days).map(DayCell::Day));

    Ok(MonthGrid {
        month: ym,
        cells,
        offset,
    })
}
