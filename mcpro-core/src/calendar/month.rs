use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{McProError, McProResult};

const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Setiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Zero-based month index (0 = January, 11 = December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct MonthIndex(u32);

impl MonthIndex {
    pub const JANUARY: MonthIndex = MonthIndex(0);
    pub const DECEMBER: MonthIndex = MonthIndex(11);

    /// Const constructor for static tables. Panics at compile time on a bad index.
    pub(super) const fn literal(index: u32) -> Self {
        assert!(index < 12);
        MonthIndex(index)
    }

    pub fn new(index: u32) -> McProResult<Self> {
        if index > 11 {
            return Err(McProError::InvalidMonth(index));
        }
        Ok(MonthIndex(index))
    }

    /// From a calendar month number (1 = January).
    pub fn from_number(month: u32) -> McProResult<Self> {
        match month {
            1..=12 => Ok(MonthIndex(month - 1)),
            _ => Err(McProError::InvalidInput(format!(
                "month {month} is out of range (expected 1-12)"
            ))),
        }
    }

    pub fn index(self) -> u32 {
        self.0
    }

    /// Calendar month number (1 = January).
    pub fn number(self) -> u32 {
        self.0 + 1
    }

    pub fn name(self) -> &'static str {
        MONTH_NAMES[self.0 as usize]
    }

    /// The following month, wrapping December to January.
    pub fn next(self) -> Self {
        MonthIndex((self.0 + 1) % 12)
    }

    /// The preceding month, wrapping January to December.
    pub fn previous(self) -> Self {
        MonthIndex((self.0 + 11) % 12)
    }
}

impl TryFrom<u32> for MonthIndex {
    type Error = McProError;

    fn try_from(value: u32) -> McProResult<Self> {
        MonthIndex::new(value)
    }
}

impl From<MonthIndex> for u32 {
    fn from(month: MonthIndex) -> u32 {
        month.0
    }
}

impl fmt::Display for MonthIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A year and month pair, the unit the calendar view navigates by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: MonthIndex,
}

impl YearMonth {
    pub fn new(year: i32, month: MonthIndex) -> Self {
        YearMonth { year, month }
    }

    pub fn of(date: NaiveDate) -> Self {
        YearMonth {
            year: date.year(),
            month: MonthIndex(date.month0()),
        }
    }

    /// Parse "YYYY-MM" (month 01-12).
    pub fn parse(s: &str) -> McProResult<Self> {
        let invalid = || McProError::InvalidDate(format!("'{s}' (expected YYYY-MM)"));

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Ok(YearMonth {
            year,
            month: MonthIndex::from_number(month).map_err(|_| invalid())?,
        })
    }

    pub fn next(self) -> Self {
        if self.month == MonthIndex::DECEMBER {
            YearMonth::new(self.year.saturating_add(1), MonthIndex::JANUARY)
        } else {
            YearMonth::new(self.year, self.month.next())
        }
    }

    pub fn prev(self) -> Self {
        if self.month == MonthIndex::JANUARY {
            YearMonth::new(self.year.saturating_sub(1), MonthIndex::DECEMBER)
        } else {
            YearMonth::new(self.year, self.month.previous())
        }
    }

    /// The first day of this month, if representable.
    pub fn first_day(self) -> McProResult<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.number(), 1)
            .ok_or_else(|| McProError::InvalidDate(format!("{self} is out of range")))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month.number())
    }
}
