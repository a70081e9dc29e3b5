//! Calendar engine: month grids, the fixed annual event table, and the
//! seasonal palette.
//!
//! Everything here is pure. Nothing is persisted.

mod events;
mod grid;
mod month;
mod season;

pub use events::{CalendarEvent, EVENT_TABLE, EventCategory, days_with_events, find_events};
pub use grid::{DayCell, MonthGrid, build_month_grid, days_in_month};
pub use month::{MonthIndex, YearMonth};
pub use season::{Hemisphere, Season, SeasonModel, SeasonTheme, season_for_month};
