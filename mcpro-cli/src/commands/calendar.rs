use anyhow::Result;
use chrono::{Datelike, Local};
use mcpro_core::calendar::{
    Hemisphere, MonthIndex, SeasonModel, YearMonth, build_month_grid, find_events,
    season_for_month,
};
use mcpro_core::state::parse_date;
use owo_colors::OwoColorize;

use crate::render::{Render, render_grid};

pub fn grid(month: Option<&str>) -> Result<()> {
    let today = Local::now().date_naive();
    let shown = match month {
        Some(s) => YearMonth::parse(s)?,
        None => YearMonth::of(today),
    };

    let grid = build_month_grid(shown.year, shown.month)?;
    let today_in_view = (YearMonth::of(today) == shown).then(|| today.day());

    println!("{}", render_grid(&grid, today_in_view));
    println!();
    println!(
        "{} {}  {} {}  {} {}",
        "■".yellow(),
        "feriado".dimmed(),
        "■".magenta(),
        "marketing".dimmed(),
        "■".cyan(),
        "internacional".dimmed()
    );

    Ok(())
}

pub fn events(day: Option<u32>, month: Option<u32>, date: Option<&str>) -> Result<()> {
    let today = Local::now().date_naive();

    let (day, month) = match (date, day, month) {
        (Some(d), _, _) => {
            let date = parse_date(d)?;
            (date.day(), MonthIndex::new(date.month0())?)
        }
        (None, Some(day), Some(month)) => (day, MonthIndex::from_number(month)?),
        (None, Some(day), None) => (day, MonthIndex::new(today.month0())?),
        (None, None, _) => (today.day(), MonthIndex::new(today.month0())?),
    };

    let found = find_events(day, month);
    let heading = format!("{} de {}", day, month.name());

    if found.is_empty() {
        println!("{}", format!("No events on {heading}").dimmed());
        return Ok(());
    }

    println!("{}", heading.bold());
    for event in found {
        println!("  {}", event.render());
    }

    Ok(())
}

pub fn season(month: Option<u32>, hemisphere: Hemisphere, model: SeasonModel) -> Result<()> {
    let month = match month {
        Some(m) => MonthIndex::from_number(m)?,
        None => MonthIndex::new(Local::now().date_naive().month0())?,
    };

    let theme = season_for_month(month, hemisphere, model);
    println!("{}", theme.render());

    Ok(())
}
