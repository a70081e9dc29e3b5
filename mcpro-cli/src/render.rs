//! TUI rendering traits for MC Pro types.
//!
//! Extension traits that add colored terminal rendering to mcpro-core types
//! using owo_colors.

use mcpro_core::calendar::{
    CalendarEvent, DayCell, EventCategory, MonthGrid, SeasonTheme, days_with_events, find_events,
};
use mcpro_core::records::{Client, Expense, InventoryItem, Sale, Shipment, Task};
use mcpro_core::timer::format_elapsed;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// "$450" or "$1250.50"
pub fn money(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${amount:.0}")
    } else {
        format!("${amount:.2}")
    }
}

fn id_tag(id: i64) -> String {
    format!("#{id}").dimmed().to_string()
}

impl Render for EventCategory {
    fn render(&self) -> String {
        match self {
            EventCategory::NationalHoliday => "UY".yellow().to_string(),
            EventCategory::MarketingTheme => "CM".magenta().to_string(),
            EventCategory::InternationalObservance => "INT".cyan().to_string(),
        }
    }
}

impl Render for CalendarEvent {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            self.category.render(),
            self.title.bold(),
            format!("({})", self.info).dimmed()
        )
    }
}

impl Render for Sale {
    fn render(&self) -> String {
        format!(
            "{} {}  {}  {}",
            id_tag(self.id),
            self.concepto.bold(),
            money(self.amount).green(),
            self.date.dimmed()
        )
    }
}

impl Render for Expense {
    fn render(&self) -> String {
        format!(
            "{} {}  {}  {}",
            id_tag(self.id),
            self.concepto.bold(),
            format!("-{}", money(self.amount)).red(),
            self.date.dimmed()
        )
    }
}

impl Render for InventoryItem {
    fn render(&self) -> String {
        let value = self
            .stock_value()
            .map(|v| format!("  stock {}", money(v)))
            .unwrap_or_default();
        format!(
            "{} {} x{}{}",
            id_tag(self.id),
            self.nombre.bold(),
            self.cantidad,
            value.dimmed()
        )
    }
}

impl Render for Task {
    fn render(&self) -> String {
        let clock = format_elapsed(self.tiempo);
        let clock = if self.is_running {
            format!("▶ {clock}").green().to_string()
        } else {
            format!("■ {clock}").dimmed().to_string()
        };
        format!("{} {} {}", id_tag(self.id), clock, self.titulo.bold())
    }
}

impl Render for Shipment {
    fn render(&self) -> String {
        let tracking = self.tracking.as_deref().unwrap_or("Sin rastreo");
        let cost = self.costo.map(money).unwrap_or_default();
        format!(
            "{} {}  {} • {}  {}  {}",
            id_tag(self.id),
            self.cliente.bold(),
            self.agencia,
            tracking.dimmed(),
            cost.red(),
            self.date.dimmed()
        )
    }
}

impl Render for Client {
    fn render(&self) -> String {
        let mut line = format!("{} {}", id_tag(self.id), self.nombre.bold());
        if let Some(contact) = &self.contacto {
            line.push_str(&format!("  {contact}"));
        }
        if let Some(notes) = &self.notas {
            line.push_str(&format!("  {}", notes.dimmed()));
        }
        line
    }
}

impl Render for SeasonTheme {
    fn render(&self) -> String {
        let swatches: Vec<String> = self
            .palette
            .iter()
            .map(|hex| match parse_hex(hex) {
                Some((r, g, b)) => format!("{} {}", "    ".on_truecolor(r, g, b), hex.dimmed()),
                None => hex.to_string(),
            })
            .collect();
        format!("Paleta {}\n{}", self.name().bold(), swatches.join("  "))
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

const WEEKDAY_HEADER: [&str; 7] = ["L", "M", "M", "J", "V", "S", "D"];

/// Render the month grid. Event days are colored by their first event's
/// category; `today` (if in this month) is shown inverted.
pub fn render_grid(grid: &MonthGrid, today: Option<u32>) -> String {
    let month = grid.month.month;
    let marked = days_with_events(month);

    let mut lines = Vec::new();
    lines.push(
        format!("{} {}", month.name(), grid.month.year)
            .bold()
            .to_string(),
    );
    lines.push(
        WEEKDAY_HEADER
            .iter()
            .map(|d| format!("{d:>3}"))
            .collect::<String>()
            .dimmed()
            .to_string(),
    );

    for week in grid.weeks() {
        let row: String = week
            .iter()
            .map(|cell| match cell {
                DayCell::Empty => "   ".to_string(),
                DayCell::Day(day) => render_day(*day, today == Some(*day), &marked, grid),
            })
            .collect();
        lines.push(row);
    }

    lines.join("\n")
}

fn render_day(day: u32, is_today: bool, marked: &[u32], grid: &MonthGrid) -> String {
    let label = format!("{day:>3}");
    if is_today {
        return label.reversed().to_string();
    }
    if !marked.contains(&day) {
        return label;
    }

    let first = find_events(day, grid.month.month).first().map(|e| e.category);
    match first {
        Some(EventCategory::NationalHoliday) => label.yellow().to_string(),
        Some(EventCategory::MarketingTheme) => label.magenta().to_string(),
        Some(EventCategory::InternationalObservance) => label.cyan().to_string(),
        None => label,
    }
}
