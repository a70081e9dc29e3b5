//! The fixed annual event table: Uruguayan holidays plus the "day of"
//! prompts the studio uses for social media posts.

use std::fmt;

use super::month::MonthIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    NationalHoliday,
    MarketingTheme,
    InternationalObservance,
}

impl EventCategory {
    pub fn label(self) -> &'static str {
        match self {
            EventCategory::NationalHoliday => "national-holiday",
            EventCategory::MarketingTheme => "marketing-theme",
            EventCategory::InternationalObservance => "international-observance",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A reference date. Static, never persisted or edited at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub day: u32,
    pub month: MonthIndex,
    pub title: &'static str,
    pub category: EventCategory,
    pub info: &'static str,
}

const fn event(
    day: u32,
    month: u32,
    title: &'static str,
    category: EventCategory,
    info: &'static str,
) -> CalendarEvent {
    CalendarEvent {
        day,
        month: MonthIndex::literal(month),
        title,
        category,
        info,
    }
}

use EventCategory::{
    InternationalObservance as Intl, MarketingTheme as Theme, NationalHoliday as Holiday,
};

/// Declaration order is the order matches are returned in.
pub static EVENT_TABLE: &[CalendarEvent] = &[
    event(1, 0, "Año Nuevo", Holiday, "Feriado Nacional"),
    event(6, 0, "Reyes", Holiday, "Laborable"),
    event(25, 0, "Día Publicidad", Theme, "Promociones"),
    event(13, 1, "Día Radio", Theme, "Audio"),
    event(14, 1, "San Valentín", Theme, "Enamorados"),
    event(20, 1, "Día Gato", Theme, "Mascotas"),
    event(8, 2, "Día Mujer", Intl, "Concientización"),
    event(15, 2, "Día Consumidor", Theme, "Promos"),
    event(20, 2, "Felicidad", Intl, "Positivismo"),
    event(27, 2, "Teatro", Theme, "Cultura"),
    event(15, 3, "Día Arte", Theme, "Creatividad"),
    event(19, 3, "33 Orientales", Holiday, "Laborable"),
    event(23, 3, "Día Libro", Intl, "Lectura"),
    event(27, 3, "Diseño Gráfico", Theme, "¡Tu día!"),
    event(1, 4, "Día Trabajador", Holiday, "No Laborable"),
    event(4, 4, "Star Wars", Theme, "May the 4th"),
    event(17, 4, "Internet", Theme, "Online"),
    event(18, 4, "Batalla Piedras", Holiday, "Laborable"),
    event(19, 5, "Natalicio Artigas", Holiday, "Laborable"),
    event(30, 5, "Redes Sociales", Theme, "Digital"),
    event(17, 6, "Emoji", Theme, "Interacción"),
    event(18, 6, "Jura Constitución", Holiday, "No Laborable"),
    event(21, 6, "Día Perro", Theme, "Mascotas"),
    event(19, 7, "Fotografía", Theme, "Visual"),
    event(25, 7, "Independencia", Holiday, "No Laborable"),
    event(29, 7, "Gamer", Theme, "Gaming"),
    event(27, 8, "Turismo", Theme, "Piriápolis"),
    event(1, 9, "Café", Theme, "Lifestyle"),
    event(12, 9, "Día Raza", Holiday, "Laborable"),
    event(31, 9, "Halloween", Theme, "Terror"),
    event(2, 10, "Difuntos", Holiday, "Laborable"),
    event(30, 10, "Influencer", Theme, "Colabs"),
    event(25, 11, "Navidad", Holiday, "No Laborable"),
];

/// All events on `day` of `month`, in table order. Empty when none match.
pub fn find_events(day: u32, month: MonthIndex) -> Vec<&'static CalendarEvent> {
    EVENT_TABLE
        .iter()
        .filter(|e| e.day == day && e.month == month)
        .collect()
}

/// Distinct days of `month` that have at least one event, ascending.
pub fn days_with_events(month: MonthIndex) -> Vec<u32> {
    let mut days: Vec<u32> = EVENT_TABLE
        .iter()
        .filter(|e| e.month == month)
        .map(|e| e.day)
        .collect();
    days.sort_unstable();
    days.dedup();
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(i: u32) -> MonthIndex {
        MonthIndex::new(i).unwrap()
    }

    #[test]
    fn test_christmas_is_single_national_holiday() {
        let found = find_events(25, MonthIndex::DECEMBER);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Navidad");
        assert_eq!(found[0].category, EventCategory::NationalHoliday);
    }

    #[test]
    fn test_day_without_events_is_empty() {
        assert!(find_events(2, MonthIndex::JANUARY).is_empty());
        assert!(find_events(0, MonthIndex::JANUARY).is_empty());
        assert!(find_events(40, MonthIndex::DECEMBER).is_empty());
    }

    #[test]
    fn test_same_day_different_month_does_not_match() {
        let found = find_events(25, MonthIndex::JANUARY);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Día Publicidad");
    }

    #[test]
    fn test_matches_keep_table_order() {
        for e in EVENT_TABLE {
            let found = find_events(e.day, e.month);
            let positions: Vec<usize> = found
                .iter()
                .map(|f| EVENT_TABLE.iter().position(|t| t == *f).unwrap())
                .collect();
            let mut sorted = positions.clone();
            sorted.sort_unstable();
            assert_eq!(positions, sorted);
        }
    }

    #[test]
    fn test_table_days_exist_in_their_month() {
        for e in EVENT_TABLE {
            let max = crate::calendar::days_in_month(2028, e.month).unwrap();
            assert!((1..=max).contains(&e.day), "{} {}", e.title, e.day);
        }
    }

    #[test]
    fn test_days_with_events_for_april() {
        assert_eq!(days_with_events(month(3)), vec![15, 19, 23, 27]);
    }
}
