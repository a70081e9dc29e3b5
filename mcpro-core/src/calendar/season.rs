//! Seasonal theme for the dashboard palette.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::month::MonthIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Hemisphere {
    #[default]
    South,
    North,
}

/// How the year is split into seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeasonModel {
    /// Summer (three months) against everything else.
    #[default]
    SummerWinter,
    /// Four three-month buckets starting in December.
    Quarterly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Summer,
    Autumn,
    Winter,
    Spring,
}

impl Season {
    pub fn name(self) -> &'static str {
        match self {
            Season::Summer => "Verano",
            Season::Autumn => "Otoño",
            Season::Winter => "Invierno",
            Season::Spring => "Primavera",
        }
    }

    pub fn palette(self) -> [&'static str; 4] {
        match self {
            Season::Summer => ["#FFD700", "#FF8C00", "#00BFFF", "#FFFFFF"],
            Season::Autumn => ["#8B4513", "#D2691E", "#DAA520", "#FFF8DC"],
            Season::Winter => ["#191970", "#4169E1", "#87CEEB", "#F0F8FF"],
            Season::Spring => ["#FF69B4", "#98FB98", "#FFE4E1", "#FFFFF0"],
        }
    }

    /// The season on the other side of the equator.
    fn opposite(self) -> Self {
        match self {
            Season::Summer => Season::Winter,
            Season::Autumn => Season::Spring,
            Season::Winter => Season::Summer,
            Season::Spring => Season::Autumn,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonTheme {
    pub season: Season,
    pub palette: [&'static str; 4],
}

impl SeasonTheme {
    pub fn name(&self) -> &'static str {
        self.season.name()
    }
}

/// Season and palette for `month`. Every month maps to exactly one season.
pub fn season_for_month(
    month: MonthIndex,
    hemisphere: Hemisphere,
    model: SeasonModel,
) -> SeasonTheme {
    // Dec-Feb = 0, Mar-May = 1, Jun-Aug = 2, Sep-Nov = 3
    let bucket = (month.index() + 1) % 12 / 3;

    let southern = match (model, bucket) {
        (SeasonModel::SummerWinter, 0) => Season::Summer,
        (SeasonModel::SummerWinter, _) => Season::Winter,
        (SeasonModel::Quarterly, 0) => Season::Summer,
        (SeasonModel::Quarterly, 1) => Season::Autumn,
        (SeasonModel::Quarterly, 2) => Season::Winter,
        (SeasonModel::Quarterly, _) => Season::Spring,
    };

    let season = match (hemisphere, model) {
        (Hemisphere::South, _) => southern,
        (Hemisphere::North, SeasonModel::Quarterly) => southern.opposite(),
        // Northern summer is Jun-Aug; the rest of the year is winter.
        (Hemisphere::North, SeasonModel::SummerWinter) => {
            if bucket == 2 {
                Season::Summer
            } else {
                Season::Winter
            }
        }
    };

    SeasonTheme {
        season,
        palette: season.palette(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(i: u32) -> MonthIndex {
        MonthIndex::new(i).unwrap()
    }

    #[test]
    fn test_southern_summer_winter() {
        for m in [11, 0, 1] {
            let theme = season_for_month(month(m), Hemisphere::South, SeasonModel::SummerWinter);
            assert_eq!(theme.season, Season::Summer);
            assert_eq!(theme.palette, ["#FFD700", "#FF8C00", "#00BFFF", "#FFFFFF"]);
        }
        for m in 2..11 {
            let theme = season_for_month(month(m), Hemisphere::South, SeasonModel::SummerWinter);
            assert_eq!(theme.name(), "Invierno");
        }
    }

    #[test]
    fn test_northern_summer_winter() {
        let july = season_for_month(month(6), Hemisphere::North, SeasonModel::SummerWinter);
        let january = season_for_month(month(0), Hemisphere::North, SeasonModel::SummerWinter);

        assert_eq!(july.season, Season::Summer);
        assert_eq!(january.season, Season::Winter);
    }

    #[test]
    fn test_quarterly_buckets() {
        let expected = [
            Season::Summer,
            Season::Summer,
            Season::Autumn,
            Season::Autumn,
            Season::Autumn,
            Season::Winter,
            Season::Winter,
            Season::Winter,
            Season::Spring,
            Season::Spring,
            Season::Spring,
            Season::Summer,
        ];

        for (m, season) in expected.iter().enumerate() {
            let m = month(m as u32);
            let south = season_for_month(m, Hemisphere::South, SeasonModel::Quarterly);
            let north = season_for_month(m, Hemisphere::North, SeasonModel::Quarterly);
            assert_eq!(south.season, *season, "month {m}");
            assert_eq!(north.season, season.opposite(), "month {m}");
        }
    }
}
