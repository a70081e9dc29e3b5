use std::path::Path;

use anyhow::Result;
use mcpro_core::calendar::{Hemisphere, SeasonModel};
use mcpro_core::config::McProConfig;
use owo_colors::OwoColorize;

use super::report_saved;

pub fn run(
    mut config: McProConfig,
    data_path: &Path,
    hemisphere: Option<Hemisphere>,
    season_model: Option<SeasonModel>,
) -> Result<()> {
    let config_path = McProConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Data:    {}", data_path.display());
    println!();
    println!("{}", "Calendar".bold());
    println!("  Hemisphere:    {:?}", hemisphere.unwrap_or(config.hemisphere));
    println!("  Season model:  {:?}", season_model.unwrap_or(config.season_model));

    if hemisphere.is_none() && season_model.is_none() {
        return Ok(());
    }

    if let Some(h) = hemisphere {
        config.hemisphere = h;
    }
    if let Some(m) = season_model {
        config.season_model = m;
    }

    println!();
    report_saved(config.save(), "Config updated")
}
