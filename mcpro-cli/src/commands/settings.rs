use anyhow::Result;
use mcpro_core::state::AppState;

use super::report_saved;

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

pub fn dark_mode(state: &AppState, value: Option<Toggle>) -> Result<()> {
    match value {
        None => {
            let current = if state.dark_mode() { "on" } else { "off" };
            println!("Dark mode is {current}");
            Ok(())
        }
        Some(toggle) => {
            let enabled = matches!(toggle, Toggle::On);
            let label = if enabled { "on" } else { "off" };
            report_saved(state.set_dark_mode(enabled), &format!("Dark mode {label}"))
        }
    }
}
