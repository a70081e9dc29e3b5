pub mod calendar;
pub mod clients;
pub mod config;
pub mod inventory;
pub mod ledger;
pub mod notes;
pub mod quote;
pub mod settings;
pub mod shipments;
pub mod tasks;

use anyhow::Result;
use mcpro_core::McProError;
use mcpro_core::McProResult;
use owo_colors::OwoColorize;

use crate::render::Render;

/// Report the outcome of a change. A failed save is a warning, not a failure:
/// the user is told the change did not persist and the command still succeeds.
pub fn report_saved(result: McProResult<()>, message: &str) -> Result<()> {
    match result {
        Ok(()) => {
            println!("{} {}", "✓".green(), message);
            Ok(())
        }
        Err(e @ (McProError::Storage { .. } | McProError::Serialization(_))) => {
            log::warn!("event=save_failed error=\"{e}\"");
            eprintln!(
                "{} {} (not saved: {})",
                "!".yellow(),
                message,
                e.to_string().yellow()
            );
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Print every record, or a dimmed placeholder when there are none.
pub fn print_list<'a, T: Render + 'a>(records: impl IntoIterator<Item = &'a T>, empty: &str) {
    let mut any = false;
    for record in records {
        println!("  {}", record.render());
        any = true;
    }
    if !any {
        println!("{}", empty.dimmed());
    }
}
