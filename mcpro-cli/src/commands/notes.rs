use anyhow::Result;
use chrono::Datelike;
use clap::Subcommand;
use mcpro_core::calendar::{MonthIndex, find_events};
use mcpro_core::state::{AppState, parse_date};
use owo_colors::OwoColorize;

use super::report_saved;
use crate::render::Render;

#[derive(Subcommand)]
pub enum NoteCommand {
    /// Pin a note to a day (empty text deletes it)
    Set {
        /// YYYY-MM-DD
        date: String,
        text: String,
    },
    /// Show the note and events for a day
    Get {
        /// YYYY-MM-DD
        date: String,
    },
    /// List all notes in date order
    List,
}

pub fn run(state: &AppState, cmd: NoteCommand) -> Result<()> {
    match cmd {
        NoteCommand::Set { date, text } => {
            let date = parse_date(&date)?;
            let message = if text.trim().is_empty() {
                format!("Note for {date} deleted")
            } else {
                format!("Note for {date} saved")
            };
            report_saved(state.set_note(date, &text), &message)
        }
        NoteCommand::Get { date } => {
            let date = parse_date(&date)?;
            println!("{}", date.to_string().bold());

            for event in find_events(date.day(), MonthIndex::new(date.month0())?) {
                println!("  {}", event.render());
            }

            match state.note(date) {
                Some(note) => println!("  {note}"),
                None => println!("  {}", "No note".dimmed()),
            }
            Ok(())
        }
        NoteCommand::List => {
            let notes = state.notes();
            if notes.is_empty() {
                println!("{}", "No notes yet".dimmed());
            }
            for (date, note) in notes {
                println!("  {}  {}", date.dimmed(), note);
            }
            Ok(())
        }
    }
}
