use std::future::Future;
use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use clap::Subcommand;
use mcpro_core::records::Task;
use mcpro_core::state::AppState;
use mcpro_core::timer::format_elapsed;
use owo_colors::OwoColorize;

use super::{print_list, report_saved};

#[derive(Subcommand)]
pub enum TaskCommand {
    /// Add a workshop job
    Add { title: String },
    /// Start the stopwatch of a job
    Start { id: i64 },
    /// Pause the stopwatch of a job
    Stop { id: i64 },
    /// List jobs and their elapsed time
    List,
    /// Remove a job by id
    Remove { id: i64 },
    /// Keep the clock and running stopwatches ticking until Ctrl-C
    Watch,
}

pub async fn run(state: &mut AppState, cmd: TaskCommand) -> Result<()> {
    match cmd {
        TaskCommand::Add { title } => {
            let task = Task::new(&title)?;
            let message = format!("Task saved: #{} {}", task.id, task.titulo);
            report_saved(state.tasks_mut().append(task), &message)
        }
        TaskCommand::Start { id } => {
            report_saved(state.start_task(id), &format!("Task #{id} started"))
        }
        TaskCommand::Stop { id } => {
            report_saved(state.stop_task(id), &format!("Task #{id} paused"))
        }
        TaskCommand::List => {
            print_list(state.tasks().iter(), "No tasks yet");
            Ok(())
        }
        TaskCommand::Remove { id } => {
            let result = state.tasks_mut().remove(id).map(|_| ());
            report_saved(result, &format!("Task #{id} removed"))
        }
        TaskCommand::Watch => watch(state, tokio::signal::ctrl_c()).await,
    }
}

/// Tick once per second until `stop` resolves: refresh the clock and advance
/// running tasks. The first tick lands one second after start.
async fn watch<F: Future>(state: &mut AppState, stop: F) -> Result<()> {
    let period = Duration::from_secs(1);
    let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
    let mut warned = false;
    tokio::pin!(stop);

    println!("{}", "Ctrl-C to stop".dimmed());

    loop {
        tokio::select! {
            _ = interval.tick() => {}
            _ = &mut stop => break,
        }

        if let Err(e) = state.tick_tasks() {
            // Keep ticking in memory; warn once so the line isn't flooded.
            log::warn!("event=tick_save_failed error=\"{e}\"");
            if !warned {
                eprintln!(
                    "\n{} timer not saved: {}",
                    "!".yellow(),
                    e.to_string().yellow()
                );
                warned = true;
            }
        }

        print!("\r{}", status_line(state));
        std::io::stdout().flush()?;
    }

    println!();
    Ok(())
}

fn status_line(state: &AppState) -> String {
    let clock = Local::now().format("%H:%M:%S").to_string();
    let running: Vec<String> = state
        .tasks()
        .iter()
        .filter(|t| t.is_running)
        .map(|t| format!("{} {}", t.titulo, format_elapsed(t.tiempo).green()))
        .collect();

    if running.is_empty() {
        format!("{}  {}", clock.bold(), "no running tasks".dimmed())
    } else {
        format!("{}  {}", clock.bold(), running.join("  "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcpro_core::store::PersistedStore;

    fn state_with_running_task() -> (AppState, i64) {
        let mut state = AppState::load(PersistedStore::in_memory());
        let task = Task::new("Stickers").unwrap();
        let id = task.id;
        state.tasks_mut().append(task).unwrap();
        state.start_task(id).unwrap();
        (state, id)
    }

    #[tokio::test(start_paused = true)]
    async fn test_watch_first_tick_after_one_second() {
        let (mut state, id) = state_with_running_task();

        watch(&mut state, tokio::time::sleep(Duration::from_millis(1500)))
            .await
            .unwrap();

        assert_eq!(state.tasks().get(id).unwrap().tiempo, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_watch_stops_before_first_tick() {
        let (mut state, id) = state_with_running_task();

        watch(&mut state, tokio::time::sleep(Duration::from_millis(500)))
            .await
            .unwrap();

        assert_eq!(state.tasks().get(id).unwrap().tiempo, 0);
    }
}
