mod commands;
mod logging;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mcpro_core::calendar::{Hemisphere, SeasonModel};
use mcpro_core::config::McProConfig;
use mcpro_core::state::AppState;
use mcpro_core::store::PersistedStore;

#[derive(Parser)]
#[command(name = "mcpro")]
#[command(
    about = "Run the studio from the terminal: sales, stock, workshop timer, shipments and calendar"
)]
struct Cli {
    /// Read and write records here instead of the configured data_dir
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month grid with event days highlighted
    Calendar {
        /// Month to show (YYYY-MM). Defaults to the current month.
        #[arg(short, long)]
        month: Option<String>,
    },
    /// List events for a day
    Events {
        /// Day of the month
        day: Option<u32>,

        /// Month number (1-12)
        month: Option<u32>,

        /// Full date (YYYY-MM-DD) instead of DAY MONTH
        #[arg(long, conflicts_with_all = ["day", "month"])]
        date: Option<String>,
    },
    /// Show the seasonal palette
    Season {
        /// Month number (1-12). Defaults to the current month.
        #[arg(short, long)]
        month: Option<u32>,

        #[arg(long, value_enum)]
        model: Option<ModelArg>,
    },
    /// Net cash: sales minus expenses
    Balance,
    /// Price a batch from its unit cost
    Quote {
        /// Cost of one unit
        #[arg(short, long)]
        cost: String,

        #[arg(short, long, default_value_t = 1)]
        qty: u32,

        /// Markup over cost, in percent. Defaults to the saved margin.
        #[arg(short, long)]
        margin: Option<f64>,

        /// Remember --margin as the default
        #[arg(long, requires = "margin")]
        save: bool,
    },
    /// Record money coming in
    #[command(subcommand)]
    Sale(commands::ledger::LedgerCommand),
    /// Record money going out
    #[command(subcommand)]
    Expense(commands::ledger::LedgerCommand),
    /// Track supplies on hand
    #[command(subcommand)]
    Inventory(commands::inventory::InventoryCommand),
    /// Workshop jobs and their stopwatch
    #[command(subcommand)]
    Task(commands::tasks::TaskCommand),
    /// Parcels sent to clients
    #[command(subcommand)]
    Shipment(commands::shipments::ShipmentCommand),
    #[command(subcommand)]
    Client(commands::clients::ClientCommand),
    /// Personal notes pinned to calendar days
    #[command(subcommand)]
    Note(commands::notes::NoteCommand),
    /// Show paths and calendar settings, or change them
    Config {
        #[arg(long, value_enum)]
        hemisphere: Option<HemisphereArg>,

        #[arg(long, value_enum)]
        season_model: Option<ModelArg>,
    },
    /// Show or change the dark mode preference
    DarkMode {
        #[arg(value_enum)]
        value: Option<commands::settings::Toggle>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum HemisphereArg {
    South,
    North,
}

impl From<HemisphereArg> for Hemisphere {
    fn from(arg: HemisphereArg) -> Self {
        match arg {
            HemisphereArg::South => Hemisphere::South,
            HemisphereArg::North => Hemisphere::North,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ModelArg {
    SummerWinter,
    Quarterly,
}

impl From<ModelArg> for SeasonModel {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::SummerWinter => SeasonModel::SummerWinter,
            ModelArg::Quarterly => SeasonModel::Quarterly,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = McProConfig::load()?;
    let _logger = logging::init(&config.log_level)?;

    let data_path = cli.data_dir.unwrap_or_else(|| config.data_path());
    log::debug!("event=cli_start data_dir={}", data_path.display());

    let open_state = || -> Result<AppState> {
        Ok(AppState::load(PersistedStore::open_dir(&data_path)?))
    };

    match cli.command {
        Commands::Calendar { month } => commands::calendar::grid(month.as_deref()),
        Commands::Events { day, month, date } => {
            commands::calendar::events(day, month, date.as_deref())
        }
        Commands::Season { month, model } => commands::calendar::season(
            month,
            config.hemisphere,
            model.map(Into::into).unwrap_or(config.season_model),
        ),
        Commands::Config {
            hemisphere,
            season_model,
        } => commands::config::run(
            config,
            &data_path,
            hemisphere.map(Into::into),
            season_model.map(Into::into),
        ),
        Commands::Balance => commands::ledger::balance(&open_state()?),
        Commands::Quote {
            cost,
            qty,
            margin,
            save,
        } => commands::quote::run(&open_state()?, &cost, qty, margin, save),
        Commands::Sale(cmd) => commands::ledger::run_sales(&mut open_state()?, cmd),
        Commands::Expense(cmd) => commands::ledger::run_expenses(&mut open_state()?, cmd),
        Commands::Inventory(cmd) => commands::inventory::run(&mut open_state()?, cmd),
        Commands::Task(cmd) => commands::tasks::run(&mut open_state()?, cmd).await,
        Commands::Shipment(cmd) => commands::shipments::run(&mut open_state()?, cmd),
        Commands::Client(cmd) => commands::clients::run(&mut open_state()?, cmd),
        Commands::Note(cmd) => commands::notes::run(&open_state()?, cmd),
        Commands::DarkMode { value } => commands::settings::dark_mode(&open_state()?, value),
    }
}
