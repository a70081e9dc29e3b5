use anyhow::Result;
use clap::Subcommand;
use mcpro_core::records::InventoryItem;
use mcpro_core::state::AppState;
use mcpro_core::validate::parse_amount;

use super::{print_list, report_saved};

#[derive(Subcommand)]
pub enum InventoryCommand {
    /// Add a supply
    Add {
        name: String,

        /// Units on hand
        #[arg(short, long, default_value_t = 1)]
        qty: u32,

        /// Cost per unit
        #[arg(short, long)]
        cost: Option<String>,
    },
    /// Change the units on hand
    Set { id: i64, qty: u32 },
    /// List supplies
    List,
    /// Remove a supply by id
    Remove { id: i64 },
}

pub fn run(state: &mut AppState, cmd: InventoryCommand) -> Result<()> {
    match cmd {
        InventoryCommand::Add { name, qty, cost } => {
            let cost = cost.as_deref().map(parse_amount).transpose()?;
            let item = InventoryItem::new(&name, qty, cost)?;
            let message = format!("Supply saved: {} x{}", item.nombre, item.cantidad);
            report_saved(state.inventory_mut().append(item), &message)
        }
        InventoryCommand::Set { id, qty } => {
            let result = state.inventory_mut().modify(id, |item| item.cantidad = qty);
            report_saved(result, &format!("Supply #{id} now has {qty} units"))
        }
        InventoryCommand::List => {
            print_list(state.inventory().iter(), "No supplies yet");
            Ok(())
        }
        InventoryCommand::Remove { id } => {
            let result = state.inventory_mut().remove(id).map(|_| ());
            report_saved(result, &format!("Supply #{id} removed"))
        }
    }
}
