use anyhow::Result;
use clap::Subcommand;
use mcpro_core::records::{Agency, Shipment};
use mcpro_core::state::AppState;
use mcpro_core::validate::parse_amount;

use super::{print_list, report_saved};

#[derive(Subcommand)]
pub enum ShipmentCommand {
    /// Log a parcel sent to a client
    Add {
        client: String,

        /// DAC, Mirtrans, Correo or DePunta
        #[arg(short, long, default_value = "DAC")]
        agency: String,

        #[arg(short, long)]
        tracking: Option<String>,

        /// Shipping cost
        #[arg(short, long)]
        cost: Option<String>,
    },
    /// List shipments
    List,
    /// Remove a shipment by id
    Remove { id: i64 },
}

pub fn run(state: &mut AppState, cmd: ShipmentCommand) -> Result<()> {
    match cmd {
        ShipmentCommand::Add {
            client,
            agency,
            tracking,
            cost,
        } => {
            let agency: Agency = agency.parse()?;
            let cost = cost.as_deref().map(parse_amount).transpose()?;
            let shipment = Shipment::new(&client, agency, tracking.as_deref(), cost)?;
            let message = format!("Shipment saved: {} via {}", shipment.cliente, shipment.agencia);
            report_saved(state.shipments_mut().append(shipment), &message)
        }
        ShipmentCommand::List => {
            print_list(state.shipments().iter(), "No shipments yet");
            Ok(())
        }
        ShipmentCommand::Remove { id } => {
            let result = state.shipments_mut().remove(id).map(|_| ());
            report_saved(result, &format!("Shipment #{id} removed"))
        }
    }
}
