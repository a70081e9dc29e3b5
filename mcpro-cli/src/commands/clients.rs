use anyhow::Result;
use clap::Subcommand;
use mcpro_core::records::Client;
use mcpro_core::state::AppState;

use super::{print_list, report_saved};

#[derive(Subcommand)]
pub enum ClientCommand {
    /// Add a client
    Add {
        name: String,

        /// Phone, email or Instagram handle
        #[arg(short, long)]
        contact: Option<String>,

        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List clients
    List,
    /// Remove a client by id
    Remove { id: i64 },
}

pub fn run(state: &mut AppState, cmd: ClientCommand) -> Result<()> {
    match cmd {
        ClientCommand::Add {
            name,
            contact,
            notes,
        } => {
            let client = Client::new(&name, contact.as_deref(), notes.as_deref())?;
            let message = format!("Client saved: {}", client.nombre);
            report_saved(state.clients_mut().append(client), &message)
        }
        ClientCommand::List => {
            print_list(state.clients().iter(), "No clients yet");
            Ok(())
        }
        ClientCommand::Remove { id } => {
            let result = state.clients_mut().remove(id).map(|_| ());
            report_saved(result, &format!("Client #{id} removed"))
        }
    }
}
