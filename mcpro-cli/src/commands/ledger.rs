use anyhow::Result;
use clap::Subcommand;
use mcpro_core::records::{Expense, Sale};
use mcpro_core::state::AppState;
use mcpro_core::validate::parse_amount;
use owo_colors::OwoColorize;

use super::{print_list, report_saved};
use crate::render::money;

#[derive(Subcommand)]
pub enum LedgerCommand {
    /// Add an entry
    Add {
        /// What it was for (product, supply, bill...)
        concept: String,

        /// Amount in pesos ("1250" or "1250,50")
        amount: String,
    },
    /// List entries
    List,
    /// Remove an entry by id
    Remove { id: i64 },
}

pub fn run_sales(state: &mut AppState, cmd: LedgerCommand) -> Result<()> {
    match cmd {
        LedgerCommand::Add { concept, amount } => {
            let sale = Sale::new(&concept, parse_amount(&amount)?)?;
            let message = format!("Sale saved: {} {}", sale.concepto, money(sale.amount));
            report_saved(state.sales_mut().append(sale), &message)
        }
        LedgerCommand::List => {
            print_list(state.sales().iter(), "No sales yet");
            Ok(())
        }
        LedgerCommand::Remove { id } => {
            let result = state.sales_mut().remove(id).map(|_| ());
            report_saved(result, &format!("Sale #{id} removed"))
        }
    }
}

pub fn run_expenses(state: &mut AppState, cmd: LedgerCommand) -> Result<()> {
    match cmd {
        LedgerCommand::Add { concept, amount } => {
            let expense = Expense::new(&concept, parse_amount(&amount)?)?;
            let message = format!("Expense saved: {} {}", expense.concepto, money(expense.amount));
            report_saved(state.expenses_mut().append(expense), &message)
        }
        LedgerCommand::List => {
            print_list(state.expenses().iter(), "No expenses yet");
            Ok(())
        }
        LedgerCommand::Remove { id } => {
            let result = state.expenses_mut().remove(id).map(|_| ());
            report_saved(result, &format!("Expense #{id} removed"))
        }
    }
}

pub fn balance(state: &AppState) -> Result<()> {
    let net = state.net_balance();
    let label = if net < 0.0 {
        format!("-{}", money(-net)).red().to_string()
    } else {
        money(net).green().to_string()
    };

    println!("{} {}", "Caja neta".bold(), label);
    println!(
        "{}",
        format!(
            "{} sales, {} expenses",
            state.sales().len(),
            state.expenses().len()
        )
        .dimmed()
    );

    Ok(())
}
