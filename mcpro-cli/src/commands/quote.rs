use anyhow::Result;
use mcpro_core::quote::Quote;
use mcpro_core::state::AppState;
use mcpro_core::validate::parse_amount;
use owo_colors::OwoColorize;

use super::report_saved;
use crate::render::money;

/// `margin_pct` is a percentage (60 = 60%); the saved setting is used when absent.
pub fn run(
    state: &AppState,
    cost: &str,
    qty: u32,
    margin_pct: Option<f64>,
    save: bool,
) -> Result<()> {
    let mut settings = state.settings();
    let margin = margin_pct.map(|p| p / 100.0).unwrap_or(settings.margin);
    let quote = Quote::new(parse_amount(cost)?, qty, margin)?;

    println!("{}", "Cotización".bold());
    println!("  {:<14}{}", "Unit cost", money(quote.unit_cost));
    println!("  {:<14}{}", "Quantity", quote.quantity);
    println!("  {:<14}{:.0}%", "Margin", quote.margin * 100.0);
    println!("  {:<14}{}", "Total cost", money(quote.total_cost()));
    println!("  {:<14}{}", "Unit price", money(quote.unit_price()).green());
    println!(
        "  {:<14}{}",
        "Total price",
        money(quote.total_price()).green().bold()
    );
    println!("  {:<14}{}", "Profit", money(quote.profit()));

    if save {
        settings.margin = quote.margin;
        report_saved(
            state.save_settings(&settings),
            &format!("Default margin set to {:.0}%", quote.margin * 100.0),
        )?;
    }

    Ok(())
}
