//! Typed user records. One list per record type, each under its own key.

mod client;
mod inventory;
mod ledger;
mod shipment;
mod task;

pub use client::Client;
pub use inventory::InventoryItem;
pub use ledger::{Expense, Sale};
pub use shipment::{Agency, Shipment};
pub use task::Task;

use chrono::Local;
use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::validate::optional_text;

/// Creation date label in the studio's local format (DD/MM/YYYY).
pub fn today_label() -> String {
    Local::now().format("%d/%m/%Y").to_string()
}

/// Optional text field where older saves store "not set" as `""`.
pub(crate) fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let raw = Option::<String>::deserialize(d)?;
    Ok(optional_text(raw.as_deref()))
}

/// Optional money field that older saves may hold as a number, a numeric
/// string, or an empty string.
pub(crate) fn lenient_amount<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(d)? {
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Raw::Text(s)) => s
            .trim()
            .replace(',', ".")
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("'{s}' is not a number"))),
        None => Ok(None),
    }
}
