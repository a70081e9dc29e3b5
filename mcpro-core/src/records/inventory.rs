use serde::{Deserialize, Serialize};

use super::today_label;
use crate::constants::INVENTORY_KEY;
use crate::error::McProResult;
use crate::store::{Record, next_id};
use crate::validate::{check_amount, require_text};

/// A supply on the shelf (paper, vinyl, mugs...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub date: String,
    pub nombre: String,
    #[serde(default)]
    pub cantidad: u32,
    #[serde(
        default,
        deserialize_with = "super::lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub costo: Option<f64>,
}

impl InventoryItem {
    pub fn new(nombre: &str, cantidad: u32, costo: Option<f64>) -> McProResult<Self> {
        Ok(InventoryItem {
            id: next_id(),
            date: today_label(),
            nombre: require_text("nombre", nombre)?,
            cantidad,
            costo: costo.map(check_amount).transpose()?,
        })
    }

    /// Value of the stock on hand, when the unit cost is known.
    pub fn stock_value(&self) -> Option<f64> {
        self.costo.map(|c| c * f64::from(self.cantidad))
    }
}

impl Record for InventoryItem {
    const KEY: &'static str = INVENTORY_KEY;

    fn id(&self) -> i64 {
        self.id
    }
}
