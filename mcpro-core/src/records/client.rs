use serde::{Deserialize, Serialize};

use super::today_label;
use crate::constants::CLIENTS_KEY;
use crate::error::McProResult;
use crate::store::{Record, next_id};
use crate::validate::{optional_text, require_text};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub date: String,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacto: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notas: Option<String>,
}

impl Client {
    pub fn new(nombre: &str, contacto: Option<&str>, notas: Option<&str>) -> McProResult<Self> {
        Ok(Client {
            id: next_id(),
            date: today_label(),
            nombre: require_text("nombre", nombre)?,
            contacto: optional_text(contacto),
            notas: optional_text(notas),
        })
    }
}

impl Record for Client {
    const KEY: &'static str = CLIENTS_KEY;

    fn id(&self) -> i64 {
        self.id
    }
}
