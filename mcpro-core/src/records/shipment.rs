use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::today_label;
use crate::constants::SHIPMENTS_KEY;
use crate::error::{McProError, McProResult};
use crate::store::{Record, next_id};
use crate::validate::{check_amount, optional_text, require_text};

/// Courier used for a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Agency {
    #[default]
    #[serde(rename = "DAC")]
    Dac,
    Mirtrans,
    /// Correo Uruguayo
    Correo,
    DePunta,
}

impl Agency {
    pub const ALL: [Agency; 4] = [Agency::Dac, Agency::Mirtrans, Agency::Correo, Agency::DePunta];

    pub fn code(self) -> &'static str {
        match self {
            Agency::Dac => "DAC",
            Agency::Mirtrans => "Mirtrans",
            Agency::Correo => "Correo",
            Agency::DePunta => "DePunta",
        }
    }
}

impl fmt::Display for Agency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Agency::Correo => write!(f, "Correo Uruguayo"),
            other => write!(f, "{}", other.code()),
        }
    }
}

impl FromStr for Agency {
    type Err = McProError;

    fn from_str(s: &str) -> McProResult<Self> {
        Agency::ALL
            .into_iter()
            .find(|a| a.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let known: Vec<_> = Agency::ALL.iter().map(|a| a.code()).collect();
                McProError::InvalidInput(format!(
                    "unknown agency '{s}' (expected one of: {})",
                    known.join(", ")
                ))
            })
    }
}

/// A parcel sent to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: i64,
    pub date: String,
    pub cliente: String,
    #[serde(default)]
    pub agencia: Agency,
    #[serde(
        default,
        deserialize_with = "super::lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub tracking: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub costo: Option<f64>,
}

impl Shipment {
    pub fn new(
        cliente: &str,
        agencia: Agency,
        tracking: Option<&str>,
        costo: Option<f64>,
    ) -> McProResult<Self> {
        Ok(Shipment {
            id: next_id(),
            date: today_label(),
            cliente: require_text("cliente", cliente)?,
            agencia,
            tracking: optional_text(tracking),
            costo: costo.map(check_amount).transpose()?,
        })
    }
}

impl Record for Shipment {
    const KEY: &'static str = SHIPMENTS_KEY;

    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agency_parse_is_case_insensitive() {
        assert_eq!("dac".parse::<Agency>().unwrap(), Agency::Dac);
        assert_eq!("DePunta".parse::<Agency>().unwrap(), Agency::DePunta);
        assert!("UPS".parse::<Agency>().is_err());
    }

    #[test]
    fn test_reads_stored_shape() {
        let json = r#"{"id":5,"date":"3/2/2026","cliente":"Ana","agencia":"DAC","tracking":"",
            "costo":180}"#;

        let shipment: Shipment = serde_json::from_str(json).unwrap();

        assert_eq!(shipment.agencia, Agency::Dac);
        assert_eq!(shipment.costo, Some(180.0));
        assert_eq!(shipment.tracking, None);
    }

    #[test]
    fn test_empty_cost_string_reads_as_none() {
        let json = r#"{"id":6,"date":"3/2/2026","cliente":"Luis","agencia":"Mirtrans","costo":""}"#;

        let shipment: Shipment = serde_json::from_str(json).unwrap();

        assert_eq!(shipment.costo, None);
        assert_eq!(shipment.agencia, Agency::Mirtrans);
    }

    #[test]
    fn test_blank_tracking_is_dropped() {
        let shipment = Shipment::new("Ana", Agency::Correo, Some("  "), None).unwrap();

        assert_eq!(shipment.tracking, None);
        assert_eq!(shipment.agencia.to_string(), "Correo Uruguayo");
    }
}
