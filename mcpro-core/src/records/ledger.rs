//! Sales and expenses.

use serde::{Deserialize, Serialize};

use super::today_label;
use crate::constants::{EXPENSES_KEY, SALES_KEY};
use crate::error::McProResult;
use crate::store::{Record, next_id};
use crate::validate::{check_amount, require_text};

/// Money coming in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    pub date: String,
    pub concepto: String,
    pub amount: f64,
}

impl Sale {
    pub fn new(concepto: &str, amount: f64) -> McProResult<Self> {
        Ok(Sale {
            id: next_id(),
            date: today_label(),
            concepto: require_text("concepto", concepto)?,
            amount: check_amount(amount)?,
        })
    }
}

impl Record for Sale {
    const KEY: &'static str = SALES_KEY;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Money going out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub date: String,
    pub concepto: String,
    pub amount: f64,
}

impl Expense {
    pub fn new(concepto: &str, amount: f64) -> McProResult<Self> {
        Ok(Expense {
            id: next_id(),
            date: today_label(),
            concepto: require_text("concepto", concepto)?,
            amount: check_amount(amount)?,
        })
    }
}

impl Record for Expense {
    const KEY: &'static str = EXPENSES_KEY;

    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_reads_stored_shape() {
        let json = r#"{"id":1767225600000,"date":"1/1/2026","concepto":"Taza","amount":450}"#;

        let sale: Sale = serde_json::from_str(json).unwrap();

        assert_eq!(sale.concepto, "Taza");
        assert_eq!(sale.amount, 450.0);
    }

    #[test]
    fn test_new_rejects_blank_concept_and_negative_amount() {
        assert!(Sale::new("  ", 10.0).is_err());
        assert!(Expense::new("Luz", -1.0).is_err());
    }

    #[test]
    fn test_new_assigns_distinct_ids() {
        let a = Expense::new("Luz", 1200.0).unwrap();
        let b = Expense::new("Agua", 800.0).unwrap();

        assert!(b.id > a.id);
    }
}
