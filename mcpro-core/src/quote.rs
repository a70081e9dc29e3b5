//! Pricing calculator.

use crate::error::{McProError, McProResult};
use crate::validate::check_amount;

/// A price quote for `quantity` units made at `unit_cost` each, sold with
/// `margin` markup over cost (1.0 = 100%).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub unit_cost: f64,
    pub quantity: u32,
    pub margin: f64,
}

impl Quote {
    pub fn new(unit_cost: f64, quantity: u32, margin: f64) -> McProResult<Self> {
        let unit_cost = check_amount(unit_cost)?;
        if quantity == 0 {
            return Err(McProError::InvalidInput("quantity must be at least 1".into()));
        }
        if !margin.is_finite() || margin < 0.0 {
            return Err(McProError::InvalidInput(format!(
                "margin {margin} must be zero or positive"
            )));
        }

        Ok(Quote {
            unit_cost,
            quantity,
            margin,
        })
    }

    pub fn total_cost(&self) -> f64 {
        self.unit_cost * f64::from(self.quantity)
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_cost * (1.0 + self.margin)
    }

    pub fn total_price(&self) -> f64 {
        self.unit_price() * f64::from(self.quantity)
    }

    pub fn profit(&self) -> f64 {
        self.total_price() - self.total_cost()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_arithmetic() {
        let quote = Quote::new(120.0, 10, 1.0).unwrap();

        assert_eq!(quote.total_cost(), 1200.0);
        assert_eq!(quote.unit_price(), 240.0);
        assert_eq!(quote.total_price(), 2400.0);
        assert_eq!(quote.profit(), 1200.0);
    }

    #[test]
    fn test_zero_margin_sells_at_cost() {
        let quote = Quote::new(50.0, 3, 0.0).unwrap();

        assert_eq!(quote.total_price(), quote.total_cost());
        assert_eq!(quote.profit(), 0.0);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(Quote::new(-1.0, 1, 1.0).is_err());
        assert!(Quote::new(10.0, 0, 1.0).is_err());
        assert!(Quote::new(10.0, 1, -0.5).is_err());
        assert!(Quote::new(f64::NAN, 1, 1.0).is_err());
    }
}
