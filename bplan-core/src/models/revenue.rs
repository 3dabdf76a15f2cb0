/// Unit price charged up to and including the threshold quantity
pub const BASE_UNIT_PRICE: f64 = 5.5;

/// Discounted unit price charged above the threshold quantity
pub const BULK_UNIT_PRICE: f64 = 5.0;

/// A two-tier pricing schedule
///
/// Every unit is sold at [`BASE_UNIT_PRICE`] while the quantity stays at or
/// below the threshold. Once the threshold is exceeded the whole quantity is
/// billed at [`BULK_UNIT_PRICE`]. Total revenue therefore drops at the
/// threshold: it is intentionally discontinuous there, unlike total cost.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevenueSchedule {
    threshold_quantity: f64,
}

impl RevenueSchedule {
    /// Creates a schedule whose price break sits at `threshold_quantity`
    pub fn new(threshold_quantity: u32) -> Self {
        Self {
            threshold_quantity: f64::from(threshold_quantity),
        }
    }

    /// The unit price applied to an order of `quantity` units
    pub fn unit_price(&self, quantity: f64) -> f64 {
        if quantity <= self.threshold_quantity {
            BASE_UNIT_PRICE
        } else {
            BULK_UNIT_PRICE
        }
    }

    /// Total revenue from selling `quantity` units
    pub fn total_revenue(&self, quantity: f64) -> f64 {
        self.unit_price(quantity) * quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_break_is_after_threshold() {
        let schedule = RevenueSchedule::new(150);
        assert_eq!(schedule.unit_price(150.0), BASE_UNIT_PRICE);
        assert_eq!(schedule.unit_price(150.5), BULK_UNIT_PRICE);
        assert_eq!(schedule.total_revenue(150.0), 825.0);
        assert_eq!(schedule.total_revenue(151.0), 755.0);
    }

    #[test]
    fn test_zero_quantity_earns_nothing() {
        assert_eq!(RevenueSchedule::new(0).total_revenue(0.0), 0.0);
        assert_eq!(RevenueSchedule::new(0).total_revenue(1.0), 5.0);
    }
}
