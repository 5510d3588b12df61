//! Energy tank bookkeeping.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An energy tank drained as the wheels run.
///
/// The tank is a plain scalar counter: `consume` never clamps, so the level
/// can go negative if callers skip the [`has_enough`](Self::has_enough)
/// gate.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergySupplier {
    quantity: f64,
}

impl EnergySupplier {
    /// Build a tank holding `quantity` energy units.
    pub const fn new(quantity: f64) -> EnergySupplier {
        EnergySupplier { quantity }
    }

    /// Draw `quantity` from the tank.
    pub fn consume(&mut self, quantity: f64) {
        self.quantity -= quantity;
    }

    /// True when `quantity` is strictly below the remaining level.
    ///
    /// The boundary is exact: a request equal to the remaining level is
    /// refused.
    pub fn has_enough(&self, quantity: f64) -> bool {
        quantity < self.quantity
    }

    /// Remaining energy level.
    pub fn remaining(&self) -> f64 {
        self.quantity
    }
}

impl Default for EnergySupplier {
    /// A full tank of 1000 energy units.
    fn default() -> EnergySupplier {
        EnergySupplier::new(1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume_is_unclamped() {
        let mut supplier = EnergySupplier::new(10.0);
        supplier.consume(4.0);
        assert_eq!(supplier.remaining(), 6.0);
        supplier.consume(10.0);
        assert_eq!(supplier.remaining(), -4.0);
    }

    #[test]
    fn test_has_enough_is_strict() {
        let supplier = EnergySupplier::new(1000.0);
        assert!(supplier.has_enough(999.999));
        // Exactly the remaining level is refused.
        assert!(!supplier.has_enough(1000.0));
        assert!(!supplier.has_enough(1000.001));
    }

    #[test]
    fn test_default_tank() {
        assert_eq!(EnergySupplier::default().remaining(), 1000.0);
    }
}
