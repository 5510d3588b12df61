//! Wheel actuation seam.

/// Side-effect sink for per-step wheel displacements.
///
/// Implementations must accept negative lengths (reverse direction).
pub trait Wheel {
    /// Apply one signed displacement step.
    fn run(&mut self, length: f64);
}

/// A wheel that integrates the signed distance it has been commanded.
///
/// Useful as a simulation sink: after a run it reports the total travel of
/// its side of the axle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Odometer {
    travelled: f64,
}

impl Odometer {
    /// A fresh odometer at zero.
    pub const fn new() -> Odometer {
        Odometer { travelled: 0.0 }
    }

    /// Total signed distance commanded so far.
    pub fn travelled(&self) -> f64 {
        self.travelled
    }
}

impl Wheel for Odometer {
    fn run(&mut self, length: f64) {
        self.travelled += length;
    }
}
