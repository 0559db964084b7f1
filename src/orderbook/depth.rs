//! Aggregated depth snapshot (the PRINT report).

use std::fmt;

/// Aggregated view of both sides of the book at one instant.
///
/// Each entry is `(price, summed remaining quantity)` for one price
/// level. Sells run best (lowest price) to worst, buys best (highest
/// price) to worst. An empty side contributes no lines.
///
/// ## Example
///
/// ```
/// use matchbook::orderbook::Depth;
///
/// let depth = Depth {
///     sells: vec![(11, 4)],
///     buys: vec![(10, 6), (9, 2)],
/// };
/// assert_eq!(depth.to_string(), "SELL:\n11 4\nBUY:\n10 6\n9 2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Depth {
    /// Sell levels, best (lowest) first
    pub sells: Vec<(u64, u64)>,

    /// Buy levels, best (highest) first
    pub buys: Vec<(u64, u64)>,
}

impl Depth {
    /// Check whether both sides are empty
    pub fn is_empty(&self) -> bool {
        self.sells.is_empty() && self.buys.is_empty()
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SELL:")?;
        for (price, quantity) in &self.sells {
            write!(f, "\n{price} {quantity}")?;
        }
        write!(f, "\nBUY:")?;
        for (price, quantity) in &self.buys {
            write!(f, "\n{price} {quantity}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
