//! Trade event representing an executed match between two orders.
//!
//! ## Price Reporting
//!
//! A trade carries both legs' prices: the resting leg reports the
//! resting order's limit price, the incoming leg reports the incoming
//! order's limit price. No single clearing price is invented - when the
//! two limits differ, the event preserves the asymmetry.

use std::fmt;

/// A trade is a single match between a resting order (already in the
/// book) and an incoming order (the one currently being processed).
///
/// ## Example
///
/// ```
/// use matchbook::types::Trade;
///
/// let trade = Trade::new("A1", 10, "B1", 9, 5);
/// assert_eq!(trade.to_string(), "TRADE A1 10 5 B1 9 5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trade {
    /// Id of the resting order
    pub resting_id: String,

    /// Limit price of the resting order
    pub resting_price: u64,

    /// Id of the incoming order
    pub incoming_id: String,

    /// Limit price of the incoming order
    pub incoming_price: u64,

    /// Executed quantity (same for both legs)
    pub quantity: u64,
}

impl Trade {
    /// Create a new trade event.
    pub fn new(
        resting_id: impl Into<String>,
        resting_price: u64,
        incoming_id: impl Into<String>,
        incoming_price: u64,
        quantity: u64,
    ) -> Self {
        Self {
            resting_id: resting_id.into(),
            resting_price,
            incoming_id: incoming_id.into(),
            incoming_price,
            quantity,
        }
    }
}

impl fmt::Display for Trade {
    /// Render the wire line: `TRADE <restingId> <restingPrice> <qty> <incomingId> <incomingPrice> <qty>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TRADE {} {} {} {} {} {}",
            self.resting_id,
            self.resting_price,
            self.quantity,
            self.incoming_id,
            self.incoming_price,
            self.quantity
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
