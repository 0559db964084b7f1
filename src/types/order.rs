//! Order types for the matching engine.
//!
//! ## Identity and Lifecycle
//!
//! Orders are identified by a client-supplied string id which must be
//! unique among *active* orders; once an order leaves the book (filled,
//! cancelled, replaced) its id may be reused for a brand-new order.
//!
//! An order is active iff it is indexed by the book and `remaining > 0`.
//! Quantity bookkeeping never goes negative: fills are clamped to the
//! remaining amount.

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Buy or Sell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Buy order (bid) - wants to purchase the asset
    #[default]
    Buy,
    /// Sell order (ask) - wants to sell the asset
    Sell,
}

impl Side {
    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

// ============================================================================
// TimeInForce enum
// ============================================================================

/// How unfilled residual quantity is handled after matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeInForce {
    /// Immediate-or-cancel: residual quantity is discarded, never rests
    Ioc,
    /// Good-for-day: residual quantity rests on the book
    #[default]
    Gfd,
}

// ============================================================================
// Order struct
// ============================================================================

/// A limit order.
///
/// Prices and quantities are positive integers; there is no tick or lot
/// scaling at this layer. `remaining` starts equal to `quantity` and is
/// decremented as the order fills.
///
/// ## Example
///
/// ```
/// use matchbook::types::{Order, Side};
///
/// let order = Order::new("A1", Side::Buy, 10, 5);
/// assert_eq!(order.remaining, 5);
/// assert!(order.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Order {
    /// Client-supplied order identifier (unique while active)
    pub id: String,

    /// Buy or Sell
    pub side: Side,

    /// Limit price - the worst price this order will trade at
    pub price: u64,

    /// Original quantity
    pub quantity: u64,

    /// Remaining quantity (for partial fills)
    pub remaining: u64,
}

impl Order {
    /// Create a new limit order with `remaining == quantity`.
    pub fn new(id: impl Into<String>, side: Side, price: u64, quantity: u64) -> Self {
        Self {
            id: id.into(),
            side,
            price,
            quantity,
            remaining: quantity,
        }
    }

    /// Check whether the order is acceptable for the book: non-empty id,
    /// positive price, positive remaining quantity.
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty() && self.price > 0 && self.remaining > 0
    }

    /// Check if the order is fully filled
    pub fn is_filled(&self) -> bool {
        self.remaining == 0
    }

    /// Get the filled quantity
    pub fn filled_quantity(&self) -> u64 {
        self.quantity.saturating_sub(self.remaining)
    }

    /// Fill a portion of this order.
    ///
    /// # Returns
    ///
    /// The actual quantity filled (clamped to what remains).
    pub fn fill(&mut self, fill_qty: u64) -> u64 {
        let actual_fill = fill_qty.min(self.remaining);
        self.remaining -= actual_fill;
        actual_fill
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
