//! Price-time priority matching.
//!
//! ## Algorithm
//!
//! An incoming order scans the opposite side's levels in best-first
//! order, filling against resting orders in FIFO order within each
//! level, until its quantity is exhausted or no further level crosses.
//! The scan is planned against an immutable view of the book, then the
//! fills are applied and fully-filled resting orders are removed in a
//! deferred pass, so removal never invalidates the structures being
//! scanned.
//!
//! ## Trade Reporting
//!
//! One [`Trade`] per fill, in the exact order the fills occur. Each leg
//! reports its own limit price.

use tracing::{debug, trace};

use crate::orderbook::OrderBook;
use crate::types::{Order, Side, TimeInForce, Trade};

// ============================================================================
// Crossing predicates
// ============================================================================
// One scan routine is shared by both sides; the side only selects the
// predicate comparing a resting level's price to the incoming limit.

/// A buy crosses a sell level when the level asks no more than the limit
fn buy_crosses(level_price: u64, limit: u64) -> bool {
    level_price <= limit
}

/// A sell crosses a buy level when the level bids at least the limit
fn sell_crosses(level_price: u64, limit: u64) -> bool {
    level_price >= limit
}

/// A planned fill against one resting order
struct Fill {
    /// Slab key of the resting order
    key: usize,
    /// Quantity to execute
    quantity: u64,
}

// ============================================================================
// MatchResult
// ============================================================================

/// Outcome of processing one incoming order.
#[derive(Debug, Default)]
pub struct MatchResult {
    /// Trades executed, in match order
    pub trades: Vec<Trade>,

    /// True if the incoming order's quantity was fully executed
    pub fully_filled: bool,

    /// True if a residual of the incoming order now rests on the book
    pub rested: bool,
}

impl MatchResult {
    /// Result for an order that was dropped without touching the book
    fn ignored() -> Self {
        Self::default()
    }
}

// ============================================================================
// MatchingEngine
// ============================================================================

/// Orchestrates insert, cancel and modify against an [`OrderBook`].
///
/// The engine is single-threaded: each operation runs to completion,
/// including trade emission and cleanup, before the next command.
///
/// ## Example
///
/// ```
/// use matchbook::engine::MatchingEngine;
/// use matchbook::orderbook::OrderBook;
/// use matchbook::types::{Order, Side, TimeInForce};
///
/// let mut book = OrderBook::with_capacity(1000);
/// let mut engine = MatchingEngine::new();
///
/// engine.match_order(&mut book, Order::new("A1", Side::Buy, 10, 5), TimeInForce::Gfd);
/// let result = engine.match_order(&mut book, Order::new("B1", Side::Sell, 10, 5), TimeInForce::Gfd);
///
/// assert!(result.fully_filled);
/// assert_eq!(result.trades.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MatchingEngine {
    /// Commands seen by `match_order`, including ignored ones
    orders_processed: u64,

    /// Total trade events emitted
    trades_executed: u64,
}

impl MatchingEngine {
    /// Create a new engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of insert commands processed
    pub fn orders_processed(&self) -> u64 {
        self.orders_processed
    }

    /// Number of trade events emitted
    pub fn trades_executed(&self) -> u64 {
        self.trades_executed
    }

    /// Process an incoming limit order: match it against the opposite
    /// side, then rest (GFD) or discard (IOC) any residual.
    ///
    /// Invalid orders (empty id, zero price or quantity) and ids that
    /// are already active are dropped silently - the duplicate-id guard
    /// is deliberate idempotency, not an error.
    pub fn match_order(
        &mut self,
        book: &mut OrderBook,
        mut order: Order,
        time_in_force: TimeInForce,
    ) -> MatchResult {
        self.orders_processed += 1;

        if !order.is_valid() {
            debug!(id = %order.id, price = order.price, qty = order.remaining,
                "dropping invalid order");
            return MatchResult::ignored();
        }
        if book.contains_order(&order.id) {
            debug!(id = %order.id, "dropping duplicate active id");
            return MatchResult::ignored();
        }

        let fills = plan_fills(book, &order);

        // Apply phase: execute the planned fills in order. Removal of
        // fully-filled resting orders is deferred past the whole scan.
        let resting_side = order.side.opposite();
        let mut trades = Vec::with_capacity(fills.len());
        let mut filled_keys = Vec::new();

        for fill in fills {
            let (resting_id, resting_price, resting_filled) = {
                let node = book
                    .orders_mut()
                    .get_mut(fill.key)
                    .expect("planned fill against missing order");
                node.fill(fill.quantity);
                (node.order.id.clone(), node.price(), node.is_filled())
            };
            book.reduce_level_quantity(resting_side, resting_price, fill.quantity);
            order.fill(fill.quantity);

            let trade = Trade::new(
                resting_id,
                resting_price,
                order.id.clone(),
                order.price,
                fill.quantity,
            );
            trace!(%trade, "fill");
            trades.push(trade);

            if resting_filled {
                filled_keys.push(fill.key);
            }
        }
        self.trades_executed += trades.len() as u64;

        let fully_filled = order.is_filled();
        let mut rested = false;
        if !fully_filled {
            match time_in_force {
                // IOC residual never rests
                TimeInForce::Ioc => {
                    trace!(id = %order.id, residual = order.remaining, "IOC residual discarded");
                }
                TimeInForce::Gfd => {
                    trace!(id = %order.id, residual = order.remaining, "resting residual");
                    book.add_order(order);
                    rested = true;
                }
            }
        }

        for key in filled_keys {
            book.remove_order(key);
        }

        MatchResult {
            trades,
            fully_filled,
            rested,
        }
    }

    /// Cancel an order by id. Unknown ids are a silent no-op.
    ///
    /// # Returns
    ///
    /// True if an active order was removed
    pub fn cancel_order(&mut self, book: &mut OrderBook, order_id: &str) -> bool {
        match book.cancel_order(order_id) {
            Some(order) => {
                trace!(id = %order.id, "order cancelled");
                true
            }
            None => {
                trace!(id = order_id, "cancel of unknown id ignored");
                false
            }
        }
    }

    /// Replace an order: cancel any active order with this id, then
    /// rest the new state at the tail of its price level.
    ///
    /// This is a pure book replacement - it never matches, even if the
    /// new price crosses - and it always resets time priority, price
    /// change or not. If the id was not active, the order simply rests
    /// fresh. A replacement state that fails book validation makes the
    /// whole operation a no-op (the existing order, if any, is kept).
    pub fn modify_order(&mut self, book: &mut OrderBook, order: Order) {
        if !order.is_valid() {
            debug!(id = %order.id, price = order.price, qty = order.remaining,
                "dropping invalid replacement");
            return;
        }
        book.cancel_order(&order.id);
        trace!(id = %order.id, price = order.price, qty = order.remaining, "order replaced");
        book.add_order(order);
    }
}

/// Scan the opposite side best-first and plan fills FIFO within each
/// crossing level. Pure read: the book is not touched.
fn plan_fills(book: &OrderBook, order: &Order) -> Vec<Fill> {
    let crosses: fn(u64, u64) -> bool = match order.side {
        Side::Buy => buy_crosses,
        Side::Sell => sell_crosses,
    };

    let mut open = order.remaining;
    let mut fills = Vec::new();

    'levels: for (level_price, level) in book.levels(order.side.opposite()) {
        if open == 0 || !crosses(level_price, order.price) {
            break;
        }
        let mut cursor = level.peek_head();
        while let Some(key) = cursor {
            if open == 0 {
                break 'levels;
            }
            let node = &book.orders()[key];
            let quantity = node.remaining().min(open);
            fills.push(Fill { key, quantity });
            open -= quantity;
            cursor = node.next;
        }
    }

    fills
}

// ============================================================================
// Unit Tests
// ============================================================================
