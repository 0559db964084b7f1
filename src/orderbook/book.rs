//! Limit order book for a single instrument.
//!
//! ## Architecture
//!
//! The book keeps three structures that must never diverge:
//!
//! - **Slab**: single owner of every resting order, O(1) by key
//! - **BTreeMap** per side: price -> [`PriceLevel`] queue, sorted so the
//!   best price is visited first
//! - **HashMap**: order id -> slab key, for O(1) cancel/modify lookup
//!
//! ## Price Ordering
//!
//! - **Bids** (buy orders): sorted high-to-low (best bid = highest price)
//! - **Asks** (sell orders): sorted low-to-high (best ask = lowest price)
//!
//! ## Invariants
//!
//! - an id is in the index iff its order sits in exactly one level queue
//!   with `remaining > 0`
//! - no price key maps to an empty queue
//!
//! These are guarded with `debug_assert!`: a violation is a programming
//! defect, not a runtime condition, so it fails loudly in debug builds
//! and costs nothing in release.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

use slab::Slab;

use crate::orderbook::{Depth, OrderNode, PriceLevel};
use crate::types::{Order, Side};

/// Single-instrument limit order book.
#[derive(Debug, Default)]
pub struct OrderBook {
    /// Pre-allocated order storage; the only owner of resting orders
    orders: Slab<OrderNode>,

    /// Bid price levels (sorted high to low via `Reverse`)
    bids: BTreeMap<Reverse<u64>, PriceLevel>,

    /// Ask price levels (sorted low to high)
    asks: BTreeMap<u64, PriceLevel>,

    /// Order id to slab key mapping (for O(1) cancel)
    order_index: HashMap<String, usize>,
}

impl OrderBook {
    /// Create a new empty book
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a book with pre-allocated order capacity
    pub fn with_capacity(order_capacity: usize) -> Self {
        Self {
            orders: Slab::with_capacity(order_capacity),
            bids: BTreeMap::new(),
            asks: BTreeMap::new(),
            order_index: HashMap::with_capacity(order_capacity),
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Current pre-allocated capacity
    #[inline]
    pub fn capacity(&self) -> usize {
        self.orders.capacity()
    }

    /// Total number of resting orders
    #[inline]
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Check if the book holds no orders
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Number of distinct bid price levels
    #[inline]
    pub fn bid_levels(&self) -> usize {
        self.bids.len()
    }

    /// Number of distinct ask price levels
    #[inline]
    pub fn ask_levels(&self) -> usize {
        self.asks.len()
    }

    // ========================================================================
    // Order Management
    // ========================================================================

    /// Rest an order on the book, appending it at the tail of its price
    /// level (last in time priority at that price).
    ///
    /// The caller must have validated the order (`Order::is_valid`) and
    /// checked that its id is not already active; the engine does both.
    ///
    /// # Returns
    ///
    /// The slab key for the added order
    pub fn add_order(&mut self, order: Order) -> usize {
        debug_assert!(order.is_valid(), "resting an invalid order");
        debug_assert!(
            !self.order_index.contains_key(&order.id),
            "resting a duplicate active id"
        );

        let id = order.id.clone();
        let price = order.price;
        let side = order.side;

        let key = self.orders.insert(OrderNode::new(order));
        self.order_index.insert(id, key);

        match side {
            Side::Buy => {
                let level = self
                    .bids
                    .entry(Reverse(price))
                    .or_insert_with(|| PriceLevel::new(price));
                level.push_back(key, &mut self.orders);
            }
            Side::Sell => {
                let level = self
                    .asks
                    .entry(price)
                    .or_insert_with(|| PriceLevel::new(price));
                level.push_back(key, &mut self.orders);
            }
        }

        key
    }

    /// Remove an order by slab key: unlink from its level, erase the
    /// level if it became empty, drop the index entry.
    ///
    /// Safe to call with a stale key (returns `None`), which makes the
    /// removal path reentrant for the engine's deferred cleanup.
    ///
    /// # Returns
    ///
    /// The removed order, or None if the key is not occupied
    pub fn remove_order(&mut self, key: usize) -> Option<Order> {
        let node = self.orders.get(key)?;
        let price = node.price();
        let side = node.order.side;

        match side {
            Side::Buy => {
                if let Some(level) = self.bids.get_mut(&Reverse(price)) {
                    level.remove(key, &mut self.orders);
                    // No empty levels persist
                    if level.is_empty() {
                        self.bids.remove(&Reverse(price));
                    }
                } else {
                    debug_assert!(false, "order {key} missing from bid level {price}");
                }
            }
            Side::Sell => {
                if let Some(level) = self.asks.get_mut(&price) {
                    level.remove(key, &mut self.orders);
                    if level.is_empty() {
                        self.asks.remove(&price);
                    }
                } else {
                    debug_assert!(false, "order {key} missing from ask level {price}");
                }
            }
        }

        let node = self.orders.remove(key);
        let removed = self.order_index.remove(&node.order.id);
        debug_assert_eq!(removed, Some(key), "index out of sync with slab");

        Some(node.order)
    }

    /// Cancel an order by id.
    ///
    /// Unknown ids are a silent no-op: the command stream is allowed to
    /// cancel ids that never rested or already left the book.
    ///
    /// # Returns
    ///
    /// The cancelled order, or None if the id was not active
    pub fn cancel_order(&mut self, order_id: &str) -> Option<Order> {
        let key = *self.order_index.get(order_id)?;
        self.remove_order(key)
    }

    /// Check if an order id is currently active
    #[inline]
    pub fn contains_order(&self, order_id: &str) -> bool {
        self.order_index.contains_key(order_id)
    }

    /// Get a resting order by id
    pub fn get_order(&self, order_id: &str) -> Option<&Order> {
        let key = *self.order_index.get(order_id)?;
        self.orders.get(key).map(|node| &node.order)
    }

    // ========================================================================
    // Best Bid/Ask
    // ========================================================================

    /// Best bid price (highest buy price), or None if no bids
    #[inline]
    pub fn best_bid(&self) -> Option<u64> {
        self.bids.keys().next().map(|r| r.0)
    }

    /// Best ask price (lowest sell price), or None if no asks
    #[inline]
    pub fn best_ask(&self) -> Option<u64> {
        self.asks.keys().next().copied()
    }

    /// Spread (best_ask - best_bid), or None if either side is empty
    pub fn spread(&self) -> Option<u64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) if ask >= bid => Some(ask - bid),
            _ => None,
        }
    }

    // ========================================================================
    // Matching Support
    // ========================================================================

    /// Iterate one side's price levels in best-first order: highest
    /// price first for bids, lowest first for asks.
    pub fn levels(&self, side: Side) -> Box<dyn Iterator<Item = (u64, &PriceLevel)> + '_> {
        match side {
            Side::Buy => Box::new(self.bids.iter().map(|(r, level)| (r.0, level))),
            Side::Sell => Box::new(self.asks.iter().map(|(&price, level)| (price, level))),
        }
    }

    /// Read access to the order slab (to walk level queues by key)
    #[inline]
    pub fn orders(&self) -> &Slab<OrderNode> {
        &self.orders
    }

    /// Mutable access to the order slab, for the matching engine's fill
    /// application
    #[inline]
    pub(crate) fn orders_mut(&mut self) -> &mut Slab<OrderNode> {
        &mut self.orders
    }

    /// Reduce a level's aggregate quantity after a partial fill of one
    /// of its orders
    pub(crate) fn reduce_level_quantity(&mut self, side: Side, price: u64, filled: u64) {
        match side {
            Side::Buy => {
                if let Some(level) = self.bids.get_mut(&Reverse(price)) {
                    level.reduce_quantity(filled);
                }
            }
            Side::Sell => {
                if let Some(level) = self.asks.get_mut(&price) {
                    level.reduce_quantity(filled);
                }
            }
        }
    }

    // ========================================================================
    // Snapshot
    // ========================================================================

    /// Read-only aggregated snapshot of both sides.
    ///
    /// Sell levels come out best (lowest) to worst (highest), buy levels
    /// best (highest) to worst (lowest), each with the level's summed
    /// remaining quantity. Does not mutate anything.
    pub fn depth(&self) -> Depth {
        Depth {
            sells: self
                .asks
                .iter()
                .map(|(&price, level)| (price, level.total_quantity))
                .collect(),
            buys: self
                .bids
                .iter()
                .map(|(r, level)| (r.0, level.total_quantity))
                .collect(),
        }
    }

    /// Clear all orders from the book
    pub fn clear(&mut self) {
        self.orders.clear();
        self.bids.clear();
        self.asks.clear();
        self.order_index.clear();
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
