//! Order node for slab-based storage.
//!
//! `OrderNode` wraps an [`Order`] with doubly-linked list pointers so an
//! order can be unlinked from its price level in O(1) given its slab key.
//! The pointers are slab keys (`usize`), not references; keys may be
//! reused by the slab after removal.
//!
//! ## Linked List
//!
//! Orders at the same price level form a doubly-linked list:
//! - `next`: the next (newer) order at this price
//! - `prev`: the previous (older) order at this price

use crate::types::Order;

/// Order node stored in the slab.
///
/// Contains the order data plus linked-list pointers for the price level
/// queue.
#[derive(Debug, Clone)]
pub struct OrderNode {
    /// The actual order data
    pub order: Order,

    /// Next order in the price level queue (slab key)
    /// None if this is the tail (newest order)
    pub next: Option<usize>,

    /// Previous order in the price level queue (slab key)
    /// None if this is the head (oldest order)
    pub prev: Option<usize>,
}

impl OrderNode {
    /// Create a new order node (not yet linked)
    #[inline]
    pub fn new(order: Order) -> Self {
        Self {
            order,
            next: None,
            prev: None,
        }
    }

    /// Check if this node is unlinked (not part of any price level)
    #[inline]
    pub fn is_unlinked(&self) -> bool {
        self.next.is_none() && self.prev.is_none()
    }

    /// Get the order id
    #[inline]
    pub fn order_id(&self) -> &str {
        &self.order.id
    }

    /// Get the order price
    #[inline]
    pub fn price(&self) -> u64 {
        self.order.price
    }

    /// Get the remaining quantity
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.order.remaining
    }

    /// Fill a portion of this order
    ///
    /// # Returns
    ///
    /// The actual quantity filled (may be less than requested)
    #[inline]
    pub fn fill(&mut self, quantity: u64) -> u64 {
        self.order.fill(quantity)
    }

    /// Check if the order is fully filled
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.order.is_filled()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
