//! # matchbook
//!
//! Single-instrument limit order book with continuous price-time
//! priority matching.
//!
//! ## Architecture
//!
//! - **Types**: core data structures ([`Order`], [`Trade`])
//! - **OrderBook**: slab-backed book with bid/ask sides and an id index
//! - **Engine**: the matching engine (insert, cancel, modify)
//! - **Protocol**: the textual command adapter
//!
//! ## Design Principles
//!
//! 1. **Determinism**: the same command sequence always produces the
//!    same trade stream and final book
//! 2. **Integer math**: prices and quantities are plain `u64`
//! 3. **Single writer**: one command runs to completion before the next
//! 4. **Pre-allocated memory**: slab storage keeps resting orders in
//!    one contiguous arena
//!
//! ## Example
//!
//! ```
//! use matchbook::engine::MatchingEngine;
//! use matchbook::orderbook::OrderBook;
//! use matchbook::types::{Order, Side, TimeInForce};
//!
//! let mut book = OrderBook::with_capacity(10_000);
//! let mut engine = MatchingEngine::new();
//!
//! engine.match_order(&mut book, Order::new("A1", Side::Buy, 10, 5), TimeInForce::Gfd);
//! let result = engine.match_order(&mut book, Order::new("B1", Side::Sell, 10, 5), TimeInForce::Gfd);
//!
//! assert_eq!(result.trades[0].to_string(), "TRADE A1 10 5 B1 10 5");
//! assert!(book.is_empty());
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Order, Side, TimeInForce, Trade
pub mod types;

/// Order book: slab-backed bid/ask sides plus id index
pub mod orderbook;

/// Matching engine: price-time priority order matching
pub mod engine;

/// Textual command protocol (the thin adapter layer)
pub mod protocol;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use engine::{MatchResult, MatchingEngine};
pub use orderbook::{Depth, OrderBook, OrderNode, PriceLevel};
pub use types::{Order, Side, TimeInForce, Trade};
