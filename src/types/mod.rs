//! Core data types for the matching engine.
//!
//! ## Types
//!
//! - [`Order`]: A limit order with a string id and integer price/quantity
//! - [`Side`]: Buy or Sell
//! - [`TimeInForce`]: IOC (residual discarded) or GFD (residual rests)
//! - [`Trade`]: An executed match between a resting and an incoming order

mod order;
mod trade;

// Re-export all types at module level
pub use order::{Order, Side, TimeInForce};
pub use trade::Trade;
