//! Matching engine module.
//!
//! ## Matching Rules
//!
//! - **Buy orders** match against asks (lowest price first)
//! - **Sell orders** match against bids (highest price first)
//! - Within a price level, strictly arrival order (FIFO)
//! - **Partial fills** are supported; both legs report their own price
//! - **IOC** residual is discarded, **GFD** residual rests
//!
//! The engine runs one command at a time to completion; there is no
//! shared state across concurrent actors because there are none.

pub mod matcher;

pub use matcher::{MatchResult, MatchingEngine};
