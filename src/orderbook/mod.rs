//! Order book module: the three-index book structure.
//!
//! ## Components
//!
//! - [`OrderNode`]: wrapper around `Order` with linked-list pointers
//! - [`PriceLevel`]: FIFO queue of orders at a single price
//! - [`OrderBook`]: bid/ask sides plus the id index
//! - [`Depth`]: read-only aggregated snapshot of both sides
//!
//! ## Performance
//!
//! | Operation            | Complexity |
//! |----------------------|------------|
//! | Rest order           | O(log n)   |
//! | Remove order by key  | O(1)       |
//! | Cancel order by id   | O(1)*      |
//! | Best bid/ask         | O(log n)   |
//!
//! *plus the O(log n) level erasure when a level empties

pub mod book;
pub mod depth;
pub mod level;
pub mod node;

pub use book::OrderBook;
pub use depth::Depth;
pub use level::PriceLevel;
pub use node::OrderNode;
