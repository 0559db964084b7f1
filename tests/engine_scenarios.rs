//! Black-box lifecycle and priority scenarios for the matching engine.
//!
//! These exercise the public surface the way the command adapter does:
//! submit orders, cancel, modify, snapshot - and check the book's
//! invariants hold after every step.

use matchbook::{MatchingEngine, Order, OrderBook, Side, TimeInForce, Trade};

fn buy(id: &str, price: u64, quantity: u64) -> Order {
    Order::new(id, Side::Buy, price, quantity)
}

fn sell(id: &str, price: u64, quantity: u64) -> Order {
    Order::new(id, Side::Sell, price, quantity)
}

/// Every level reachable from the depth snapshot must be non-empty, and
/// the per-side level walk must agree with the snapshot.
fn assert_no_empty_levels(book: &OrderBook) {
    let depth = book.depth();
    for &(_, quantity) in depth.sells.iter().chain(depth.buys.iter()) {
        assert!(quantity > 0, "empty price level left in the book");
    }
    assert_eq!(depth.sells.len(), book.ask_levels());
    assert_eq!(depth.buys.len(), book.bid_levels());
}

#[test]
fn price_priority_across_levels() {
    let mut book = OrderBook::new();
    let mut engine = MatchingEngine::new();

    // Two buy levels; the better-priced level must be consumed fully
    // before the worse one is touched
    engine.match_order(&mut book, buy("worse", 9, 5), TimeInForce::Gfd);
    engine.match_order(&mut book, buy("better", 10, 5), TimeInForce::Gfd);

    let result = engine.match_order(&mut book, sell("taker", 9, 7), TimeInForce::Gfd);

    assert_eq!(
        result.trades,
        vec![
            Trade::new("better", 10, "taker", 9, 5),
            Trade::new("worse", 9, "taker", 9, 2),
        ]
    );
    assert_no_empty_levels(&book);
}

#[test]
fn time_priority_within_level_is_fifo() {
    let mut book = OrderBook::new();
    let mut engine = MatchingEngine::new();

    for id in ["t1", "t2", "t3"] {
        engine.match_order(&mut book, sell(id, 10, 1), TimeInForce::Gfd);
    }

    let result = engine.match_order(&mut book, buy("taker", 10, 3), TimeInForce::Gfd);
    let resting_order: Vec<&str> = result.trades.iter().map(|t| t.resting_id.as_str()).collect();
    assert_eq!(resting_order, vec!["t1", "t2", "t3"]);
}

#[test]
fn modified_order_loses_its_place() {
    let mut book = OrderBook::new();
    let mut engine = MatchingEngine::new();

    engine.match_order(&mut book, sell("t1", 10, 1), TimeInForce::Gfd);
    engine.match_order(&mut book, sell("t2", 10, 1), TimeInForce::Gfd);

    // Unchanged price and quantity, but t1 re-queues behind t2
    engine.modify_order(&mut book, sell("t1", 10, 1));

    let result = engine.match_order(&mut book, buy("taker", 10, 1), TimeInForce::Gfd);
    assert_eq!(result.trades, vec![Trade::new("t2", 10, "taker", 10, 1)]);
}

#[test]
fn quantity_conservation_on_every_trade() {
    let mut book = OrderBook::new();
    let mut engine = MatchingEngine::new();

    engine.match_order(&mut book, sell("S1", 10, 7), TimeInForce::Gfd);
    engine.match_order(&mut book, sell("S2", 11, 5), TimeInForce::Gfd);

    let incoming_qty = 10;
    let result = engine.match_order(&mut book, buy("B1", 11, incoming_qty), TimeInForce::Gfd);

    let traded: u64 = result.trades.iter().map(|t| t.quantity).sum();
    assert_eq!(traded, incoming_qty);
    for trade in &result.trades {
        assert!(trade.quantity > 0);
    }
    // Residual of S2: 12 on the book minus 10 traded
    assert_eq!(book.get_order("S2").unwrap().remaining, 2);
    assert!(result.fully_filled);
    assert_no_empty_levels(&book);
}

#[test]
fn index_and_book_stay_consistent() {
    let mut book = OrderBook::new();
    let mut engine = MatchingEngine::new();

    engine.match_order(&mut book, buy("A1", 10, 5), TimeInForce::Gfd);
    engine.match_order(&mut book, buy("A2", 10, 5), TimeInForce::Gfd);
    engine.match_order(&mut book, sell("S1", 12, 5), TimeInForce::Gfd);

    // Fill A1 completely, A2 partially
    engine.match_order(&mut book, sell("taker", 10, 8), TimeInForce::Gfd);

    assert!(!book.contains_order("A1"));
    assert!(book.contains_order("A2"));
    assert!(book.contains_order("S1"));
    assert!(!book.contains_order("taker"));
    assert_eq!(book.order_count(), 2);
    assert_no_empty_levels(&book);

    engine.cancel_order(&mut book, "A2");
    engine.cancel_order(&mut book, "S1");
    assert!(book.is_empty());
    assert_no_empty_levels(&book);
}

#[test]
fn ioc_residual_never_appears_in_book() {
    let mut book = OrderBook::new();
    let mut engine = MatchingEngine::new();

    engine.match_order(&mut book, buy("A1", 10, 3), TimeInForce::Gfd);
    let result = engine.match_order(&mut book, sell("ioc", 10, 10), TimeInForce::Ioc);

    assert_eq!(result.trades.len(), 1);
    assert!(!result.rested);
    assert!(!book.contains_order("ioc"));
    assert!(book.depth().is_empty());

    // Id is free for reuse as a brand-new order
    let result = engine.match_order(&mut book, sell("ioc", 10, 1), TimeInForce::Gfd);
    assert!(result.rested);
    assert!(book.contains_order("ioc"));
}

#[test]
fn duplicate_insert_is_a_noop() {
    let mut book = OrderBook::new();
    let mut engine = MatchingEngine::new();

    engine.match_order(&mut book, buy("A1", 10, 5), TimeInForce::Gfd);
    let result = engine.match_order(&mut book, sell("A1", 8, 9), TimeInForce::Gfd);

    assert!(result.trades.is_empty());
    let existing = book.get_order("A1").unwrap();
    assert_eq!(existing.side, Side::Buy);
    assert_eq!(existing.price, 10);
    assert_eq!(existing.remaining, 5);
    assert_eq!(book.order_count(), 1);
}

#[test]
fn scenario_full_cross_empties_book() {
    let mut book = OrderBook::new();
    let mut engine = MatchingEngine::new();

    engine.match_order(&mut book, buy("A1", 10, 5), TimeInForce::Gfd);
    let result = engine.match_order(&mut book, sell("B1", 10, 5), TimeInForce::Gfd);

    assert_eq!(
        result.trades,
        vec![Trade::new("A1", 10, "B1", 10, 5)]
    );
    let depth = book.depth();
    assert!(depth.is_empty());
    assert_eq!(depth.to_string(), "SELL:\nBUY:");
}

#[test]
fn scenario_ioc_partial_leaves_residual_bid() {
    let mut book = OrderBook::new();
    let mut engine = MatchingEngine::new();

    engine.match_order(&mut book, buy("A1", 10, 5), TimeInForce::Gfd);
    let result = engine.match_order(&mut book, sell("B1", 10, 3), TimeInForce::Ioc);

    assert_eq!(result.trades, vec![Trade::new("A1", 10, "B1", 10, 3)]);
    assert_eq!(book.depth().to_string(), "SELL:\nBUY:\n10 2");
}

#[test]
fn scenario_cancel_clears_bid_lines() {
    let mut book = OrderBook::new();
    let mut engine = MatchingEngine::new();

    engine.match_order(&mut book, buy("A1", 10, 5), TimeInForce::Gfd);
    engine.cancel_order(&mut book, "A1");

    assert!(book.depth().buys.is_empty());
}

#[test]
fn scenario_modify_in_place_still_trades() {
    let mut book = OrderBook::new();
    let mut engine = MatchingEngine::new();

    engine.match_order(&mut book, buy("A1", 10, 5), TimeInForce::Gfd);
    // Same side, price and quantity: the order stays on the book, only
    // its queue position resets
    engine.modify_order(&mut book, buy("A1", 10, 5));

    let result = engine.match_order(&mut book, sell("B1", 10, 5), TimeInForce::Gfd);
    assert_eq!(result.trades, vec![Trade::new("A1", 10, "B1", 10, 5)]);
    assert!(book.is_empty());
}

#[test]
fn depth_orders_sells_ascending_and_buys_descending() {
    let mut book = OrderBook::new();
    let mut engine = MatchingEngine::new();

    engine.match_order(&mut book, sell("s-high", 13, 1), TimeInForce::Gfd);
    engine.match_order(&mut book, sell("s-low", 11, 2), TimeInForce::Gfd);
    engine.match_order(&mut book, buy("b-low", 8, 3), TimeInForce::Gfd);
    engine.match_order(&mut book, buy("b-high", 10, 4), TimeInForce::Gfd);

    assert_eq!(
        book.depth().to_string(),
        "SELL:\n11 2\n13 1\nBUY:\n10 4\n8 3"
    );
}
