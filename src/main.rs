//! Command-line adapter: reads commands from stdin, drives the engine,
//! writes trade lines and depth reports to stdout.
//!
//! Logging goes to stderr (controlled by `RUST_LOG`) so stdout carries
//! nothing but protocol output. Malformed input is fatal: the adapter
//! reports the offending line and exits non-zero.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use matchbook::engine::MatchingEngine;
use matchbook::orderbook::OrderBook;
use matchbook::protocol::{parse_line, Command};
use matchbook::types::Order;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(input: impl BufRead, mut output: impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let mut book = OrderBook::new();
    let mut engine = MatchingEngine::new();

    for line in input.lines() {
        let line = line?;
        let Some(command) = parse_line(&line)? else {
            continue;
        };

        match command {
            Command::Insert {
                side,
                time_in_force,
                price,
                quantity,
                id,
            } => {
                let order = Order::new(id, side, price, quantity);
                let result = engine.match_order(&mut book, order, time_in_force);
                for trade in &result.trades {
                    writeln!(output, "{trade}")?;
                }
            }
            Command::Cancel { id } => {
                engine.cancel_order(&mut book, &id);
            }
            Command::Modify {
                id,
                side,
                price,
                quantity,
            } => {
                engine.modify_order(&mut book, Order::new(id, side, price, quantity));
            }
            Command::Print => {
                writeln!(output, "{}", book.depth())?;
            }
        }
    }

    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_session(input: &str) -> String {
        let mut output = Vec::new();
        run(input.as_bytes(), &mut output).expect("session failed");
        String::from_utf8(output).expect("non-utf8 output")
    }

    #[test]
    fn test_session_trade_and_print() {
        let output = run_session("BUY GFD 10 5 A1\nSELL GFD 10 5 B1\nPRINT\n");
        assert_eq!(output, "TRADE A1 10 5 B1 10 5\nSELL:\nBUY:\n");
    }

    #[test]
    fn test_session_ioc_partial() {
        let output = run_session("BUY GFD 10 5 A1\nSELL IOC 10 3 B1\nPRINT\n");
        assert_eq!(output, "TRADE A1 10 3 B1 10 3\nSELL:\nBUY:\n10 2\n");
    }

    #[test]
    fn test_session_cancel() {
        let output = run_session("BUY GFD 10 5 A1\nCANCEL A1\nPRINT\n");
        assert_eq!(output, "SELL:\nBUY:\n");
    }

    #[test]
    fn test_session_malformed_is_fatal() {
        let mut output = Vec::new();
        let result = run("BUY GFD 10 5 A1\nNONSENSE\n".as_bytes(), &mut output);
        assert!(result.is_err());
    }
}
