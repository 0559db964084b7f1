//! Textual command protocol: parsing the adapter's input lines.
//!
//! ## Grammar
//!
//! ```text
//! BUY  <IOC|GFD> <price> <qty> <orderId>
//! SELL <IOC|GFD> <price> <qty> <orderId>
//! CANCEL <orderId>
//! MODIFY <orderId> <BUY|SELL> <price> <qty>
//! PRINT
//! ```
//!
//! Tokens are whitespace-separated; blank lines parse to `None`. The
//! keyword tables are fixed at compile time and never change at runtime.
//! The engine only ever sees structurally valid commands: anything
//! malformed or unrecognized is a [`ProtocolError`], which the adapter
//! treats as fatal input.

use thiserror::Error;

use crate::types::{Side, TimeInForce};

/// Errors raised while parsing a command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// The first token is not a known command keyword
    #[error("unrecognized command `{0}`")]
    UnknownCommand(String),

    /// A time-in-force token other than IOC/GFD
    #[error("unrecognized time-in-force `{0}`")]
    UnknownTimeInForce(String),

    /// A side token other than BUY/SELL
    #[error("unrecognized side `{0}`")]
    UnknownSide(String),

    /// The line ended before a required field
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// A numeric field that does not parse as an unsigned integer
    #[error("invalid number for `{field}`: `{value}`")]
    InvalidNumber { field: &'static str, value: String },
}

/// A structured, validated command for the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// BUY or SELL: submit an order for matching
    Insert {
        side: Side,
        time_in_force: TimeInForce,
        price: u64,
        quantity: u64,
        id: String,
    },
    /// CANCEL: remove an active order
    Cancel { id: String },
    /// MODIFY: replace an order's side/price/quantity, resetting its
    /// queue position
    Modify {
        id: String,
        side: Side,
        price: u64,
        quantity: u64,
    },
    /// PRINT: emit the aggregated depth report
    Print,
}

/// Parse one input line into a [`Command`].
///
/// Blank (or all-whitespace) lines return `Ok(None)`. Extra trailing
/// tokens are ignored, matching the line-oriented reader's behavior.
pub fn parse_line(line: &str) -> Result<Option<Command>, ProtocolError> {
    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Ok(None);
    };

    let command = match keyword {
        "BUY" | "SELL" => {
            let side = if keyword == "BUY" { Side::Buy } else { Side::Sell };
            let time_in_force = parse_time_in_force(next_field(&mut tokens, "timeInForce")?)?;
            let price = parse_number(next_field(&mut tokens, "price")?, "price")?;
            let quantity = parse_number(next_field(&mut tokens, "qty")?, "qty")?;
            let id = next_field(&mut tokens, "orderId")?.to_string();
            Command::Insert {
                side,
                time_in_force,
                price,
                quantity,
                id,
            }
        }
        "CANCEL" => Command::Cancel {
            id: next_field(&mut tokens, "orderId")?.to_string(),
        },
        "MODIFY" => {
            let id = next_field(&mut tokens, "orderId")?.to_string();
            let side = parse_side(next_field(&mut tokens, "side")?)?;
            let price = parse_number(next_field(&mut tokens, "price")?, "price")?;
            let quantity = parse_number(next_field(&mut tokens, "qty")?, "qty")?;
            Command::Modify {
                id,
                side,
                price,
                quantity,
            }
        }
        "PRINT" => Command::Print,
        other => return Err(ProtocolError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

fn next_field<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<&'a str, ProtocolError> {
    tokens.next().ok_or(ProtocolError::MissingField(name))
}

fn parse_number(token: &str, field: &'static str) -> Result<u64, ProtocolError> {
    token.parse().map_err(|_| ProtocolError::InvalidNumber {
        field,
        value: token.to_string(),
    })
}

fn parse_time_in_force(token: &str) -> Result<TimeInForce, ProtocolError> {
    match token {
        "IOC" => Ok(TimeInForce::Ioc),
        "GFD" => Ok(TimeInForce::Gfd),
        other => Err(ProtocolError::UnknownTimeInForce(other.to_string())),
    }
}

fn parse_side(token: &str) -> Result<Side, ProtocolError> {
    match token {
        "BUY" => Ok(Side::Buy),
        "SELL" => Ok(Side::Sell),
        other => Err(ProtocolError::UnknownSide(other.to_string())),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
