//! Command input handling
//!
//! Commands and their arguments arrive as whitespace-separated tokens. A token may sit on
//! its own line (interactive use) or share a line with others (scripts such as
//! `CREATE savings Alice 500`). The reader hands them out one at a time.
//!
//! The parsing helpers are pure functions over a single token.

use crate::types::{AccountNumber, LedgerError};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

/// Command verbs, matched exactly and case-sensitively
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Create,
    Delete,
    Display,
    Transaction,
    LowBalance,
    Exit,
}

impl FromStr for Command {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATE" => Ok(Command::Create),
            "DELETE" => Ok(Command::Delete),
            "DISPLAY" => Ok(Command::Display),
            "TRANSACTION" => Ok(Command::Transaction),
            "LOWBALANCE" => Ok(Command::LowBalance),
            "EXIT" => Ok(Command::Exit),
            _ => Err(LedgerError::invalid_command(s)),
        }
    }
}

/// Token reader over any buffered input
pub struct CommandReader<R> {
    input: R,
    /// Tokens already read from the current line
    pending: VecDeque<String>,
}

impl<R: BufRead> CommandReader<R> {
    pub fn new(input: R) -> Self {
        CommandReader {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Read the next whitespace-separated token
    ///
    /// Blank lines are skipped. Bytes that are not valid UTF-8 are replaced with
    /// U+FFFD rather than failing the read.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(token))` - The next token
    /// * `Ok(None)` - End of input
    /// * `Err(LedgerError)` - If reading failed
    pub fn next_token(&mut self) -> Result<Option<String>, LedgerError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
    }
}

/// Parse an account number token
pub fn parse_account_number(token: &str) -> Result<AccountNumber, LedgerError> {
    token
        .parse::<AccountNumber>()
        .map_err(|_| LedgerError::invalid_input("account number", token))
}

/// Parse a currency amount token
///
/// Plain decimals and exponent notation (`1e3`) are accepted; digit separators
/// (`1_000`) are not. The amount is rounded to 2 decimal places (half away from zero).
/// Sign is not checked.
pub fn parse_amount(token: &str) -> Result<Decimal, LedgerError> {
    if token.contains('_') {
        return Err(LedgerError::invalid_input("amount", token));
    }
    let amount =
        Decimal::from_str(token).map_err(|_| LedgerError::invalid_input("amount", token))?;
    Ok(amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Parse a transaction code token
///
/// Any integer is accepted here; mapping it to a deposit or withdrawal happens in
/// [`TransactionKind::from_code`](crate::types::TransactionKind::from_code).
pub fn parse_transaction_code(token: &str) -> Result<i64, LedgerError> {
    token
        .parse::<i64>()
        .map_err(|_| LedgerError::invalid_input("transaction code", token))
}
