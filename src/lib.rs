//! Bank Ledger Library
//! # Overview
//!
//! This library provides an in-memory bank account ledger driven by a line-oriented
//! command loop.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, AccountType, LedgerError, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::account_registry`] - Live accounts, creation, deletion and transactions
//!   - [`core::number_pool`] - Account number recycling and the fresh-number counter
//! - [`io`] - Command token reading and report rendering
//! - [`session`] - The command loop tying input, registry and output together
//!
//! # Commands
//!
//! - **CREATE**: Open a savings or current account for a holder
//! - **DELETE**: Close a holder's account and recycle its number
//! - **DISPLAY**: List all accounts sorted by account number
//! - **TRANSACTION**: Deposit into or withdraw from an account
//! - **LOWBALANCE**: List accounts with a balance below 100.00
//! - **EXIT**: Release everything and end the session
//!
//! # Account Numbers
//!
//! New accounts reuse the smallest number freed by a deletion. Only when no freed
//! number is available is a fresh one minted, starting from 100.
//!
//! # Minimum Balances
//!
//! - **Savings**: a withdrawal must leave at least 100.00
//! - **Current**: a withdrawal must leave at least 0.00

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod session;
pub mod types;

pub use crate::core::{AccountRegistry, RecycledNumberPool};
pub use session::{Session, SessionConfig};
pub use types::{Account, AccountNumber, AccountType, LedgerError, TransactionKind};
