//! I/O module
//!
//! Handles command input and report output.
//!
//! # Components
//!
//! - `command_reader` - Token reader, command verbs and argument parsing
//! - `report` - Account tables and confirmation blocks

pub mod command_reader;
pub mod report;

pub use command_reader::{Command, CommandReader};
pub use report::{format_money, write_account_created, write_account_table, write_low_balance_table};
