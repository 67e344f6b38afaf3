//! Interactive session module
//!
//! A session reads command verbs and their arguments from a line-based source, drives the
//! [`AccountRegistry`](crate::core::AccountRegistry) and writes every confirmation, table
//! and rejection message to an output sink.

pub mod command_loop;

pub use command_loop::Session;

use crate::core::number_pool::DEFAULT_FIRST_ACCOUNT_NUMBER;
use crate::types::AccountNumber;

/// Configuration for a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Print the banner and the per-argument prompts
    pub prompts: bool,

    /// First fresh account number handed out by the registry
    pub first_account_number: AccountNumber,
}

impl SessionConfig {
    /// Create a new SessionConfig
    ///
    /// A first account number of 0 is not a valid account number and falls back to
    /// the default of 100.
    pub fn new(prompts: bool, first_account_number: AccountNumber) -> Self {
        let first_account_number = if first_account_number == 0 {
            DEFAULT_FIRST_ACCOUNT_NUMBER
        } else {
            first_account_number
        };

        SessionConfig {
            prompts,
            first_account_number,
        }
    }

    /// Configuration for scripted input: no banner, no prompts
    pub fn quiet() -> Self {
        Self::new(false, DEFAULT_FIRST_ACCOUNT_NUMBER)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(true, DEFAULT_FIRST_ACCOUNT_NUMBER)
    }
}
