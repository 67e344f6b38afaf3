//! Core business logic module
//!
//! This module contains the ledger components:
//! - `account_registry` - Live accounts, creation, deletion and transactions
//! - `number_pool` - Recycled account numbers and the fresh-number counter

pub mod account_registry;
pub mod number_pool;

pub use account_registry::AccountRegistry;
pub use number_pool::{AccountNumberAllocator, NumberSource, RecycledNumberPool};
