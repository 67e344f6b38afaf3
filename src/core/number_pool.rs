//! Account number allocation
//!
//! This module provides the `RecycledNumberPool`, which holds account numbers freed by
//! deletion, and the `AccountNumberAllocator`, which mints numbers for new accounts.
//!
//! # Minting Rule
//!
//! The allocator always asks the pool for its smallest recycled number first. Only when
//! the pool is empty does it hand out the fresh-number counter and post-increment it.
//! The counter never goes backwards: a fresh number that is later deleted comes back
//! through the pool, never through the counter.

use crate::types::{AccountNumber, LedgerError};

/// First fresh account number handed out by a default allocator
pub const DEFAULT_FIRST_ACCOUNT_NUMBER: AccountNumber = 100;

/// Account numbers freed by deletion, reused smallest first
#[derive(Debug, Default, Clone)]
pub struct RecycledNumberPool {
    /// Freed numbers in insertion order (sorted lazily on take)
    numbers: Vec<AccountNumber>,
}

impl RecycledNumberPool {
    /// Create an empty pool
    pub fn new() -> Self {
        RecycledNumberPool {
            numbers: Vec::new(),
        }
    }

    /// Return a number to the pool
    ///
    /// Insertion order is irrelevant: the pool is sorted before anything is taken.
    pub fn add(&mut self, number: AccountNumber) {
        self.numbers.push(number);
    }

    /// Remove and return the smallest number in the pool
    ///
    /// # Returns
    ///
    /// * `Some(number)` - The smallest recycled number, now removed from the pool
    /// * `None` - If the pool is empty
    pub fn take_smallest(&mut self) -> Option<AccountNumber> {
        if self.numbers.is_empty() {
            return None;
        }
        self.numbers.sort_unstable();
        Some(self.numbers.remove(0))
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Drop every recycled number, returning how many were held
    pub fn clear(&mut self) -> usize {
        let released = self.numbers.len();
        self.numbers.clear();
        released
    }
}

/// Where a minted account number came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberSource {
    /// Taken from the recycle pool
    Recycled,

    /// Taken from the fresh-number counter
    Fresh,
}

/// Mints account numbers from the recycle pool and the fresh-number counter
///
/// The pool and the counter live together so a single `&mut` borrow covers a mint.
#[derive(Debug, Clone)]
pub struct AccountNumberAllocator {
    recycled: RecycledNumberPool,
    /// `None` once `AccountNumber::MAX` has been handed out
    next_fresh: Option<AccountNumber>,
}

impl AccountNumberAllocator {
    /// Create an allocator whose first fresh number is `first`
    pub fn new(first: AccountNumber) -> Self {
        AccountNumberAllocator {
            recycled: RecycledNumberPool::new(),
            next_fresh: Some(first),
        }
    }

    /// Mint an account number
    ///
    /// # Returns
    ///
    /// * `Ok((number, source))` - The minted number and where it came from
    /// * `Err(LedgerError)` - If the pool is empty and the counter cannot advance
    ///
    /// # Errors
    ///
    /// Returns `AccountNumbersExhausted` when the pool is empty and `AccountNumber::MAX`
    /// has already been handed out. Neither the pool nor the counter is modified in that
    /// case.
    pub fn mint(&mut self) -> Result<(AccountNumber, NumberSource), LedgerError> {
        if let Some(number) = self.recycled.take_smallest() {
            return Ok((number, NumberSource::Recycled));
        }

        let number = self
            .next_fresh
            .ok_or(LedgerError::AccountNumbersExhausted)?;
        self.next_fresh = number.checked_add(1);

        Ok((number, NumberSource::Fresh))
    }

    /// Return a deleted account's number for reuse
    pub fn recycle(&mut self, number: AccountNumber) {
        self.recycled.add(number);
    }

    /// The next fresh number the counter will hand out, `None` once exhausted
    pub fn next_fresh(&self) -> Option<AccountNumber> {
        self.next_fresh
    }

    pub fn recycled(&self) -> &RecycledNumberPool {
        &self.recycled
    }

    /// Release all recycled numbers, returning how many were held
    pub fn clear(&mut self) -> usize {
        self.recycled.clear()
    }
}

impl Default for AccountNumberAllocator {
    fn default() -> Self {
        Self::new(DEFAULT_FIRST_ACCOUNT_NUMBER)
    }
}
