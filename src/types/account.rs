//! Account-related types for the bank ledger
//!
//! This module defines the Account structure, the account type enum and the
//! balance thresholds attached to each account type.

use super::error::LedgerError;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Account number
///
/// Positive and unique among live accounts. Fresh numbers start at 100 by default.
pub type AccountNumber = u32;

/// Balance below which an account is reported by LOWBALANCE (strict less-than)
pub const LOW_BALANCE_THRESHOLD: Decimal = Decimal::ONE_HUNDRED;

/// Kind of account
///
/// The kind decides the minimum balance a withdrawal must leave behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountType {
    /// Must keep at least 100.00 after a withdrawal
    Savings,

    /// May be drawn down to exactly zero, never below
    Current,
}

impl AccountType {
    /// Minimum balance a withdrawal must leave on this kind of account
    pub fn minimum_balance(self) -> Decimal {
        match self {
            AccountType::Savings => Decimal::ONE_HUNDRED,
            AccountType::Current => Decimal::ZERO,
        }
    }

    /// Human-readable withdrawal rule, used in insufficient balance messages
    pub fn withdrawal_rule(self) -> &'static str {
        match self {
            AccountType::Savings => "Minimum Rs 100.00 required for Savings",
            AccountType::Current => "Cannot overdraw",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AccountType::Savings => "savings",
            AccountType::Current => "current",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = LedgerError;

    /// Parse an account type token
    ///
    /// Matching is exact and case-sensitive: only `savings` and `current` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "savings" => Ok(AccountType::Savings),
            "current" => Ok(AccountType::Current),
            _ => Err(LedgerError::invalid_account_type(s)),
        }
    }
}

/// A live bank account
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Unique account number
    pub number: AccountNumber,

    /// Account holder, matched exactly (no case folding or trimming)
    pub holder: String,

    /// Savings or current
    pub account_type: AccountType,

    /// Current balance
    ///
    /// Deposits are not validated, so the balance can become negative
    /// through a negative deposit.
    pub balance: Decimal,
}

impl Account {
    /// Create a new account
    ///
    /// # Arguments
    ///
    /// * `number` - The account number minted for this account
    /// * `holder` - The account holder's name
    /// * `account_type` - Savings or current
    /// * `balance` - The initial balance
    pub fn new(
        number: AccountNumber,
        holder: impl Into<String>,
        account_type: AccountType,
        balance: Decimal,
    ) -> Self {
        Account {
            number,
            holder: holder.into(),
            account_type,
            balance,
        }
    }

    /// Whether this account belongs to `holder` with the given type
    pub fn matches(&self, holder: &str, account_type: AccountType) -> bool {
        self.account_type == account_type && self.holder == holder
    }

    /// Whether the balance is strictly below [`LOW_BALANCE_THRESHOLD`]
    pub fn is_low_balance(&self) -> bool {
        self.balance < LOW_BALANCE_THRESHOLD
    }
}
