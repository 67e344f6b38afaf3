//! Error types for the bank ledger
//!
//! This module defines all error types that can occur while running ledger commands.
//! The `Display` text of each variant is the exact message shown to the user.
//!
//! # Error Categories
//!
//! - **Input Errors**: Unknown command, invalid account type, invalid transaction code,
//!   unparseable numbers
//! - **Ledger Errors**: Duplicate account, account not found, insufficient balance
//! - **Arithmetic Errors**: Balance overflow, exhausted account numbers
//! - **I/O Errors**: Reading commands or writing reports failed
//!
//! Everything except I/O errors is recoverable: the command is rejected, nothing is
//! mutated and the session continues with the next command.

use super::account::{AccountNumber, AccountType};
use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// How an account was looked up when it could not be found
#[derive(Debug, Clone, PartialEq)]
pub enum AccountRef {
    /// Lookup by account number (TRANSACTION)
    Number(AccountNumber),

    /// Lookup by holder name and account type (DELETE)
    Holder {
        name: String,
        account_type: AccountType,
    },
}

impl AccountRef {
    /// The operation that performs this kind of lookup
    pub fn operation(&self) -> &'static str {
        match self {
            AccountRef::Number(_) => "transaction",
            AccountRef::Holder { .. } => "deletion",
        }
    }
}

impl fmt::Display for AccountRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountRef::Number(number) => write!(f, "with number {}", number),
            AccountRef::Holder { name, account_type } => {
                write!(f, "'{}' of type {}", name, account_type)
            }
        }
    }
}

/// Main error type for the ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// An account with the same holder and type already exists
    #[error("Invalid: Account for '{name}' of type '{account_type}' already exists.")]
    DuplicateAccount {
        name: String,
        account_type: AccountType,
    },

    /// No live account matches the lookup
    #[error("Invalid: Account {account} does not exist for {}", account.operation())]
    AccountNotFound {
        /// The lookup that failed
        account: AccountRef,
    },

    /// Withdrawal would take the balance below the account type's minimum
    ///
    /// The account is left unchanged.
    #[error(
        "The balance is insufficient for the specified withdrawal ({})",
        account_type.withdrawal_rule()
    )]
    InsufficientBalance {
        number: AccountNumber,
        account_type: AccountType,
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Account type token was neither `savings` nor `current`
    #[error("Invalid Account Type: '{input}'. Please use 'savings' or 'current'.")]
    InvalidAccountType { input: String },

    /// Transaction code was neither 1 (deposit) nor 0 (withdrawal)
    #[error("Invalid Transaction Code (1 for deposit, 0 for withdrawal)")]
    InvalidTransactionCode { code: i64 },

    /// Unknown command verb
    #[error("Invalid command: '{input}'. Please use CREATE, DELETE, DISPLAY, TRANSACTION, LOWBALANCE, or EXIT.")]
    InvalidCommand { input: String },

    /// A numeric argument could not be parsed
    #[error("Invalid {field}: '{input}'")]
    InvalidInput {
        /// Which argument was being read
        field: String,
        /// The raw token
        input: String,
    },

    /// Balance arithmetic would overflow
    ///
    /// The transaction is rejected to keep the account intact.
    #[error("Arithmetic overflow in {operation} for account {number}")]
    ArithmeticOverflow {
        operation: String,
        number: AccountNumber,
    },

    /// The fresh-number counter cannot advance and no recycled number is available
    #[error("No account numbers left to assign")]
    AccountNumbersExhausted,

    /// Reading commands or writing output failed
    ///
    /// This is the only fatal error: it ends the session.
    #[error("I/O error: {message}")]
    IoError { message: String },
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create a DuplicateAccount error
    pub fn duplicate_account(name: &str, account_type: AccountType) -> Self {
        LedgerError::DuplicateAccount {
            name: name.to_string(),
            account_type,
        }
    }

    /// Create an AccountNotFound error for a lookup by number
    pub fn account_number_not_found(number: AccountNumber) -> Self {
        LedgerError::AccountNotFound {
            account: AccountRef::Number(number),
        }
    }

    /// Create an AccountNotFound error for a lookup by holder and type
    pub fn holder_not_found(name: &str, account_type: AccountType) -> Self {
        LedgerError::AccountNotFound {
            account: AccountRef::Holder {
                name: name.to_string(),
                account_type,
            },
        }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(
        number: AccountNumber,
        account_type: AccountType,
        balance: Decimal,
        requested: Decimal,
    ) -> Self {
        LedgerError::InsufficientBalance {
            number,
            account_type,
            balance,
            requested,
        }
    }

    /// Create an InvalidAccountType error
    pub fn invalid_account_type(input: &str) -> Self {
        LedgerError::InvalidAccountType {
            input: input.to_string(),
        }
    }

    /// Create an InvalidTransactionCode error
    pub fn invalid_transaction_code(code: i64) -> Self {
        LedgerError::InvalidTransactionCode { code }
    }

    /// Create an InvalidCommand error
    pub fn invalid_command(input: &str) -> Self {
        LedgerError::InvalidCommand {
            input: input.to_string(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: &str, input: &str) -> Self {
        LedgerError::InvalidInput {
            field: field.to_string(),
            input: input.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, number: AccountNumber) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            number,
        }
    }

    /// Whether this error should end the session
    pub fn is_fatal(&self) -> bool {
        matches!(self, LedgerError::IoError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case::duplicate_account(
        LedgerError::DuplicateAccount { name: "Alice".to_string(), account_type: AccountType::Savings },
        "Invalid: Account for 'Alice' of type 'savings' already exists."
    )]
    #[case::account_number_not_found(
        LedgerError::account_number_not_found(999),
        "Invalid: Account with number 999 does not exist for transaction"
    )]
    #[case::holder_not_found(
        LedgerError::holder_not_found("Bob", AccountType::Current),
        "Invalid: Account 'Bob' of type current does not exist for deletion"
    )]
    #[case::insufficient_savings(
        LedgerError::insufficient_balance(100, AccountType::Savings, Decimal::new(15000, 2), Decimal::new(6000, 2)),
        "The balance is insufficient for the specified withdrawal (Minimum Rs 100.00 required for Savings)"
    )]
    #[case::insufficient_current(
        LedgerError::insufficient_balance(101, AccountType::Current, Decimal::new(1000, 2), Decimal::new(2000, 2)),
        "The balance is insufficient for the specified withdrawal (Cannot overdraw)"
    )]
    #[case::invalid_account_type(
        LedgerError::InvalidAccountType { input: "checking".to_string() },
        "Invalid Account Type: 'checking'. Please use 'savings' or 'current'."
    )]
    #[case::invalid_transaction_code(
        LedgerError::InvalidTransactionCode { code: 7 },
        "Invalid Transaction Code (1 for deposit, 0 for withdrawal)"
    )]
    #[case::invalid_command(
        LedgerError::InvalidCommand { input: "create".to_string() },
        "Invalid command: 'create'. Please use CREATE, DELETE, DISPLAY, TRANSACTION, LOWBALANCE, or EXIT."
    )]
    #[case::invalid_input(
        LedgerError::InvalidInput { field: "amount".to_string(), input: "ten".to_string() },
        "Invalid amount: 'ten'"
    )]
    #[case::arithmetic_overflow(
        LedgerError::ArithmeticOverflow { operation: "deposit".to_string(), number: 100 },
        "Arithmetic overflow in deposit for account 100"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::duplicate_account(
        LedgerError::duplicate_account("Alice", AccountType::Savings),
        LedgerError::DuplicateAccount { name: "Alice".to_string(), account_type: AccountType::Savings }
    )]
    #[case::invalid_account_type(
        LedgerError::invalid_account_type("x"),
        LedgerError::InvalidAccountType { input: "x".to_string() }
    )]
    #[case::invalid_input(
        LedgerError::invalid_input("account number", "abc"),
        LedgerError::InvalidInput { field: "account number".to_string(), input: "abc".to_string() }
    )]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "Broken pipe");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::IoError { .. }));
        assert!(error.is_fatal());
        assert_eq!(error.to_string(), "I/O error: Broken pipe");
    }

    #[test]
    fn test_ledger_errors_are_not_fatal() {
        assert!(!LedgerError::AccountNumbersExhausted.is_fatal());
        assert!(!LedgerError::invalid_command("FOO").is_fatal());
    }
}
