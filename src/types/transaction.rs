//! Transaction kinds for the bank ledger

use super::error::LedgerError;
use std::fmt;

/// Direction of a balance transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Credit the account unconditionally
    Deposit,

    /// Debit the account, subject to the account type's minimum balance
    Withdraw,
}

impl TransactionKind {
    /// Map a transaction code entered at the prompt
    ///
    /// `1` is a deposit and `0` is a withdrawal. Any other code is rejected.
    pub fn from_code(code: i64) -> Result<Self, LedgerError> {
        match code {
            1 => Ok(TransactionKind::Deposit),
            0 => Ok(TransactionKind::Withdraw),
            other => Err(LedgerError::invalid_transaction_code(other)),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => f.write_str("deposit"),
            TransactionKind::Withdraw => f.write_str("withdrawal"),
        }
    }
}
