//! Account registry module
//!
//! This module provides the `AccountRegistry` struct which owns every live account
//! together with the allocator that mints their numbers.
//!
//! The AccountRegistry is responsible for:
//! - Rejecting duplicate (holder, type) pairs
//! - Minting account numbers, recycled first
//! - Applying deposits and withdrawals under each account type's minimum balance
//! - Providing number-sorted account listings for display

use crate::core::number_pool::{
    AccountNumberAllocator, NumberSource, RecycledNumberPool, DEFAULT_FIRST_ACCOUNT_NUMBER,
};
use crate::types::{Account, AccountNumber, AccountType, LedgerError, TransactionKind};
use rust_decimal::Decimal;

/// Owns the live accounts and the account number allocator
///
/// Accounts are kept in insertion order; listings re-sort them by number
/// on every call.
pub struct AccountRegistry {
    /// Live accounts, appended on creation
    accounts: Vec<Account>,

    /// Recycle pool and fresh-number counter
    numbers: AccountNumberAllocator,
}

impl AccountRegistry {
    /// Create an empty registry whose first fresh account number is 100
    pub fn new() -> Self {
        Self::with_first_account_number(DEFAULT_FIRST_ACCOUNT_NUMBER)
    }

    /// Create an empty registry with a custom first fresh account number
    pub fn with_first_account_number(first: AccountNumber) -> Self {
        AccountRegistry {
            accounts: Vec::new(),
            numbers: AccountNumberAllocator::new(first),
        }
    }

    /// Open a new account
    ///
    /// Mints an account number (smallest recycled number first, otherwise a fresh one)
    /// and appends the account at the end of the live collection.
    ///
    /// # Arguments
    ///
    /// * `account_type` - Savings or current
    /// * `name` - The account holder, compared exactly
    /// * `initial_balance` - Opening balance, not validated
    ///
    /// # Returns
    ///
    /// * `Ok(AccountNumber)` - The number assigned to the new account
    /// * `Err(LedgerError)` - If the account could not be created
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An account with the same holder and type already exists
    /// - No account number can be minted
    ///
    /// No state changes on error.
    pub fn create(
        &mut self,
        account_type: AccountType,
        name: &str,
        initial_balance: Decimal,
    ) -> Result<AccountNumber, LedgerError> {
        if self.exists_duplicate(name, account_type) {
            tracing::debug!(holder = name, %account_type, "rejecting duplicate account");
            return Err(LedgerError::duplicate_account(name, account_type));
        }

        let (number, source) = self.numbers.mint()?;
        tracing::debug!(
            number,
            recycled = source == NumberSource::Recycled,
            "minted account number"
        );

        self.accounts
            .push(Account::new(number, name, account_type, initial_balance));
        tracing::info!(number, holder = name, %account_type, balance = %initial_balance, "account created");

        Ok(number)
    }

    /// Close the first account matching holder and type
    ///
    /// The freed number is returned to the recycle pool.
    ///
    /// # Returns
    ///
    /// * `Ok(AccountNumber)` - The number of the deleted account
    /// * `Err(LedgerError)` - `AccountNotFound` if nothing matches
    pub fn delete(
        &mut self,
        account_type: AccountType,
        name: &str,
    ) -> Result<AccountNumber, LedgerError> {
        let position = self
            .accounts
            .iter()
            .position(|account| account.matches(name, account_type))
            .ok_or_else(|| LedgerError::holder_not_found(name, account_type))?;

        let account = self.accounts.remove(position);
        self.numbers.recycle(account.number);
        tracing::info!(number = account.number, holder = name, %account_type, "account deleted");

        Ok(account.number)
    }

    /// Look up a live account by number
    pub fn find(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.iter().find(|account| account.number == number)
    }

    fn find_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.number == number)
    }

    /// Apply a deposit or withdrawal to an account
    ///
    /// Deposits are unconditional; the amount's sign is not checked. A withdrawal must
    /// leave at least the account type's minimum balance: 100.00 for savings, 0 for current.
    ///
    /// # Arguments
    ///
    /// * `number` - The account to update
    /// * `amount` - The amount to deposit or withdraw
    /// * `kind` - Deposit or withdraw
    ///
    /// # Returns
    ///
    /// * `Ok(Decimal)` - The new balance
    /// * `Err(LedgerError)` - If the transaction was rejected
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No live account has this number
    /// - A withdrawal would take the balance below the minimum
    /// - The balance arithmetic would overflow
    ///
    /// The balance is unchanged on error.
    pub fn transact(
        &mut self,
        number: AccountNumber,
        amount: Decimal,
        kind: TransactionKind,
    ) -> Result<Decimal, LedgerError> {
        let account = self
            .find_mut(number)
            .ok_or_else(|| LedgerError::account_number_not_found(number))?;

        let new_balance = match kind {
            TransactionKind::Deposit => account
                .balance
                .checked_add(amount)
                .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", number))?,
            TransactionKind::Withdraw => {
                let remaining = account
                    .balance
                    .checked_sub(amount)
                    .ok_or_else(|| LedgerError::arithmetic_overflow("withdrawal", number))?;

                if remaining < account.account_type.minimum_balance() {
                    tracing::debug!(
                        number,
                        balance = %account.balance,
                        requested = %amount,
                        "withdrawal below minimum balance"
                    );
                    return Err(LedgerError::insufficient_balance(
                        number,
                        account.account_type,
                        account.balance,
                        amount,
                    ));
                }
                remaining
            }
        };

        account.balance = new_balance;
        tracing::info!(number, %kind, %amount, balance = %new_balance, "transaction applied");

        Ok(new_balance)
    }

    /// All live accounts, ascending by account number
    ///
    /// The live collection is re-sorted in place on every call.
    pub fn list_sorted_by_number(&mut self) -> &[Account] {
        self.accounts.sort_unstable_by_key(|account| account.number);
        &self.accounts
    }

    /// Live accounts with a balance strictly below 100.00, ascending by account number
    pub fn list_low_balance(&mut self) -> Vec<&Account> {
        self.list_sorted_by_number()
            .iter()
            .filter(|account| account.is_low_balance())
            .collect()
    }

    /// Whether a live account already has this holder and type
    pub fn exists_duplicate(&self, name: &str, account_type: AccountType) -> bool {
        self.accounts
            .iter()
            .any(|account| account.matches(name, account_type))
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Numbers freed by deletion and not yet reused
    pub fn recycled_numbers(&self) -> &RecycledNumberPool {
        self.numbers.recycled()
    }

    /// Release every account and recycled number
    ///
    /// The fresh-number counter is kept.
    ///
    /// # Returns
    ///
    /// `(accounts released, recycled numbers released)`
    pub fn teardown(&mut self) -> (usize, usize) {
        let accounts = self.accounts.len();
        self.accounts.clear();
        let recycled = self.numbers.clear();
        tracing::debug!(accounts, recycled, "registry released");
        (accounts, recycled)
    }
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::new()
    }
}
