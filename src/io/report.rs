//! Report rendering for account listings and confirmations
//!
//! All writers take any `Write` sink so they can be tested against a `Vec<u8>`.
//! Balances are always rendered with exactly 2 decimal places.

use crate::types::{Account, LedgerError};
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::Write;

const ACCOUNT_TABLE_RULE_WIDTH: usize = 122;
const LOW_BALANCE_RULE_WIDTH: usize = 100;
const NAME_WIDTH: usize = 50;
const BALANCE_WIDTH: usize = 10;

/// Render a currency amount with exactly 2 decimal places
pub fn format_money(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

fn rule(width: usize) -> String {
    "-".repeat(width)
}

/// Write the confirmation block printed after CREATE
pub fn write_account_created(account: &Account, output: &mut dyn Write) -> Result<(), LedgerError> {
    writeln!(output, "Account Created Successfully")?;
    writeln!(output, "Account Number: {}", account.number)?;
    writeln!(output, "Account Holder: {}", account.holder)?;
    writeln!(output, "Account Type: {}", account.account_type)?;
    writeln!(output, "Balance: Rs {}", format_money(account.balance))?;
    writeln!(output)?;
    Ok(())
}

/// Write the DISPLAY table
///
/// Columns: Account Number, Account Type, Name, Balance. Rows are written in the
/// order given; callers pass them sorted by account number.
pub fn write_account_table(accounts: &[Account], output: &mut dyn Write) -> Result<(), LedgerError> {
    if accounts.is_empty() {
        writeln!(output, "No Accounts to display")?;
        return Ok(());
    }

    writeln!(
        output,
        "Account Number\t\tAccount Type\t\t{:<name$}\t\t{:>9}",
        "Name",
        "Balance",
        name = NAME_WIDTH
    )?;
    writeln!(output, "{}", rule(ACCOUNT_TABLE_RULE_WIDTH))?;
    for account in accounts {
        writeln!(
            output,
            "{}\t\t\t{}\t\t\t{:<name$}\t\t{:>balance$}",
            account.number,
            account.account_type,
            account.holder,
            format_money(account.balance),
            name = NAME_WIDTH,
            balance = BALANCE_WIDTH
        )?;
    }
    writeln!(output, "{}", rule(ACCOUNT_TABLE_RULE_WIDTH))?;
    Ok(())
}

/// Write the LOWBALANCE table
///
/// Same layout as the DISPLAY table without the type column.
pub fn write_low_balance_table(
    accounts: &[&Account],
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    writeln!(output, "Accounts with balance less than Rs 100.00:")?;
    writeln!(
        output,
        "Account Number\t\t{:<name$}\t\t{:>12}",
        "Name",
        "Balance",
        name = NAME_WIDTH
    )?;
    writeln!(output, "{}", rule(LOW_BALANCE_RULE_WIDTH))?;
    for account in accounts {
        writeln!(
            output,
            "{}\t\t\t{:<name$}\t\t{:>balance$}",
            account.number,
            account.holder,
            format_money(account.balance),
            name = NAME_WIDTH,
            balance = BALANCE_WIDTH
        )?;
    }
    if accounts.is_empty() {
        writeln!(output, "No accounts found with balance less than Rs 100.00")?;
    }
    writeln!(output, "{}", rule(LOW_BALANCE_RULE_WIDTH))?;
    Ok(())
}
