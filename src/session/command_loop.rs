//! Command loop
//!
//! The session reads one verb at a time, collects that verb's arguments token by token
//! (printing a prompt before each one when prompts are enabled) and dispatches to the
//! registry.
//!
//! # Error Handling
//!
//! Every ledger error is reported to the output as its message and the loop moves on to
//! the next command. Only I/O errors end the session early.
//!
//! # End of Input
//!
//! Running out of input, at a verb or in the middle of a command's arguments, ends the
//! session exactly like `EXIT`.

use crate::core::AccountRegistry;
use crate::io::command_reader::{
    parse_account_number, parse_amount, parse_transaction_code, Command, CommandReader,
};
use crate::io::report::{
    format_money, write_account_created, write_account_table, write_low_balance_table,
};
use crate::session::SessionConfig;
use crate::types::{AccountType, LedgerError, TransactionKind};
use std::io::{BufRead, Write};

const BANNER: &str = "Bank Management System\n\
                      Commands: CREATE, DELETE, DISPLAY, TRANSACTION, LOWBALANCE, EXIT\n";

/// What the loop does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// A command session over an input source and an output sink
///
/// # Examples
///
/// ```
/// use bank_ledger::session::{Session, SessionConfig};
/// use std::io::Cursor;
///
/// let input = Cursor::new("CREATE savings Alice 500\nEXIT\n");
/// let mut output = Vec::new();
///
/// Session::new(input, &mut output, SessionConfig::quiet())
///     .run()
///     .expect("session failed");
///
/// let text = String::from_utf8(output).unwrap();
/// assert!(text.contains("Account Number: 100"));
/// ```
pub struct Session<R, W> {
    reader: CommandReader<R>,
    output: W,
    registry: AccountRegistry,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with an empty registry
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Session {
            reader: CommandReader::new(input),
            output,
            registry: AccountRegistry::with_first_account_number(config.first_account_number),
            config,
        }
    }

    pub fn registry(&self) -> &AccountRegistry {
        &self.registry
    }

    /// Run commands until EXIT or end of input
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The session ended through EXIT or end of input
    /// * `Err(LedgerError)` - Reading input or writing output failed
    pub fn run(&mut self) -> Result<(), LedgerError> {
        if self.config.prompts {
            write!(self.output, "{}", BANNER)?;
        }

        loop {
            self.prompt("\nEnter command: ")?;
            let Some(verb) = self.reader.next_token()? else {
                tracing::debug!("end of input");
                break;
            };

            let result = verb
                .parse::<Command>()
                .and_then(|command| self.execute(command));

            match result {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    tracing::debug!(verb = %verb, error = %e, "command rejected");
                    writeln!(self.output, "{}", e)?;
                }
            }
        }

        self.finish()
    }

    fn execute(&mut self, command: Command) -> Result<Flow, LedgerError> {
        tracing::debug!(?command, "executing command");
        match command {
            Command::Create => self.create(),
            Command::Delete => self.delete(),
            Command::Display => self.display(),
            Command::Transaction => self.transaction(),
            Command::LowBalance => self.low_balance(),
            Command::Exit => Ok(Flow::Exit),
        }
    }

    fn create(&mut self) -> Result<Flow, LedgerError> {
        let Some(type_token) = self.next_arg("Enter account type (savings/current): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(name) = self.next_arg("Enter account holder's name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(amount_token) = self.next_arg("Enter initial deposit amount: ")? else {
            return Ok(Flow::Exit);
        };

        let account_type: AccountType = type_token.parse()?;
        let balance = parse_amount(&amount_token)?;

        let number = self.registry.create(account_type, &name, balance)?;
        if let Some(account) = self.registry.find(number) {
            write_account_created(account, &mut self.output)?;
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow, LedgerError> {
        let Some(type_token) = self.next_arg("Enter account type to delete (savings/current): ")?
        else {
            return Ok(Flow::Exit);
        };
        let Some(name) = self.next_arg("Enter account holder's name to delete: ")? else {
            return Ok(Flow::Exit);
        };

        let account_type: AccountType = type_token.parse()?;

        if self.registry.is_empty() {
            writeln!(self.output, "No Accounts to delete")?;
            return Ok(Flow::Continue);
        }

        let number = self.registry.delete(account_type, &name)?;
        writeln!(
            self.output,
            "Account deleted successfully! Account Number: {}",
            number
        )?;
        Ok(Flow::Continue)
    }

    fn display(&mut self) -> Result<Flow, LedgerError> {
        write_account_table(self.registry.list_sorted_by_number(), &mut self.output)?;
        Ok(Flow::Continue)
    }

    fn transaction(&mut self) -> Result<Flow, LedgerError> {
        let Some(number_token) = self.next_arg("Enter account number for transaction: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(amount_token) = self.next_arg("Enter amount: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(code_token) =
            self.next_arg("Enter transaction code (1 for deposit, 0 for withdrawal): ")?
        else {
            return Ok(Flow::Exit);
        };

        let number = parse_account_number(&number_token)?;
        let amount = parse_amount(&amount_token)?;
        let kind = TransactionKind::from_code(parse_transaction_code(&code_token)?)?;

        if self.registry.is_empty() {
            writeln!(self.output, "No Accounts to display for transactions")?;
            return Ok(Flow::Continue);
        }

        let balance = self.registry.transact(number, amount, kind)?;
        let label = match kind {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdraw => "Withdrawal",
        };
        writeln!(
            self.output,
            "{} successful. Updated balance for account {} is Rs.{}",
            label,
            number,
            format_money(balance)
        )?;
        Ok(Flow::Continue)
    }

    fn low_balance(&mut self) -> Result<Flow, LedgerError> {
        if self.registry.is_empty() {
            writeln!(self.output, "No Accounts to display")?;
            return Ok(Flow::Continue);
        }

        let low = self.registry.list_low_balance();
        write_low_balance_table(&low, &mut self.output)?;
        Ok(Flow::Continue)
    }

    /// Print the goodbye line and release both collections
    fn finish(&mut self) -> Result<(), LedgerError> {
        writeln!(self.output, "Exiting program. Goodbye!")?;
        self.output.flush()?;

        let (accounts, recycled) = self.registry.teardown();
        tracing::info!(accounts, recycled, "session closed");
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<(), LedgerError> {
        if self.config.prompts {
            write!(self.output, "{}", text)?;
            self.output.flush()?;
        }
        Ok(())
    }

    fn next_arg(&mut self, prompt: &str) -> Result<Option<String>, LedgerError> {
        self.prompt(prompt)?;
        self.reader.next_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_quiet(script: &str) -> String {
        let mut output = Vec::new();
        Session::new(Cursor::new(script), &mut output, SessionConfig::quiet())
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn created(number: u32, holder: &str, account_type: &str, balance: &str) -> String {
        format!(
            "Account Created Successfully\nAccount Number: {}\nAccount Holder: {}\nAccount Type: {}\nBalance: Rs {}\n\n",
            number, holder, account_type, balance
        )
    }

    #[test]
    fn test_exit_only() {
        assert_eq!(run_quiet("EXIT\n"), "Exiting program. Goodbye!\n");
    }

    #[test]
    fn test_end_of_input_behaves_like_exit() {
        assert_eq!(run_quiet(""), "Exiting program. Goodbye!\n");
    }

    #[test]
    fn test_end_of_input_inside_arguments() {
        let text = run_quiet("CREATE savings Alice");
        assert_eq!(text, "Exiting program. Goodbye!\n");
    }

    #[test]
    fn test_commands_after_exit_are_ignored() {
        let text = run_quiet("EXIT\nCREATE savings Alice 500\n");
        assert_eq!(text, "Exiting program. Goodbye!\n");
    }

    #[test]
    fn test_recycling_scenario() {
        let text = run_quiet(
            "CREATE savings Alice 500\n\
             CREATE current Bob 200\n\
             DELETE savings Alice\n\
             CREATE current Carol 300\n\
             DISPLAY\n\
             EXIT\n",
        );

        let mut expected = String::new();
        expected.push_str(&created(100, "Alice", "savings", "500.00"));
        expected.push_str(&created(101, "Bob", "current", "200.00"));
        expected.push_str("Account deleted successfully! Account Number: 100\n");
        expected.push_str(&created(100, "Carol", "current", "300.00"));
        expected.push_str(&format!(
            "Account Number\t\tAccount Type\t\t{:<50}\t\t  Balance\n",
            "Name"
        ));
        expected.push_str(&"-".repeat(122));
        expected.push('\n');
        expected.push_str(&format!(
            "100\t\t\tcurrent\t\t\t{:<50}\t\t    300.00\n",
            "Carol"
        ));
        expected.push_str(&format!(
            "101\t\t\tcurrent\t\t\t{:<50}\t\t    200.00\n",
            "Bob"
        ));
        expected.push_str(&"-".repeat(122));
        expected.push('\n');
        expected.push_str("Exiting program. Goodbye!\n");

        assert_eq!(text, expected);
    }

    #[test]
    fn test_duplicate_account_rejected_and_loop_continues() {
        let text = run_quiet(
            "CREATE savings Alice 500\n\
             CREATE savings Alice 10\n\
             TRANSACTION 100 0 1\n",
        );

        assert!(text.contains("Invalid: Account for 'Alice' of type 'savings' already exists.\n"));
        assert!(text.contains("Deposit successful. Updated balance for account 100 is Rs.500.00\n"));
    }

    #[test]
    fn test_invalid_account_type_consumes_arguments() {
        let text = run_quiet("CREATE checking Alice 500\nDISPLAY\n");

        assert_eq!(
            text,
            "Invalid Account Type: 'checking'. Please use 'savings' or 'current'.\n\
             No Accounts to display\n\
             Exiting program. Goodbye!\n"
        );
    }

    #[test]
    fn test_invalid_command() {
        let text = run_quiet("create\n");
        assert!(text.starts_with("Invalid command: 'create'. Please use CREATE, DELETE, DISPLAY, TRANSACTION, LOWBALANCE, or EXIT.\n"));
    }

    #[test]
    fn test_withdrawals() {
        let text = run_quiet(
            "CREATE savings Alice 150\n\
             TRANSACTION 100 50.01 0\n\
             TRANSACTION 100 50 0\n\
             CREATE current Bob 20\n\
             TRANSACTION 101 20.01 0\n\
             TRANSACTION 101 20 0\n",
        );

        assert!(text.contains("The balance is insufficient for the specified withdrawal (Minimum Rs 100.00 required for Savings)\n"));
        assert!(text.contains("Withdrawal successful. Updated balance for account 100 is Rs.100.00\n"));
        assert!(text.contains("The balance is insufficient for the specified withdrawal (Cannot overdraw)\n"));
        assert!(text.contains("Withdrawal successful. Updated balance for account 101 is Rs.0.00\n"));
    }

    #[test]
    fn test_invalid_transaction_code_does_not_reach_registry() {
        let text = run_quiet("CREATE current Bob 20\nTRANSACTION 100 5 2\nTRANSACTION 100 0 1\n");

        assert!(text.contains("Invalid Transaction Code (1 for deposit, 0 for withdrawal)\n"));
        assert!(text.contains("Updated balance for account 100 is Rs.20.00\n"));
    }

    #[test]
    fn test_transaction_on_unknown_account() {
        let text = run_quiet("CREATE current Bob 20\nTRANSACTION 999 5 1\n");
        assert!(text.contains("Invalid: Account with number 999 does not exist for transaction\n"));
    }

    #[test]
    fn test_empty_ledger_notices() {
        let text = run_quiet(
            "DELETE savings Alice\n\
             TRANSACTION 100 5 1\n\
             LOWBALANCE\n\
             DISPLAY\n",
        );

        assert_eq!(
            text,
            "No Accounts to delete\n\
             No Accounts to display for transactions\n\
             No Accounts to display\n\
             No Accounts to display\n\
             Exiting program. Goodbye!\n"
        );
    }

    #[test]
    fn test_delete_unknown_holder() {
        let text = run_quiet("CREATE savings Alice 500\nDELETE current Alice\n");
        assert!(text.contains("Invalid: Account 'Alice' of type current does not exist for deletion\n"));
    }

    #[test]
    fn test_unparseable_amount_is_reported() {
        let text = run_quiet("CREATE savings Alice lots\nDISPLAY\n");
        assert!(text.starts_with("Invalid amount: 'lots'\nNo Accounts to display\n"));
    }

    #[test]
    fn test_amount_with_digit_separator_is_rejected() {
        let text = run_quiet("CREATE savings Alice 1_000\nDISPLAY\n");
        assert!(text.starts_with("Invalid amount: '1_000'\nNo Accounts to display\n"));
    }

    #[test]
    fn test_non_utf8_name_does_not_end_session() {
        let script = b"CREATE savings Al\xE9ce 500\nCREATE current Bob 200\nDISPLAY\nEXIT\n";
        let mut output = Vec::new();
        Session::new(Cursor::new(&script[..]), &mut output, SessionConfig::quiet())
            .run()
            .unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with(&format!(
            "{}{}",
            created(100, "Al\u{FFFD}ce", "savings", "500.00"),
            created(101, "Bob", "current", "200.00")
        )));
        assert!(text.contains(&format!("101\t\t\tcurrent\t\t\t{:<50}", "Bob")));
        assert!(text.ends_with("Exiting program. Goodbye!\n"));
    }

    #[test]
    fn test_prompts_and_banner() {
        let mut output = Vec::new();
        Session::new(Cursor::new("DISPLAY\nEXIT\n"), &mut output, SessionConfig::default())
            .run()
            .unwrap();
        let text = String::from_utf8(output).unwrap();

        assert_eq!(
            text,
            "Bank Management System\n\
             Commands: CREATE, DELETE, DISPLAY, TRANSACTION, LOWBALANCE, EXIT\n\
             \nEnter command: No Accounts to display\n\
             \nEnter command: Exiting program. Goodbye!\n"
        );
    }

    #[test]
    fn test_custom_first_account_number() {
        let mut output = Vec::new();
        Session::new(
            Cursor::new("CREATE current Bob 20\n"),
            &mut output,
            SessionConfig::new(false, 5000),
        )
        .run()
        .unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("Account Number: 5000\n"));
    }

    #[test]
    fn test_exit_tears_down_registry() {
        let mut output = Vec::new();
        let mut session = Session::new(
            Cursor::new("CREATE current Bob 20\nCREATE current Ann 20\nDELETE current Bob\nEXIT\n"),
            &mut output,
            SessionConfig::quiet(),
        );
        session.run().unwrap();

        assert!(session.registry().is_empty());
        assert!(session.registry().recycled_numbers().is_empty());
    }
}
