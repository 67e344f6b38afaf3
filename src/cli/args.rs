use crate::session::SessionConfig;
use crate::types::AccountNumber;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// In-memory bank account ledger driven by CREATE, DELETE, DISPLAY, TRANSACTION,
/// LOWBALANCE and EXIT commands
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "In-memory bank account ledger with account number recycling", long_about = None)]
pub struct CliArgs {
    /// Script file to read commands from instead of stdin
    #[arg(
        long = "input",
        value_name = "FILE",
        help = "Read commands from FILE instead of stdin"
    )]
    pub input_file: Option<PathBuf>,

    /// Suppress the banner and prompts
    #[arg(long, help = "Suppress the banner and the interactive prompts")]
    pub quiet: bool,

    /// First fresh account number
    #[arg(
        long = "first-account-number",
        value_name = "N",
        default_value_t = 100,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "First account number to assign when no recycled number is available"
    )]
    pub first_account_number: AccountNumber,

    /// Diagnostic log level (written to stderr)
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Diagnostic log level written to stderr"
    )]
    pub log_level: LogLevel,
}

/// Diagnostic log levels
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

impl CliArgs {
    /// Create a SessionConfig from CLI arguments
    pub fn to_session_config(&self) -> SessionConfig {
        SessionConfig::new(!self.quiet, self.first_account_number)
    }
}
