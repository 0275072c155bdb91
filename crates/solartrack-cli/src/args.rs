//! Command-line argument definitions using clap's derive API.
//!
//! Argument structs stay in the CLI layer; handlers in [`crate::cli`] turn
//! them into core queries.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use solartrack_core::StepFilter;

/// Workflow progress viewer for solar installation customers
///
/// Reads customer records (with their tasks) exported from the operations
/// API as JSON, and shows where each customer stands in the provisioning
/// pipeline.
#[derive(Parser)]
#[command(version, about, name = "solartrack")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the phase-grouped stepper for customers in a file
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Print the effective status of one step
    #[command(alias = "st")]
    Status(StatusArgs),
    /// List customers with their overall progress
    #[command(aliases = ["l", "ls"])]
    Summary(SummaryArgs),
    /// Print the pipeline definition
    #[command(alias = "p")]
    Pipeline,
    /// Print the JSON schema of the input document
    Schema,
}

/// Show the stepper for one or all customers in a document
///
/// Phases whose applicable steps are all completed start collapsed, unless
/// --expand-all is given.
#[derive(ClapArgs)]
pub struct ShowArgs {
    /// JSON document holding one customer or an array of customers
    pub file: PathBuf,
    /// Only show the customer with this id or name (case-insensitive)
    #[arg(short, long)]
    pub customer: Option<String>,
    /// Which steps to list inside expanded phases
    #[arg(short, long, value_enum, default_value_t = StepFilterArg::All)]
    pub filter: StepFilterArg,
    /// Expand every phase regardless of completion
    #[arg(long)]
    pub expand_all: bool,
}

/// Print the effective status of a step for each selected customer
#[derive(ClapArgs)]
pub struct StatusArgs {
    /// JSON document holding one customer or an array of customers
    pub file: PathBuf,
    /// Step key, e.g. finance_registration
    pub step: String,
    /// Only query the customer with this id or name (case-insensitive)
    #[arg(short, long)]
    pub customer: Option<String>,
}

/// List every customer in a document with overall progress
#[derive(ClapArgs)]
pub struct SummaryArgs {
    /// JSON document holding one customer or an array of customers
    pub file: PathBuf,
}

/// Command-line representation of step filters
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StepFilterArg {
    /// Every step
    All,
    /// Steps that count toward progress
    Applicable,
    /// Applicable steps not yet completed
    Outstanding,
    /// Completed steps
    Completed,
}

impl From<StepFilterArg> for StepFilter {
    fn from(val: StepFilterArg) -> Self {
        match val {
            StepFilterArg::All => StepFilter::All,
            StepFilterArg::Applicable => StepFilter::Applicable,
            StepFilterArg::Outstanding => StepFilter::Outstanding,
            StepFilterArg::Completed => StepFilter::Completed,
        }
    }
}
