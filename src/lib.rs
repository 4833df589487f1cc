pub mod command;
pub mod error;
pub mod parser;
pub mod persistence;
pub mod task;
pub mod tasklist;

use clap::Parser;
use std::path::PathBuf;

/// CLI shared between main and tests
#[derive(Parser, Debug)]
#[command(name = "duke", version, about = "A line-oriented task tracker")]
pub struct Cli {
    /// Optional override for the data file
    #[arg(long)]
    pub data_file: Option<PathBuf>,
}
