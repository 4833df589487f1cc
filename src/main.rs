use std::io::{self, BufRead};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use duke::{parser, persistence, Cli};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let data_path = match cli.data_file {
        Some(path) => path,
        None => persistence::default_path()?,
    };

    let mut tasks = persistence::load(&data_path);

    println!("Hello! I'm Duke");
    println!("What can I do for you?");

    // One line per command; everything a command reports is recoverable,
    // so the loop only ends on `bye` or end of input.
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parser::parse_command(&line) {
            Ok(command) => {
                if command.is_exit() {
                    println!("Bye. Hope to see you again soon!");
                    break;
                }
                match command.execute(&mut tasks, &data_path) {
                    Ok(Some(response)) => println!("{response}"),
                    Ok(None) => {}
                    Err(err) => println!("{err}"),
                }
            }
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}
