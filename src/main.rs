//! lifetally CLI.
//!
//! Usage: lifetally <FILES>...

use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process;

use lifetally::CensusCommand;

#[derive(Parser)]
#[command(name = "lifetally")]
#[command(version)]
#[command(about = "Report the year the most listed people were alive (1900-2000)", long_about = None)]
struct Cli {
    /// Roster files (Name,BirthYear,DeathYear per line)
    files: Vec<PathBuf>,

    /// Print processing statistics to stderr
    #[arg(long)]
    stats: bool,
}

fn main() {
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let cmd = CensusCommand::new();
    match cmd.run(&cli.files, &mut handle) {
        Ok(stats) => {
            if cli.stats {
                eprintln!("Census stats: {}", stats);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
