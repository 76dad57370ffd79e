use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process;

use tx_analytics::{run, InputFormat, Result};

/// Summary statistics over a JSON or CSV transaction file.
#[derive(Parser, Debug)]
#[command(name = "tx-analytics", version)]
struct Cli {
    /// Transaction file to load; `.csv` files are read as CSV, anything else as JSON
    #[arg(default_value = "data/transactions.json")]
    input: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = report(cli) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn report(cli: Cli) -> Result<()> {
    let format = InputFormat::from_path(&cli.input);
    run(&cli.input, format, io::stdout().lock())?;
    Ok(())
}
