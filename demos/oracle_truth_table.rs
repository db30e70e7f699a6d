//! Prints the truth table of the 3-input Grover oracle.
//!
//! Run with: `cargo run --example oracle_truth_table`

use clap::Parser;

use oracle_check::function::from_fn3;
use oracle_check::oracle::{original_expr, oracle_original};
use oracle_check::truth_table::TruthTable;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        match args.verbose {
            0 => simplelog::LevelFilter::Info,
            1 => simplelog::LevelFilter::Debug,
            _ => simplelog::LevelFilter::Trace,
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    log::info!("oracle: {}", original_expr());

    let table = TruthTable::from_function(&from_fn3(oracle_original))?;
    println!("{}", table);
    log::info!("{} of {} inputs are marked", table.count_ones(), table.size());

    Ok(())
}
