//! Compares the original Grover oracle with its minimized form.
//!
//! For every input, prints the value of both versions, then `All matched.` or
//! `Mismatch found!`. A mismatch is reported, not fatal.
//!
//! Run with: `cargo run --example oracle_equivalence`

use clap::Parser;

use oracle_check::assignment::Domain;
use oracle_check::oracle::{minimized_expr, oracle_minimized, oracle_original, original_expr, verify_minimization, ORACLE_ARITY};

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

    log::info!("original:  {}", original_expr());
    log::info!("minimized: {}", minimized_expr());

    for input in Domain::new(ORACLE_ARITY)? {
        let (q0, q1, q2) = (input.bit(0), input.bit(1), input.bit(2));
        println!("Original:  {} {}", input, oracle_original(q0, q1, q2) as u8);
        println!("Minimized: {} {}", input, oracle_minimized(q0, q1, q2) as u8);
    }

    let report = verify_minimization()?;
    for mismatch in report.mismatches() {
        log::warn!("mismatch at {}", mismatch);
    }
    println!("{}", report.summary());

    Ok(())
}
