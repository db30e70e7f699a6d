//! Checks `!(!a + b) == a - b` on small operands and at the `i32` extremes.
//!
//! Any violation aborts the program.
//!
//! Run with: `cargo run --example test_sub`

use clap::Parser;

use oracle_check::subtract::smoke_cases;

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

    let mut checked = 0;
    for case in smoke_cases() {
        println!("{}", case);
        assert_eq!(case.actual, case.expected, "{} - {}", case.a, case.b);
        checked += 1;
    }
    log::info!("subtraction identity holds on {} pairs", checked);

    Ok(())
}
