//! Simulates the reversible oracle, adder and adder/subtractor circuits and
//! checks each one exhaustively against its reference.
//!
//! Run with: `cargo run --example circuits -- --digits 4`

use clap::Parser;

use oracle_check::circuit::{
    adder, adder_subtractor, oracle_circuit, verify_adder, verify_adder_subtractor, verify_oracle_circuit,
};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Width of the adder operands, in bits.
    #[arg(short, long, value_name = "INT", default_value_t = 4)]
    digits: usize,

    /// Print the gate lists.
    #[arg(long)]
    show_gates: bool,

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

    // Domain of the adder/subtractor is 2n+1 bits.
    if args.digits == 0 || 2 * args.digits + 1 > 24 {
        color_eyre::eyre::bail!("--digits must be between 1 and 11, got {}", args.digits);
    }

    if args.show_gates {
        println!("{}", oracle_circuit()?);
        println!("{}", adder(args.digits)?);
        println!("{}", adder_subtractor(args.digits)?);
    }

    let report = verify_oracle_circuit()?;
    println!("Oracle circuit: {}", report);

    let report = verify_adder(args.digits)?;
    println!("Adder ({} digits): {}", args.digits, report);

    let report = verify_adder_subtractor(args.digits)?;
    println!("Adder/subtractor ({} digits): {}", args.digits, report);

    Ok(())
}
