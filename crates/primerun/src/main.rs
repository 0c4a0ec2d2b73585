//! Find the prime below a bound that is the sum of the longest run of
//! consecutive primes, and print it.
//!
//! # Examples
//!
//! ```sh
//! # Reference scenario (N = 1,000,000)
//! primerun --sieve
//!
//! # Smaller bound, per-candidate trial division
//! primerun --target 1000
//!
//! # Machine-readable output
//! primerun --target 1000 --json
//! ```

use clap::Parser;
use primerun::generate::GeneratorKind;
use primerun::query::Query;
use tracing::Level;

/// Find the prime below a bound that is the sum of the longest run of
/// consecutive primes.
#[derive(Parser)]
#[command(name = "primerun")]
struct Cli {
    /// Inclusive upper bound on the primes summed and on the sum itself
    #[arg(long, default_value_t = primerun::DEFAULT_TARGET)]
    target: u64,

    /// Generate the prime sequence with a sieve instead of per-candidate
    /// trial division (identical results, much faster for large bounds)
    #[arg(long)]
    sieve: bool,

    /// Print the result as a JSON object instead of the text line
    #[arg(long)]
    json: bool,

    /// Log pipeline stages at debug level
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let generator = if cli.sieve {
        GeneratorKind::Sieve
    } else {
        GeneratorKind::TrialDivision
    };

    let result = Query::new(cli.target).with_generator(generator).run();

    if cli.json {
        match serde_json::to_string(&result) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                eprintln!("Error: failed to serialize result: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("{result}");
    }
}
