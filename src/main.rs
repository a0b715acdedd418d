use balance::run;
use clap::error::ErrorKind;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::path::PathBuf;
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Zero out a random half of a file's bytes and rewrite it in place.
///
/// WARNING: destructive. The original file is deleted before the new
/// contents are written and no backup is kept.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// File to balance
    filepath: PathBuf,

    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// Function to set up logging on stderr, keeping stdout for the user
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn usage() -> String {
    let program = env::args().next().unwrap_or_else(|| "balance".to_string());
    format!("Usage: {} <filepath>", program)
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            process::exit(0);
        }
        Err(_) => {
            println!("{}", usage());
            process::exit(1);
        }
    };

    init_logging(cli.verbose);

    let mut rng = StdRng::from_entropy();
    match run(&cli.filepath, &mut rng) {
        Ok(report) => println!("{}", report),
        Err(e) => {
            error!("{}", e.detail());
            println!("Error: {}", e);
            process::exit(1);
        }
    }
}
