//! pwd-generator - generate a password and rate its strength

use std::io::{self, Write};

use anyhow::{Result, bail};
use clap::{ArgAction, Parser};
use secrecy::ExposeSecret;
use tracing_subscriber::EnvFilter;

use pwd_generator::{LengthPrompt, MIN_LENGTH, generate, get_max_length, validate_max_length};

/// Generate a random password and rate its strength
#[derive(Parser)]
#[command(name = "pwd-generator", version, about, long_about = None)]
struct Cli {
    /// Password length (prompts when omitted)
    #[arg(short, long)]
    length: Option<usize>,

    /// Largest accepted length (defaults to $PWD_MAX_LENGTH or 1024)
    #[arg(long)]
    max_length: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let max = match cli.max_length {
        Some(max) => validate_max_length(max)?,
        None => get_max_length()?,
    };

    println!("Starting password generator...");

    let length = match cli.length {
        Some(length) if length > max => bail!("Value must be at most {}.", max),
        // Short lengths go straight to the generator, which rejects them.
        Some(length) => length,
        None => {
            let stdin = io::stdin();
            LengthPrompt::new(MIN_LENGTH, Some(max)).run(stdin.lock(), io::stdout())?
        }
    };

    println!("Generating password...");
    let password = generate(length)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "\nYour password is: {}", password.expose_secret())?;
    writeln!(stdout, "Password strength: {}", password.score())?;

    Ok(())
}
