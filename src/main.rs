use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use dl_lexer::{errors::errors::Error, lexer::config::LexerConfig, render_error, Interpreter};

#[derive(Parser)]
#[command(name = "dl-lexer")]
#[command(about = "Tokenizes a .dl source file and prints its tokens", long_about = None)]
struct Cli {
    /// The source file to tokenize
    #[arg(default_value = "main.dl")]
    file: PathBuf,

    /// Reject malformed numbers and unknown symbols
    #[arg(long)]
    strict: bool,

    /// Additional symbols to classify as `sym` (repeatable)
    #[arg(long = "symbol", value_name = "SYMBOL")]
    symbols: Vec<String>,

    /// Run the interpreter after tokenizing
    #[arg(long)]
    interpret: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter(cli.verbose)))
        .init();

    let code = read_to_string(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;

    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.file.to_string_lossy().into_owned());

    let mut config = if cli.strict {
        LexerConfig::strict()
    } else {
        LexerConfig::default()
    };
    for symbol in cli.symbols {
        config = config.with_symbol(symbol);
    }

    let interpreter = Interpreter::with_config(code, file_name, config);

    let start = Instant::now();
    let tokens = match interpreter.parse() {
        Ok(tokens) => tokens,
        Err(error) => return Ok(report(&error, interpreter.code())),
    };
    log::debug!("Tokenized in {:?}", start.elapsed());

    for token in &tokens {
        println!("{}", token);
    }

    if cli.interpret {
        if let Err(error) = interpreter.interpret(&tokens) {
            return Ok(report(&error, interpreter.code()));
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Default `env_logger` filter, overridden by `RUST_LOG`.
fn log_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

fn report(error: &Error, source: &str) -> ExitCode {
    eprint!("{}", render_error(error, source));
    ExitCode::FAILURE
}
