use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use yantlr::{
    config::{CliConfig, OutputFormat},
    source, Error, Token, Tokenizer,
};

#[derive(Parser)]
#[command(author, version, about = "Tokenize an EBNF grammar file", long_about = None)]
struct Cli {
    /// Grammar file to tokenize
    #[arg(short, long, default_value = "data/default.yant")]
    input: PathBuf,

    /// Path to config file
    #[arg(short, long, default_value = "yantlr.json")]
    config: PathBuf,

    /// Output format, overrides the config file
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Enable debug mode
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(cli: &Cli, config: &CliConfig) {
    let default_directive = if cli.verbose {
        "debug".to_string()
    } else {
        config.log_level.clone()
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into()))
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn write_tokens(tokens: &[Token], format: OutputFormat, pretty: bool) -> Result<(), Error> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = match format {
        OutputFormat::Text => tokens.iter().try_for_each(|t| writeln!(out, "{}", t)),
        OutputFormat::Json => {
            let json = if pretty {
                serde_json::to_string_pretty(tokens)?
            } else {
                serde_json::to_string(tokens)?
            };
            writeln!(out, "{}", json)
        }
    };
    written.map_err(|e| Error::internal(format!("Failed to write tokens: {}", e)))
}

fn run(cli: &Cli, config: &CliConfig) -> Result<(), Error> {
    debug!("config: {:?}", config);

    let lines = source::read_lines(&cli.input)?;

    let mut tokenizer = Tokenizer::new();
    let tokens = tokenizer.tokenize(&lines);

    let format = cli.format.unwrap_or(config.output_format);
    write_tokens(&tokens, format, config.pretty_json)?;

    info!(
        tokens = tokens.len(),
        lines = lines.len(),
        "tokenized {}",
        cli.input.display()
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Logging is not up yet, so a bad config is reported directly.
    let config = match CliConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&cli, &config);

    if let Err(e) = run(&cli, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
