use anyhow::Result;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use gematria_core::report::{self, ReportOptions};
use gematria_core::GematriaEngine;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "gematria")]
#[command(author, version, about = "Hebrew word encoding, gematria and numeric analysis")]
struct Cli {
    /// A Hebrew (or Latin) word, or a dot-separated sequence such as 21.12.6.13
    #[arg(allow_hyphen_values = true)]
    input: String,

    /// Disable terminal colors (off anyway when stdout is not a terminal)
    #[arg(long)]
    no_color: bool,

    /// Do not print the alphabet correspondence table
    #[arg(long)]
    no_table: bool,

    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{}", e);
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            println!("{}", report::USAGE);
            return ExitCode::FAILURE;
        }
    };

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{}", report::render_error(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let options = ReportOptions {
        color: !cli.no_color && std::io::stdout().is_terminal(),
        show_alphabet_table: !cli.no_table,
    };
    debug!(?options, "report options");

    let engine = GematriaEngine::new();
    let result = engine.analyze_input(&cli.input)?;

    let mut output = String::new();
    if let Some(sequence) = &result.decoded_from {
        output.push_str(&report::render_decoded_banner(sequence, &result.analysis.word));
        output.push('\n');
    }
    output.push_str(&report::render(&result.analysis, &options));
    Ok(output)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::default().add_directive(level.into()))
        .init();
}
