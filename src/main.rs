use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use std::io::Write;
use std::process::ExitCode;
use tracing::Level;

use format_chain::chain::build_chain;
use format_chain::format::Format;
use format_chain::renderer::formatter::{BasicFormatter, DebugFormatter, RendererFormatter};
use format_chain::writer::{open_append, write_as_html, write_as_json, write_as_text, WriteError};

const DEMO_PAYLOAD: &str = "Test text";
const DEMO_OUTPUT_PATH: &str = "../test.txt";

#[derive(Debug, Parser)]
#[clap(name = "format-chain", version)]
pub struct CLArgs {
    #[clap(subcommand)]
    pub routine: Option<FormatChainCommand>,
    /// Log resolution steps to stderr.
    #[clap(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum FormatChainCommand {
    /// Append the HTML, JSON and text renderings of the demo payload to ../test.txt.
    Demo,
    /// Print one rendering of a payload to stdout.
    Render {
        payload: String,
        #[clap(long = "format", value_enum, default_value = "text")]
        format: OutputFormat,
        #[clap(long = "formatter", value_enum, default_value = "basic")]
        formatter: RendererStyle,
    },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
    Json,
}

impl From<OutputFormat> for Format {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Text => Format::Text,
            OutputFormat::Html => Format::Html,
            OutputFormat::Json => Format::Json,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum RendererStyle {
    Debug,
    Basic,
}

fn main() -> ExitCode {
    format_chain_main().expect("Encountered an error!")
}

fn format_chain_main() -> Result<ExitCode> {
    color_eyre::install().expect("Can't fail at first call!");
    let args = CLArgs::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .try_init();

    match args.routine.unwrap_or(FormatChainCommand::Demo) {
        FormatChainCommand::Demo => demo(),
        FormatChainCommand::Render {
            payload,
            format,
            formatter,
        } => render(&payload, format.into(), &formatter),
    }
}

fn demo() -> Result<ExitCode> {
    let html_chain = build_chain(DEMO_PAYLOAD);
    let json_chain = build_chain(DEMO_PAYLOAD);
    let text_chain = build_chain(DEMO_PAYLOAD);

    let mut file = open_append(DEMO_OUTPUT_PATH)
        .with_context(|| format!("Failed to open {DEMO_OUTPUT_PATH} for appending"))?;

    let written = write_as_html(&mut file, html_chain)
        .and_then(|_| write_as_json(&mut file, json_chain))
        .and_then(|_| write_as_text(&mut file, text_chain));

    match written {
        Ok(()) => {}
        // Unsupported formats are reported but do not fail the process.
        Err(WriteError::Resolve(error)) => {
            print!("{}", BasicFormatter.format_error(&error));
        }
        Err(error @ WriteError::Io(_)) => {
            return Err(error).context("Failed to append demo output");
        }
    }
    file.flush()
        .with_context(|| format!("Failed to flush {DEMO_OUTPUT_PATH}"))?;
    Ok(ExitCode::SUCCESS)
}

fn render(payload: &str, format: Format, style: &RendererStyle) -> Result<ExitCode> {
    let formatter: Box<dyn RendererFormatter> = match style {
        RendererStyle::Debug => Box::new(DebugFormatter {}),
        RendererStyle::Basic => Box::new(BasicFormatter {}),
    };
    match build_chain(payload).resolve(format) {
        Ok(renderer) => print!("{}", formatter.format(&renderer)),
        Err(error) => print!("{}", formatter.format_error(&error)),
    }
    std::io::stdout().flush()?;
    Ok(ExitCode::SUCCESS)
}
