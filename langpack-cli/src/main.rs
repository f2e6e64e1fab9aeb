mod instructions;
mod provider;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use langpack::PackBuilder;
use tracing_subscriber::EnvFilter;

use crate::provider::HttpTranslator;

/// Generate a translated language pack from an English resource file.
///
/// Reads a `.properties` or JSON file, translates every string value
/// through the configured translation endpoint, and writes the result
/// next to the input with the language code appended to the file name.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The resource file to translate (.properties or .json)
    #[arg(short, long)]
    input: PathBuf,

    /// Target language as an ISO 639-1 code (e.g. "uk")
    #[arg(short, long)]
    lang: String,

    /// Translation API endpoint (LibreTranslate-compatible)
    #[arg(short, long, env = "LANGPACK_ENDPOINT")]
    endpoint: String,

    /// API key sent with every translation request
    #[arg(short = 'k', long, env = "LANGPACK_API_KEY")]
    api_key: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    tracing::debug!(endpoint = %args.endpoint, "using translation endpoint");

    let translator = HttpTranslator::new(&args.endpoint, args.api_key)?;
    let output = PackBuilder::new(translator, &args.lang, &args.input)
        .and_then(|builder| builder.process())
        .with_context(|| format!("failed to translate {}", args.input.display()))?;

    println!("{}", instructions::next_steps(&args.lang, &output));
    Ok(())
}
