use std::fs::File;
use std::io::{Read, stdin};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cardnorm::{ConnectorAttachment, OutputStyle, TranslatorSettings};

#[derive(Parser, Debug)]
#[command(
    name = "cardnorm",
    about = "Blank translatable text in Adaptive Card JSON so cards compare structurally",
    version
)]
struct Args {
    /// Input is a connector attachment; its content is normalized
    #[arg(short, long)]
    attachment: bool,

    /// Compare the input against this card instead of printing it
    #[arg(long, value_name = "OTHER")]
    compare: Option<PathBuf>,

    /// JSON settings file ({"propertiesToTranslate": [...], "output": "compact"})
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Translatable property; repeat to replace the configured list
    #[arg(short, long = "property", value_name = "NAME")]
    properties: Vec<String>,

    /// Print compact JSON
    #[arg(long, default_value_t = false)]
    compact: bool,

    /// Log debug events to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
    let mut buf = String::new();
    match path {
        Some(path) => {
            let mut f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }
    Ok(buf)
}

/// Parse a card, unwrapping a connector attachment when asked to.
fn load_card(text: &str, attachment: bool) -> Result<serde_json::Value> {
    if !attachment {
        return serde_json::from_str(text).context("input is not valid JSON");
    }
    let source: ConnectorAttachment =
        serde_json::from_str(text).context("input is not a connector attachment")?;
    cardnorm::ensure_adaptive_card(&source)?;
    tracing::debug!(name = source.name.as_deref().unwrap_or_default(), "unwrapped adaptive card attachment");
    Ok(source.content.unwrap_or(serde_json::Value::Null))
}

fn load_settings(args: &Args) -> Result<TranslatorSettings> {
    let mut settings = match &args.settings {
        Some(path) => TranslatorSettings::from_path(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => TranslatorSettings::default(),
    };
    if !args.properties.is_empty() {
        settings = settings.with_properties(args.properties.iter().cloned());
    }
    if args.compact {
        settings = settings.with_output(OutputStyle::Compact);
    }
    tracing::debug!(properties = ?settings.properties_to_translate, "translator settings");
    Ok(settings)
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let settings = load_settings(&args)?;
    let card = load_card(&read_input(args.input.as_deref())?, args.attachment)?;

    if let Some(other_path) = &args.compare {
        let other = load_card(&read_input(Some(other_path))?, args.attachment)?;
        if cardnorm::cards_equivalent(&card, &other, &settings) {
            println!("cards match");
            return Ok(ExitCode::SUCCESS);
        }
        println!("cards differ");
        return Ok(ExitCode::FAILURE);
    }

    let out = cardnorm::card_without_values(card, &settings)?;
    println!("{}", out);
    Ok(ExitCode::SUCCESS)
}
