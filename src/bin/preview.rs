//! CLI preview tool: print the cue timeline for a piece of text.
//!
//! All tracing output goes to stderr so that stdout stays a clean JSON
//! document for piping into other tools.

use std::path::PathBuf;

use lipcue::{TimelineBuilder, TimelineProducer, TimingConfig, WordLevelBuilder};

const USAGE: &str =
    "usage: lipcue-preview [--config <timing.toml>] [--rate <r>] [--word-level] [text ...]";

fn main() -> anyhow::Result<()> {
    // stdout is reserved for the JSON document.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut config_path: Option<PathBuf> = None;
    let mut rate: Option<f32> = None;
    let mut word_level = false;
    let mut text_args: Vec<String> = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().ok_or_else(|| anyhow::anyhow!(USAGE))?;
                config_path = Some(PathBuf::from(path));
            }
            "--rate" => {
                let value = args.next().ok_or_else(|| anyhow::anyhow!(USAGE))?;
                rate = Some(value.parse()?);
            }
            "--word-level" => word_level = true,
            "--help" | "-h" => {
                eprintln!("{USAGE}");
                return Ok(());
            }
            _ => text_args.push(arg),
        }
    }

    let mut config = match config_path {
        Some(ref path) => TimingConfig::from_file(path)?,
        None => TimingConfig::default(),
    };
    if let Some(rate) = rate {
        config.rate = rate;
    }

    // Read stdin when no text was given on the command line.
    let text = if text_args.is_empty() {
        std::io::read_to_string(std::io::stdin())?
    } else {
        text_args.join(" ")
    };

    let producer: Box<dyn TimelineProducer> = if word_level {
        Box::new(WordLevelBuilder::new())
    } else {
        Box::new(TimelineBuilder::new(config))
    };
    let timeline = producer.build_timeline(&text);

    println!("{}", serde_json::to_string_pretty(&timeline)?);
    Ok(())
}
