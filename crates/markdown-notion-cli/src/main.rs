use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use markdown_notion_config::Config;
use markdown_notion_engine::{
    EncodeOptions, Encoder, ParseOptions, PropertyMapper, PropertyValue, parse_markdown_with,
};
use serde_json::{Map, Value, json};

#[derive(Parser)]
#[command(name = "markdown-notion")]
#[command(about = "Convert Markdown to block-API JSON")]
struct Cli {
    /// Input Markdown file; `-` or absent reads stdin
    input: Option<PathBuf>,

    /// Config file (defaults to ~/.config/markdown-notion/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Page title; wraps the output as `{"properties", "children"}`
    #[arg(long)]
    title: Option<String>,

    /// Page date, already formatted (e.g. `2024-01-02 08:00:00`)
    #[arg(long)]
    date: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let markdown = read_input(cli.input.as_deref())?;
    let blocks = convert(&markdown, &config);
    let properties = page_properties(&config, cli.title.as_deref(), cli.date.as_deref());
    let document = page(blocks, properties);

    let mut json = if cli.compact {
        serde_json::to_string(&document)?
    } else {
        serde_json::to_string_pretty(&document)?
    };
    json.push('\n');

    match cli.output {
        Some(path) => fs::write(&path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => io::stdout()
            .write_all(json.as_bytes())
            .context("Failed to write to stdout")?,
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = path.map_or_else(Config::config_path, Path::to_path_buf);
    let config = Config::load_from_path(&path)?;
    if config.is_none() {
        log::debug!("no config at {}, using defaults", path.display());
    }
    Ok(config.unwrap_or_default())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut markdown = String::new();
            io::stdin()
                .read_to_string(&mut markdown)
                .context("Failed to read stdin")?;
            Ok(markdown)
        }
    }
}

fn convert(markdown: &str, config: &Config) -> Value {
    let options = ParseOptions {
        default_code_language: config.conversion.default_code_language.clone(),
    };
    let blocks = parse_markdown_with(markdown, &options);
    log::info!("converted {} top-level blocks", blocks.len());

    Encoder::new(EncodeOptions {
        max_text_length: config.conversion.max_text_length,
    })
    .encode(&blocks)
}

fn page_properties(config: &Config, title: Option<&str>, date: Option<&str>) -> Map<String, Value> {
    let settings = &config.properties;
    let mapper = PropertyMapper::new(settings.max_text_length, settings.time_zone.clone());
    mapper.map([
        (
            settings.title_property.as_str(),
            title.map(|t| PropertyValue::Title(t.to_string())),
        ),
        (
            settings.date_property.as_str(),
            date.map(|d| PropertyValue::Date {
                start: d.to_string(),
                end: None,
            }),
        ),
    ])
}

/// Bare block array, or a page payload when any property is set.
fn page(children: Value, properties: Map<String, Value>) -> Value {
    if properties.is_empty() {
        children
    } else {
        json!({ "properties": properties, "children": children })
    }
}
