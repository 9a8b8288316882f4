//! CLI entry point for hyprkeys
//!
//! Reads a Hyprland config and prints it as Markdown, raw config text
//! or JSON, optionally writing the same output to a file.

use anyhow::Context;
use clap::{ArgGroup, Parser};
use colored::*;
use hyprkeys::config::{self, ConfigError, Options, OutputFormat, DEFAULT_CONFIG_PATH};
use hyprkeys::core::read_config;
use hyprkeys::{logging, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hyprkeys")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("format").args(["markdown", "raw", "json"])))]
struct Cli {
    /// Path to Hyprland config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Output binds as a Markdown table
    #[arg(short, long)]
    markdown: bool,

    /// Output normalised config text
    #[arg(short, long)]
    raw: bool,

    /// Output the whole model as JSON
    #[arg(short, long)]
    json: bool,

    /// Only keep binds whose dispatcher or command contains this text
    #[arg(short, long)]
    filter: Option<String>,

    /// Also write the output to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Include settings blocks in raw output
    #[arg(short, long)]
    variables: bool,

    /// Include autostart directives in raw output
    #[arg(short, long)]
    autostart: bool,
}

impl Cli {
    fn into_options(self) -> Result<Options, ConfigError> {
        let format = match (self.markdown, self.raw, self.json) {
            (true, _, _) => OutputFormat::Markdown,
            (_, true, _) => OutputFormat::Raw,
            (_, _, true) => OutputFormat::Json,
            _ => return Err(ConfigError::NoOutputFormat),
        };

        Ok(Options {
            config_path: config::expand_path(&self.config)?,
            format,
            filter: self.filter,
            output: self.output.as_deref().map(config::expand_path).transpose()?,
            include_variables: self.variables,
            include_autostart: self.autostart,
        })
    }
}

fn main() -> anyhow::Result<()> {
    logging::init();

    let options = Cli::parse().into_options()?;
    run(&options)
}

fn run(options: &Options) -> anyhow::Result<()> {
    let report = read_config(&options.config_path)
        .with_context(|| format!("Failed to read config {}", options.config_path.display()))?;

    for diagnostic in &report.diagnostics {
        eprintln!("{} {}", "⚠".yellow(), diagnostic.to_string().yellow());
    }

    let model = match &options.filter {
        Some(needle) => report.config.with_binds_filtered(needle),
        None => report.config,
    };

    let rendered = output::render(&model, options)?;
    if rendered.ends_with('\n') {
        print!("{}", rendered);
    } else {
        println!("{}", rendered);
    }

    if let Some(path) = &options.output {
        config::write_output(path, &rendered)?;
        eprintln!("{} Wrote {}", "✓".green(), path.display());
    }

    Ok(())
}
