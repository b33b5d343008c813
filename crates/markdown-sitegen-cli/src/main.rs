use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::{
    SiteBuilder, build_block, markdown_to_html, parsing::classify_document,
};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Parser)]
#[command(name = "markdown-sitegen", version, about = "Build a static site from markdown")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the site described by the config file
    Build {
        /// Config file (defaults to ./sitegen.toml; built-in defaults if missing)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Override the configured base path, e.g. "/repo/"
        #[arg(long)]
        base_path: Option<String>,
        /// Skip pages that fail to render instead of aborting
        #[arg(long)]
        keep_going: bool,
    },
    /// Print the HTML of a single markdown file
    Render { file: PathBuf },
    /// Print each block's kind and HTML
    Inspect { file: PathBuf },
}

fn main() {
    // Info by default; RUST_LOG still wins when set
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Build {
            config,
            base_path,
            keep_going,
        } => build(config, base_path, keep_going),
        Command::Render { file } => {
            let markdown = read_markdown(&file)?;
            let html = markdown_to_html(&markdown)
                .with_context(|| format!("failed to render {}", file.display()))?;
            println!("{html}");
            Ok(())
        }
        Command::Inspect { file } => {
            let markdown = read_markdown(&file)?;
            for line in inspect_blocks(&markdown) {
                println!("{line}");
            }
            Ok(())
        }
    }
}

fn build(config_path: Option<PathBuf>, base_path: Option<String>, keep_going: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::config_path);
    let config = match Config::load_from_path(&config_path)? {
        Some(config) => {
            log::info!("using config {}", config_path.display());
            config
        }
        None => {
            log::info!("no config at {}, using defaults", config_path.display());
            Config::default()
        }
    };

    let template = fs::read_to_string(&config.template_path)
        .with_context(|| format!("failed to read template {}", config.template_path.display()))?;

    let mut builder = SiteBuilder::new(&config.content_dir, &config.output_dir, template)
        .base_path(base_path.unwrap_or(config.base_path))
        .keep_going(keep_going);
    if config.static_dir.is_dir() {
        builder = builder.static_dir(&config.static_dir);
    } else {
        log::warn!(
            "static directory {} not found, skipping static copy",
            config.static_dir.display()
        );
    }

    let report = builder.build()?;
    if !report.skipped.is_empty() {
        bail!("{} page(s) failed to render", report.skipped.len());
    }
    Ok(())
}

/// One line per block: its index, kind, and HTML or error.
fn inspect_blocks(markdown: &str) -> Vec<String> {
    classify_document(markdown)
        .iter()
        .enumerate()
        .map(|(i, block)| {
            match build_block(block.kind, block.text).and_then(|node| node.to_html()) {
                Ok(html) => format!("[{i}] {}: {html}", block.kind),
                Err(e) => format!("[{i}] {}: error: {e}", block.kind),
            }
        })
        .collect()
}

fn read_markdown(file: &Path) -> Result<String> {
    fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))
}
