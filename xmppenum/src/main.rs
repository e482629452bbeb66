/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! XMPP enum generator.
//!
//! Without arguments, renders the built-in stream error conditions into
//! `generate_enums.g.cs` in the working directory.
//!
//! Usage:
//!   xmppenum --definitions ./data --split ./dist --file-scoped

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use xmppenum::{DEFAULT_OUTPUT, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "xmppenum")]
#[command(about = "Generate XmppSharp protocol enum sources", long_about = None)]
struct Args {
    /// JSON definition file, or a directory of them (defaults to the built-in catalog)
    #[arg(long)]
    definitions: Option<PathBuf>,

    /// Output file for all definitions
    #[arg(long, default_value = DEFAULT_OUTPUT, conflicts_with = "split")]
    output: PathBuf,

    /// Write one <Name>.g.cs file per definition into this directory
    #[arg(long)]
    split: Option<PathBuf>,

    /// Emit file-scoped namespace declarations
    #[arg(long)]
    file_scoped: bool,

    /// Tool name recorded in the GeneratedCode attribute
    #[arg(long, default_value = env!("CARGO_PKG_NAME"))]
    tool: String,

    /// Tool version recorded in the GeneratedCode attribute
    #[arg(long, default_value = env!("CARGO_PKG_VERSION"))]
    tool_version: String,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let definitions = match &args.definitions {
        Some(path) => load_path(path)?,
        None => builtin_definitions(),
    };

    let style = if args.file_scoped {
        NamespaceStyle::FileScoped
    } else {
        NamespaceStyle::Block
    };
    let config = GeneratorConfig::default()
        .with_namespace_style(style)
        .with_tool(args.tool, args.tool_version);
    let generator = EnumGenerator::with_config(config);

    let layout = match args.split {
        Some(dir) => OutputLayout::PerDefinition(dir),
        None => OutputLayout::SingleFile(args.output),
    };

    let written = write_output(&generator, &definitions, &layout)?;
    info!(
        "Generated {} enum(s) into {} file(s)",
        definitions.len(),
        written.len()
    );

    Ok(())
}

/// Initializes logging from `RUST_LOG`, defaulting to `info`.
fn init_logging() {
    let filter = log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Builds the filter from `RUST_LOG`-style directives. Missing or invalid
/// directives fall back to `info`.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
