//! CLI definition, tracing setup, and the convert command.

use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use marksmap_core::{Conversion, MapOptions, convert_file};
use marksmap_shared::{AppConfig, load_config, load_config_from};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// marksmap: turn a bookmarks export into a mind map.
#[derive(Parser)]
#[command(
    name = "marksmap",
    version,
    about = "Convert a Firefox bookmarks backup (JSON) into a Freeplane mind map.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Bookmarks file (JSON) to read.
    pub source: PathBuf,

    /// Mind map file (.mm) to write.
    pub destination: PathBuf,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Config file to use instead of ~/.marksmap/marksmap.toml.
    #[arg(long, env = "MARKSMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print a conversion summary after writing the mind map.
    #[arg(long)]
    pub stats: bool,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "marksmap=info",
        1 => "marksmap=debug",
        _ => "marksmap=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// Run the conversion described by the parsed arguments.
pub(crate) fn run(cli: Cli) -> Result<()> {
    if !cli.source.exists() {
        return Err(eyre!(
            "Could not find bookmarks file: {}",
            cli.source.display()
        ));
    }

    let config = resolve_config(cli.config.as_deref())?;
    let opts = MapOptions::from(&config);

    info!(
        source = %cli.source.display(),
        destination = %cli.destination.display(),
        "converting bookmarks"
    );

    let conversion = convert_file(&cli.source, &cli.destination, &opts)?;

    if cli.stats {
        print_summary(&cli.destination, &conversion);
    }

    Ok(())
}

fn resolve_config(path: Option<&Path>) -> Result<AppConfig> {
    let config = match path {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    Ok(config)
}

fn print_summary(destination: &Path, conversion: &Conversion) {
    let stats = &conversion.stats;
    println!();
    println!("  Mind map written!");
    println!("  Path:          {}", destination.display());
    println!("  Nodes:         {}", stats.nodes);
    println!("  Folders:       {}", stats.folders);
    println!("  Links:         {}", stats.links);
    println!("  Dropped links: {}", stats.dropped_links);
    println!("  Untitled:      {}", stats.untitled);
    println!("  Max depth:     {}", stats.max_depth);
    println!();
}
