use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use version_matcher::config::{DEFAULT_DEV_PREFIX, MatcherConfig};
use version_matcher::version::catalog::Catalog;
use version_matcher::version::matcher::{match_best_version, resolve_latest, sort_by_precedence};

#[derive(Parser)]
#[command(name = "version-matcher")]
#[command(version, about = "Match requested versions against a catalog of known versions")]
struct Cli {
    /// JSON config file overriding the defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Branch-tip prefix; overrides the config file
    #[arg(long, global = true)]
    dev_prefix: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the best-matching known version for a requested version
    Match {
        /// Catalog file: a JSON string array or one identifier per line
        #[arg(long)]
        catalog: PathBuf,
        /// Requested version, e.g. "5.7" or "8.1rc1"
        requested: String,
    },
    /// Print the newest identifier in the catalog
    Latest {
        #[arg(long)]
        catalog: PathBuf,
    },
    /// Print the catalog in ascending precedence order
    Sort {
        #[arg(long)]
        catalog: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let dev_prefix = resolve_dev_prefix(&cli)?;

    match cli.command {
        Command::Match { catalog, requested } => {
            let known = load_catalog(&catalog, &dev_prefix)?;
            println!("{}", match_best_version(&known, &requested));
        }
        Command::Latest { catalog } => {
            let known = load_catalog(&catalog, &dev_prefix)?;
            println!("{}", resolve_latest(&known));
        }
        Command::Sort { catalog } => {
            let known = load_catalog(&catalog, &dev_prefix)?;
            for identifier in sort_by_precedence(&known) {
                println!("{identifier}");
            }
        }
    }

    Ok(())
}

fn resolve_dev_prefix(cli: &Cli) -> anyhow::Result<String> {
    if let Some(prefix) = &cli.dev_prefix {
        return Ok(prefix.clone());
    }
    let Some(path) = &cli.config else {
        return Ok(DEFAULT_DEV_PREFIX.to_string());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: MatcherConfig = serde_json::from_str(&text)
        .with_context(|| format!("invalid config file {}", path.display()))?;
    Ok(config.dev_prefix)
}

fn load_catalog(path: &Path, dev_prefix: &str) -> anyhow::Result<Catalog> {
    Catalog::load(path, dev_prefix)
        .with_context(|| format!("failed to load catalog from {}", path.display()))
}
