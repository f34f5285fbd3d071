use clap::Parser;
use std::path::PathBuf;

/// Extract and consolidate package inventories from dependency lockfiles
#[derive(Parser, Debug)]
#[command(name = "lockfile-inventory")]
#[command(version)]
#[command(
    about = "Extract and consolidate package inventories from dependency lockfiles",
    long_about = "Reads the given manifests (go.mod, Pipfile.lock, uv.lock, Cargo.lock, \
                  requirements.txt) and prints one inventory keyed by package URL, listing \
                  every place each package is declared. Directories are never walked: \
                  pass the manifest paths explicitly."
)]
pub struct Args {
    /// Manifest files to extract
    #[arg(required = true, value_name = "MANIFEST")]
    pub manifests: Vec<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to ./lockfile-inventory.config.yml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seconds allowed for extracting one manifest
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Number of manifests extracted concurrently
    #[arg(long, value_name = "N", value_parser = parse_parallelism)]
    pub max_parallel: Option<usize>,

    /// Exit with code 1 when any manifest is skipped
    #[arg(long)]
    pub strict: bool,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Show debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn parse_parallelism(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
