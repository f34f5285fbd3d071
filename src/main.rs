mod cli;

use cli::Args;
use lockfile_inventory::adapters::outbound::console::{
    StderrProgressReporter, TracingDiagnosticSink,
};
use lockfile_inventory::adapters::outbound::filesystem::FileSystemReader;
use lockfile_inventory::adapters::outbound::identity::PurlIdentifier;
use lockfile_inventory::application::dto::{InventoryRequest, DEFAULT_MAX_PARALLEL, DEFAULT_TIMEOUT};
use lockfile_inventory::application::factories::{
    ExtractorRegistryFactory, FormatterFactory, PresenterFactory, PresenterType,
};
use lockfile_inventory::application::use_cases::BuildInventoryUseCase;
use lockfile_inventory::config::{self, ConfigFile};
use lockfile_inventory::shared::error::ExitCode;
use lockfile_inventory::shared::Result;
use std::path::Path;
use std::process;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() {
    // clap exits with code 2 on invalid arguments and 0 on --help/--version
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Diagnostics go to stderr; `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lockfile_inventory={level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Run options after merging CLI flags over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    timeout: Duration,
    max_parallel: usize,
    strict: bool,
    pretty: bool,
}

impl Settings {
    fn merge(args: &Args, config: Option<ConfigFile>) -> Self {
        let config = config.unwrap_or_default();
        Self {
            timeout: args
                .timeout
                .or(config.timeout_seconds)
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TIMEOUT),
            max_parallel: args
                .max_parallel
                .or(config.max_parallel)
                .unwrap_or(DEFAULT_MAX_PARALLEL),
            strict: args.strict || config.strict.unwrap_or(false),
            pretty: args.pretty || config.pretty.unwrap_or(false),
        }
    }
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(Path::new(".")),
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let settings = Settings::merge(&args, load_config(&args)?);
    tracing::debug!(?settings, "resolved settings");

    let registry = Arc::new(ExtractorRegistryFactory::default_registry()?);
    let use_case = BuildInventoryUseCase::new(
        registry,
        Arc::new(FileSystemReader::new()),
        Arc::new(TracingDiagnosticSink::new()),
        PurlIdentifier::new(),
        StderrProgressReporter::new(),
    );

    let request = InventoryRequest::new(args.manifests.clone(), settings.timeout, settings.max_parallel);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let response = runtime.block_on(use_case.execute(request))?;

    eprintln!("{}", FormatterFactory::progress_message());
    let formatted_output = FormatterFactory::create(settings.pretty).format(&response)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&formatted_output)?;

    if settings.strict && response.has_skipped() {
        return Ok(ExitCode::ManifestsSkipped);
    }
    Ok(ExitCode::Success)
}
