use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use citybikes::{present, Root, Source, Strategy, BASE_URL, DEFAULT_NETWORK};
use clap::{Parser, ValueHint};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "citybikes",
    version,
    about = "Print free bikes per station for a CityBikes network",
    long_about = None
)]
struct Cli {
    #[arg(
        long,
        value_name = "PATH",
        help = "Read the API response from a file instead of the network",
        value_hint = ValueHint::FilePath
    )]
    fixture: Option<PathBuf>,

    #[arg(
        long,
        env = "CITYBIKES_NETWORK",
        default_value = DEFAULT_NETWORK,
        help = "Network id, as in /v2/networks/<id>"
    )]
    network: String,

    #[arg(
        long,
        env = "CITYBIKES_BASE_URL",
        default_value = BASE_URL,
        help = "API base URL",
        value_hint = ValueHint::Url
    )]
    base_url: String,

    #[arg(long, default_value_t = 60, help = "Request timeout in seconds")]
    timeout: u64,

    #[arg(long, help = "Validate the whole document, not just the stations")]
    full: bool,

    #[arg(long, help = "Report every validation error instead of the first")]
    all_errors: bool,

    #[arg(long, help = "Print the mapped records as JSON (implies --full)")]
    dump: bool,

    #[arg(
        long = "company",
        value_name = "NAME",
        help = "Replace the network's company list before --dump (repeatable)"
    )]
    company: Vec<String>,
}

impl Cli {
    fn source(&self) -> Source {
        match &self.fixture {
            Some(path) => Source::Fixture(path.clone()),
            None => Source::Live {
                base_url: self.base_url.clone(),
                network: self.network.clone(),
                timeout: Some(Duration::from_secs(self.timeout)),
            },
        }
    }

    fn strategy(&self) -> Strategy {
        if self.all_errors {
            Strategy::CollectAll
        } else {
            Strategy::FailFast
        }
    }

    fn needs_full_mapping(&self) -> bool {
        self.full || self.dump || !self.company.is_empty()
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let source = cli.source();
    info!(%source, "reading document");
    let text = source.read().await?;

    if !cli.needs_full_mapping() {
        let stations = citybikes::load_stations_with(&text, cli.strategy())?;
        present::write_stations(io::stdout().lock(), &stations)?;
        return Ok(());
    }

    let mut root: Root = citybikes::load_root_with(&text, cli.strategy())?;
    if let Some(updated) = root.network.latest_update() {
        info!(%updated, "latest station report");
    }
    if !cli.company.is_empty() {
        root = root.with_company(cli.company.clone());
    }

    if cli.dump {
        println!("{}", root.to_json_pretty()?);
    } else {
        present::write_stations(io::stdout().lock(), &root.network.stations)?;
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
