use anyhow::Result;
use clap::Parser;
use instrument_db::config::AppConfig;
use instrument_db::{build_store, InstrumentResolver, MemoryStore, ResolvedDetail};
use std::path::PathBuf;
use std::process::ExitCode;

const EXIT_FOUND: u8 = 0;
const EXIT_NOT_FOUND_OR_FAULT: u8 = 1;

#[derive(Parser, Debug)]
#[command(
    name = "resolve-instrument",
    version,
    about = "Resolve an evaluation instrument and print its details as JSON"
)]
struct Args {
    /// Instrument id to look up. Put it after `--` if it starts with a dash.
    instrument_id: String,

    /// JSON table fixture to read instead of the configured store
    #[arg(long)]
    fixture: Option<PathBuf>,
}

async fn resolve(args: &Args) -> Result<Option<ResolvedDetail>> {
    let config = AppConfig::load()?;

    let store = match &args.fixture {
        Some(path) => MemoryStore::from_fixture_file(path)?,
        None => build_store(&config)?,
    };

    let resolver = InstrumentResolver::new(config.tables);
    Ok(resolver.resolve(&store, &args.instrument_id).await?)
}

/// 0 when the instrument exists, 1 when it does not or the lookup faulted
fn exit_code(outcome: &Result<Option<ResolvedDetail>>) -> u8 {
    match outcome {
        Ok(Some(_)) => EXIT_FOUND,
        Ok(None) | Err(_) => EXIT_NOT_FOUND_OR_FAULT,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays pure JSON
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Help and version print to stdout and exit 0, usage errors exit 2
            let _ = e.print();
            return ExitCode::from(e.exit_code() as u8);
        }
    };

    let outcome = resolve(&args).await;
    match &outcome {
        Ok(detail) => match serde_json::to_string_pretty(detail) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {:#}", e);
                return ExitCode::from(EXIT_NOT_FOUND_OR_FAULT);
            }
        },
        Err(e) => eprintln!("Error: {:#}", e),
    }

    ExitCode::from(exit_code(&outcome))
}
