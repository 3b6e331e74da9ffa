//! Contract harness — runs the search API contract catalog.
//!
//! # Usage
//!
//! ```bash
//! # Run every scenario against the public API
//! cargo run -p contract-harness
//!
//! # Only ingredient scenarios, with a shorter timeout
//! cargo run -p contract-harness -- --family ingredients --timeout-secs 3
//!
//! # Replay recorded responses instead of calling the API
//! cargo run -p contract-harness -- --recorded contracts/http/cocktaildb
//! ```
//!
//! Exits 0 when all assertions pass, exits 1 when any fail or error.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use cocktail_domain::search::SearchParam;
use contract_harness::client::{HttpQueryClient, QueryClient};
use contract_harness::config::HarnessConfig;
use contract_harness::recorded::RecordedQueryClient;
use contract_harness::reporter::Reporter;
use contract_harness::runner::Runner;
use contract_harness::scenario::{self, Scenario};
use contract_harness::tracing::init_tracing;

#[derive(Parser)]
#[command(about = "Run TheCocktailDB search contract assertions")]
struct Args {
    /// API root, e.g. https://www.thecocktaildb.com/api/json/v1/1/
    /// (default: COCKTAILDB_BASE_URL or the public endpoint)
    #[arg(long)]
    base_url: Option<String>,

    /// Per-request timeout in seconds (default: COCKTAILDB_TIMEOUT_SECS or 10)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Run only one family of scenarios
    #[arg(long, value_enum)]
    family: Option<Family>,

    /// Replay recorded responses from this directory instead of calling the API
    #[arg(long)]
    recorded: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Family {
    Drinks,
    Ingredients,
}

impl From<Family> for SearchParam {
    fn from(family: Family) -> Self {
        match family {
            Family::Drinks => SearchParam::DrinkName,
            Family::Ingredients => SearchParam::IngredientName,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_tracing();
    let args = Args::parse();

    let mut config = HarnessConfig::from_env();
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(secs) = args.timeout_secs.filter(|s| *s > 0) {
        config.request_timeout = Duration::from_secs(secs);
    }

    let scenarios = match args.family {
        Some(family) => scenario::for_param(family.into()),
        None => scenario::catalog(),
    };

    let reporter = match &args.recorded {
        Some(dir) => {
            let client = RecordedQueryClient::load(dir)?;
            println!(
                "Replaying {} scenario(s) from {}",
                scenarios.len(),
                dir.display()
            );
            println!();
            run(Runner::new(client), &scenarios).await
        }
        None => {
            let client = HttpQueryClient::new(&config.base_url, config.request_timeout)?;
            println!(
                "Running {} scenario(s) against {}",
                scenarios.len(),
                config.base_url
            );
            println!();
            run(Runner::new(client), &scenarios).await
        }
    };

    reporter.print_summary();

    if reporter.all_passed() {
        Ok(())
    } else {
        std::process::exit(1);
    }
}

async fn run<C: QueryClient>(runner: Runner<C>, scenarios: &[Scenario]) -> Reporter {
    let mut reporter = Reporter::new();
    for s in scenarios {
        let result = runner.run(s).await;
        reporter.record(s, &result);
    }
    reporter
}
