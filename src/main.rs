//! ticker-search CLI - search a stock catalog and build report requests.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use url::Url;

use ticker_search::catalog::Catalog;
use ticker_search::config::PickerConfig;
use ticker_search::selection::StockPicker;

#[derive(Parser)]
#[command(name = "ticker-search")]
#[command(about = "Fuzzy ticker search over a stock catalog")]
struct Cli {
    /// Catalog listing (.json list of {symbol, name}, or SYMBOL<TAB>name lines)
    #[arg(short, long)]
    catalog: PathBuf,

    /// Korean-name side table (.json list of {symbol, name_ko})
    #[arg(short, long)]
    korean: Option<PathBuf>,

    /// Picker config file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank the catalog against a query
    Search {
        /// Search query
        query: String,
        /// Maximum results (overrides config)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Select stocks by symbol and print the report request
    Pick {
        /// Ticker symbols, in slot order
        #[arg(required = true)]
        symbols: Vec<String>,
        /// Report service base URL
        #[arg(long, default_value = "http://localhost:8000/")]
        base_url: Url,
        /// Lookback period (e.g. 10y, 5y, 1y)
        #[arg(long)]
        period: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ticker_search=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PickerConfig::from_file(path)?,
        None => PickerConfig::default(),
    };

    let catalog = Catalog::load(&cli.catalog, cli.korean.as_deref())
        .with_context(|| format!("loading catalog {}", cli.catalog.display()))?;
    if catalog.is_empty() {
        anyhow::bail!("Catalog {} has no usable entries", cli.catalog.display());
    }

    match cli.command {
        Command::Search { query, limit } => {
            if let Some(limit) = limit {
                config.search.limit = limit;
                config.validate()?;
            }
            let mut picker = StockPicker::new(&catalog, &config);
            picker.set_query(&query);

            let results = picker.scored_suggestions();
            if results.is_empty() {
                println!("No matches for {query:?}");
            }
            for (rank, candidate) in results.iter().enumerate() {
                let stock = candidate.stock;
                println!(
                    "{:>2}. {:<8} {:>6.1}  {}{}",
                    rank + 1,
                    stock.symbol,
                    candidate.score,
                    stock.name,
                    stock.kr_name().map(|kr| format!(" ({kr})")).unwrap_or_default(),
                );
            }
        }
        Command::Pick {
            symbols,
            base_url,
            period,
        } => {
            let mut picker = StockPicker::new(&catalog, &config);
            for symbol in &symbols {
                let symbol = symbol.trim().to_uppercase();
                if !picker.add_symbol(&symbol) {
                    eprintln!("Skipped {symbol}: unknown, duplicate, or selection full");
                }
            }
            for entry in picker.selection().entries() {
                println!("{:<8} {}  [{}]", entry.symbol(), entry.stock.name, entry.src);
            }

            let mut request = picker
                .submit()
                .context("Selection cannot be submitted")?;
            if let Some(period) = period {
                request = request.with_period(period);
            }
            println!("{}", request.endpoint_url(&base_url)?);
        }
    }

    Ok(())
}
