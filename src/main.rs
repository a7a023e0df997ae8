use clap::Parser;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vinted_fit::{cli, config, error, fetcher, report, scan};
use cli::{Cli, Commands, ScanArgs};
use config::Config;
use error::Result;
use vinted_fit_common::{extract_all, Listing};

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("vinted_fit=debug,vinted_fit_common=debug,info")
        } else {
            EnvFilter::new("vinted_fit=warn,vinted_fit_common=warn")
        }
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.unwrap_or_else(|| Commands::Scan(ScanArgs::default())) {
        Commands::Scan(args) => {
            // 設定ミスは通信前に検出する
            let config = Config::load(cli.config.as_deref())?;

            let listings: Vec<Listing> = match &args.input {
                Some(path) => fetcher::load_listings_file(path)?,
                None => {
                    let fetcher = fetcher::ListingFetcher::new(
                        &args.base_url,
                        Duration::from_secs(args.timeout),
                    )?;
                    fetcher.fetch_listings(args.seller, args.per_page).await?
                }
            };

            let matches = scan::find_matches(&listings, &config.ranges)?;
            for m in &matches {
                report::print_match(m.listing, &m.labels);
            }

            info!(scanned = listings.len(), matched = matches.len(), "判定完了");
        }

        Commands::Extract(args) => {
            let text = args.read_text()?;
            print!("{}", report::format_extracted(&extract_all(&text)));
        }

        Commands::Config { show } => {
            let config = Config::load(cli.config.as_deref())?;
            print!("{}", report::format_config_summary(&config, show));
        }
    }

    Ok(())
}
