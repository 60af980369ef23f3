use anyhow::Context;
use catalog_search::utils::logger;
use catalog_search::{CatalogError, CatalogService, Cli, Command, DailyReportJob, LocalStorage};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI arguments: {:?}", cli);

    if let Err(e) = run(&cli).await {
        tracing::error!("❌ {:#}", e);

        match e.downcast_ref::<CatalogError>() {
            Some(err) => {
                tracing::error!("Category: {:?}", err.category());
                eprintln!("❌ {:#}", e);
                eprintln!("💡 {}", err.recovery_suggestion());
                std::process::exit(err.exit_code());
            }
            None => {
                eprintln!("❌ {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config().context("invalid configuration")?;
    let store = config.catalog.open()?;

    match &cli.command {
        Command::Search { query } => {
            let service = CatalogService::new(store, config.report_terms()?);
            let items = service.search(query).await?;
            tracing::info!("🔍 {} items matched {:?}", items.len(), query);
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        Command::Report { .. } => {
            let report = match config.report.output_path.as_deref() {
                Some(dir) => {
                    let job = DailyReportJob::from_config(store, LocalStorage::new(dir), &config)?;
                    let output = job.run().await?;
                    for file in &output.files {
                        tracing::info!("📁 Report saved to: {}/{}", dir, file);
                    }
                    output.report
                }
                None => {
                    let service = CatalogService::new(store, config.report_terms()?);
                    service.run_report().await?
                }
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
