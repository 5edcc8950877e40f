//! best-standings - Application entry point

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use best_standings::{
    cli::Cli, client::AtCoderClient, config::Config, services::StandingsService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "best_standings=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    cli.validate()?;

    let config = Config::from_env()?;
    let client = AtCoderClient::new(&config)?;

    tracing::info!(
        "Aggregating {} contests for affiliation {}",
        cli.contest_id.len(),
        cli.affiliation
    );

    let summary =
        StandingsService::run(&client, &cli.affiliation, &cli.contest_id, &cli.out_dir).await?;

    println!("[Output]");
    for path in &summary.filtered_paths {
        println!("  - {}", path.display());
    }
    println!("  - {}", summary.best_path.display());
    println!("{} participants ranked. Done.", summary.participants);

    Ok(())
}
