use clap::Parser;
use name_origin::app::{run_batch, InteractiveSession};
use name_origin::utils::{logger, validation::Validate};
use name_origin::{AppConfig, CliConfig, NationalizeClient, ProbabilityResolver, RunMode};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting name-origin");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match AppConfig::from_cli(&cli).and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let client = NationalizeClient::from_config(&config)?;
    tracing::debug!("Using nationality service at {}", client.endpoint());
    let resolver = ProbabilityResolver::new(client);

    match config.mode {
        RunMode::Batch => {
            let stdout = std::io::stdout();
            let summary = run_batch(&resolver, &config.names, &mut stdout.lock()).await?;
            if summary.failed > 0 {
                eprintln!("⚠️  {} of {} lookups failed", summary.failed, summary.total());
            }
        }
        RunMode::Interactive => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let mut session = InteractiveSession::new(&resolver, stdin.lock(), stdout.lock());
            session.run().await?;
        }
    }

    tracing::debug!("{} names cached this run", resolver.cache().len());
    Ok(())
}
