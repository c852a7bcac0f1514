use clap::Parser;
use rsa_link::domain::ports::ConfigProvider;
use rsa_link::utils::{logger, validation::Validate};
use rsa_link::{source_for_location, CitationResolver, CliConfig, RsaError};

fn fail(e: &RsaError) -> ! {
    tracing::error!(
        "❌ Resolution failed: {} (Category: {:?})",
        e,
        e.category()
    );
    tracing::debug!("💡 Suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => fail(&e),
    };

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed");
        fail(&e);
    }

    let source = source_for_location(settings.mapping_location());
    let resolver = CitationResolver::new(source, settings.archive_base_url());

    let raw = config.raw_citation();
    match resolver.resolve(&raw).await {
        Ok(resolution) => {
            tracing::info!(
                "✅ {} -> folder {}",
                resolution.citation.chapter,
                resolution.folder
            );
            if config.json {
                println!("{}", serde_json::to_string_pretty(&resolution)?);
            } else {
                println!("{}", resolution.url);
            }
        }
        Err(e) => fail(&e),
    }

    Ok(())
}
