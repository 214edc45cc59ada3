use anyhow::Context;
use appinion::config::toml_config::TomlConfig;
use appinion::core::report::{render_comparison, MISSING_API_KEY_MESSAGE};
use appinion::domain::ports::OptionSource;
use appinion::utils::error::AppError;
use appinion::utils::{logger, validation::Validate};
use appinion::{
    CliConfig, CompareEngine, Comparison, JsonFileSource, PlacesSource, SampleSource,
    SourceSelection,
};
use clap::Parser;

async fn compare<S: OptionSource>(source: S, service: &str) -> appinion::Result<Comparison> {
    CompareEngine::new(source).run(service).await
}

fn exit_with(error: AppError) -> ! {
    tracing::error!(
        "❌ Comparison failed: {} (Category: {:?}, Severity: {:?})",
        error,
        error.category(),
        error.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", error.recovery_suggestion());

    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 Sugerencia: {}", error.recovery_suggestion());

    std::process::exit(error.exit_code());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    let file_config = match &cli.config {
        Some(path) => {
            let config = TomlConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file '{}'", path))?;
            tracing::info!("📁 Loaded configuration from {}", path);
            Some(config)
        }
        None => None,
    };

    let settings = cli.into_settings(file_config);
    tracing::debug!(
        "Comparing '{}' using {:?} (top {})",
        settings.service,
        settings.source,
        settings.top
    );
    if let Err(e) = settings.validate() {
        exit_with(e);
    }

    let outcome = match &settings.source {
        SourceSelection::LocalFile(path) => {
            compare(JsonFileSource::new(path), &settings.service).await
        }
        SourceSelection::Sample => compare(SampleSource::new(), &settings.service).await,
        SourceSelection::Places => {
            let places_config = match settings.places_config() {
                Ok(config) => config,
                Err(AppError::MissingConfigError { .. }) => {
                    println!("{}", MISSING_API_KEY_MESSAGE);
                    return Ok(());
                }
                Err(e) => exit_with(e),
            };
            match PlacesSource::new(places_config) {
                Ok(source) => compare(source, &settings.service).await,
                Err(e) => Err(e),
            }
        }
    };

    match outcome {
        Ok(comparison) => {
            print!("{}", render_comparison(&comparison, settings.top));
            Ok(())
        }
        Err(e) => exit_with(e),
    }
}
