use clap::Parser;
use recipe_loader::domain::ports::ConfigProvider;
use recipe_loader::utils::error::ErrorSeverity;
use recipe_loader::utils::{logger, validation::Validate};
use recipe_loader::{build_engine, run_to_file, CliConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting recipe-loader");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let engine = build_engine(&config)?;

    match run_to_file(&engine, &config, "Recipes").await {
        Ok(report) => {
            println!(
                "✅ Rendered {} recipes to {}",
                report.recipes_rendered,
                config.output_path().display()
            );
            if report.load_failed {
                println!("⚠️  Recipes could not be loaded; see the log for details");
            }
        }
        Err(e) => {
            tracing::error!(
                "Writing the page failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
