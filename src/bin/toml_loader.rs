use anyhow::Context;
use clap::Parser;
use recipe_loader::domain::ports::{ConfigProvider, RecipeStore};
use recipe_loader::utils::error::ErrorSeverity;
use recipe_loader::utils::{logger, validation::Validate};
use recipe_loader::{build_engine, run_to_file, FileStore, TomlConfig, CACHE_KEY};

#[derive(Parser)]
#[command(name = "toml-loader")]
#[command(about = "Recipe loader driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "recipes.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show the resolved sources and cache state without loading anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    if config.json_logging() {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }
    tracing::info!("Loaded configuration from: {}", args.config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if args.dry_run {
        perform_dry_run(&config).await?;
        return Ok(());
    }

    let engine = build_engine(&config)?;
    match run_to_file(&engine, &config, config.title()).await {
        Ok(report) => {
            println!(
                "✅ Rendered {} recipes to {}",
                report.recipes_rendered,
                config.output_path().display()
            );
            Ok(())
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
            std::process::exit(exit_code);
        }
    }
}

async fn perform_dry_run(config: &TomlConfig) -> anyhow::Result<()> {
    let sources = config.sources();
    println!("📋 Sources ({}):", sources.len());
    for (i, url) in sources.iter().enumerate() {
        println!("  {}. {}", i + 1, url);
    }

    let store = FileStore::new(config.cache_dir());
    let cache_path = store.path_for(CACHE_KEY);
    let cached = store
        .get(CACHE_KEY)
        .await
        .context("Failed to read the cache entry")?
        .filter(|value| !value.is_empty());

    println!("💾 Cache entry: {}", cache_path.display());
    match cached {
        Some(_) => println!("   present, the next run will not touch the network"),
        None => println!("   absent, the next run will fetch every source"),
    }

    match config.request_timeout() {
        Some(timeout) => println!("⏱  Request timeout: {:?}", timeout),
        None => println!("⏱  Request timeout: none"),
    }
    if config.offline_enabled() {
        println!(
            "📦 Offline worker: {} under {}",
            config.worker_script(),
            config.site_root().display()
        );
    }
    println!("📄 Output: {}", config.output_path().display());

    Ok(())
}
