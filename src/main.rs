use mercado_categorizer::categorizer::{summarize, Categorizer, CategorizerImpl};
use mercado_categorizer::config::{load_config_or_default, AppConfig};
use mercado_categorizer::source::{JsonFileSource, ProductSource};
use mercado_categorizer::storage::JsonResultWriter;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

const DEFAULT_CONFIG_PATH: &str = "config.json";

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let config = match load_config_or_default(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&config).await {
        Ok(path) => {
            info!("Products categorized successfully! See {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Categorization failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Loads products, groups them and writes the categories. Returns the output path.
async fn run(config: &AppConfig) -> Result<PathBuf, Box<dyn Error>> {
    let source = JsonFileSource::new(&config.input_path);
    info!("Loading products from {}...", source.path().display());
    let records = source.load().await?;
    info!("Loaded {} products", records.len());

    let categorizer = CategorizerImpl::new();
    let categories = categorizer.categorize(&records);

    let summary = summarize(&categories);
    info!(
        "Categories: {} ({} with more than one product) from {} products",
        summary.categories, summary.grouped_categories, summary.total_products
    );
    if let Some((label, count)) = &summary.largest {
        info!("Largest category: {:?} with {} products", label, count);
    }

    info!("Writing categories to {}...", config.output_path().display());
    let writer = JsonResultWriter::new(&config.output_dir, config.output_file.clone());
    let path = writer.write(&categories).await?;
    Ok(path)
}
