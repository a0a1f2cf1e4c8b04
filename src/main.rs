//! dspick - Data source picker
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use dspick_app::config::{catalog_path, init_config_dir, load_settings};
use dspick_app::SelectorConfig;
use dspick_catalog::FileCatalogClient;
use tracing::info;

/// dspick - Pick data sources from a saved-object catalog
#[derive(Parser, Debug)]
#[command(name = "dspick")]
#[command(about = "Multi-select picker over a data source catalog", long_about = None)]
struct Args {
    /// Project directory holding .dspick/config.toml
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Catalog export to read, overriding the configured path
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Leave the local cluster out of the option list
    #[arg(long)]
    hide_local_cluster: bool,

    /// Default data source id, overriding the configured one
    #[arg(long, value_name = "ID")]
    default_data_source: Option<String>,

    /// Write a default .dspick/config.toml and exit
    #[arg(long)]
    init: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let project_path = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init {
        init_config_dir(&project_path)?;
        eprintln!(
            "Created {}",
            project_path.join(".dspick").join("config.toml").display()
        );
        return Ok(());
    }

    dspick_core::logging::init()?;
    eprintln!(
        "Logging to {}",
        dspick_core::logging::log_directory().display()
    );

    let mut settings = load_settings(&project_path);
    if args.hide_local_cluster {
        settings.data_source.hide_local_cluster = true;
    }
    if let Some(id) = args.default_data_source {
        settings.data_source.default_data_source = Some(id);
    }
    settings.validate()?;

    let catalog_file = args
        .catalog
        .unwrap_or_else(|| catalog_path(&project_path, &settings));
    info!("Reading data sources from {}", catalog_file.display());

    let config = SelectorConfig::from_settings(FileCatalogClient::new(catalog_file), settings);
    dspick::run_headless(config).await?;

    Ok(())
}
