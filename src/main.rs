use anyhow::Context;
use std::sync::Arc;

use gpu_bench::config::loader::{get_global_config_path, load_or_default};
use gpu_bench::log_collector::get_global_logs_path;
use gpu_bench::ui::app::AppUI;
use gpu_bench::{AppConfig, AppError, BrowserController, Catalog, LogCollector};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // =========================================================================
    // CONFIGURATION - BEFORE LOGGING (log level lives in the config)
    // =========================================================================
    let mut warnings: Vec<AppError> = Vec::new();
    let config_path = get_global_config_path().context("Failed to resolve config path")?;
    let config = match load_or_default(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[Main] WARNING: Invalid config at {}: {}", config_path.display(), e);
            warnings.push(e.into());
            AppConfig::default()
        }
    };
    let max_level = config.level_filter()?;

    // =========================================================================
    // LOG COLLECTOR - DECOUPLED FROM UI
    // =========================================================================
    let log_dir = get_global_logs_path().map_err(AppError::Logging)?;
    let log_collector = LogCollector::new(&log_dir, max_level).map_err(AppError::Logging)?;
    if let Err(e) = log_collector.install() {
        eprintln!("[Main] WARNING: Failed to set LogCollector as global logger: {}", e);
    }
    log::info!(
        "GPU Bench {} starting (log file: {})",
        gpu_bench::VERSION,
        log_collector.log_path().display()
    );

    // =========================================================================
    // CATALOG AND CONTROLLER
    // =========================================================================
    for warning in &warnings {
        log::warn!("[Main] {}", warning);
    }
    let (catalog, catalog_error) = Catalog::load(config.extra_catalog.as_deref());
    warnings.extend(catalog_error.map(AppError::from));

    let controller =
        BrowserController::new(Arc::new(catalog), config, tokio::runtime::Handle::current());
    let app_ui = AppUI::new(controller).with_warnings(warnings);

    // =========================================================================
    // LAUNCH EGUI
    // =========================================================================
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    let result = eframe::run_native("GPU Bench", options, Box::new(move |_cc| Box::new(app_ui)));

    // =========================================================================
    // SHUTDOWN
    // =========================================================================
    log::info!("GPU Bench shutting down");
    if let Err(e) = log_collector.wait_for_empty().await {
        eprintln!("[Main] WARNING: Failed to wait for log collector to empty: {}", e);
    }

    result.map_err(|e| anyhow::anyhow!("UI terminated with error: {}", e))
}
