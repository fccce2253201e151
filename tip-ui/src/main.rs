use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use tip_ui::app::TipApp;
use tip_ui::{config, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Bill-splitting tip calculator.
///
/// Opens a form for a bill amount, a tip percentage, and a number of
/// people, and shows the per-person tip and total as you type.
#[derive(Debug, Parser)]
struct Cli {
    /// Path to a TOML config file with tip presets and the currency symbol.
    /// Built-in defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append log output to this file in addition to stdout.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter (e.g. `debug` or `warn,tip_core=trace`).
    /// Overrides RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_level.as_deref(), cli.log_file.as_deref())?;

    let config = config::load(cli.config.as_deref())?;
    info!(presets = ?config.tip_presets, "starting calculator");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([520.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tip Calculator",
        native_options,
        Box::new(move |cc| Ok(Box::new(TipApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("ui failed: {e}"))
}
