mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::DashboardApp;
use clap::{Parser, ValueEnum};
use eframe::egui;

use data::loader::{load_case_file, load_immd_file};
use data::model::Language;
use state::AppState;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LangArg {
    Zh,
    En,
}

impl From<LangArg> for Language {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::Zh => Language::Zh,
            LangArg::En => Language::En,
        }
    }
}

#[derive(Parser)]
#[command(name = "outbreak-dashboard")]
#[command(about = "Case statistics and immigration flows dashboard", long_about = None)]
#[command(version)]
struct Cli {
    /// Immigration records (.parquet, .json or .csv) to open at startup
    #[arg(long)]
    immd: Option<PathBuf>,

    /// Case reports (.json or .csv) to open at startup
    #[arg(long)]
    cases: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "en")]
    lang: LangArg,

    /// Overrides RUST_LOG
    #[arg(long, value_parser = ["error", "warn", "info", "debug", "trace"])]
    log_level: Option<String>,
}

fn initial_state(cli: &Cli) -> AppState {
    let mut state = AppState::default();
    state.set_language(cli.lang.into());

    let mut errors = Vec::new();
    if let Some(path) = &cli.immd {
        match load_immd_file(path) {
            Ok(records) => {
                log::info!("Loaded {} immigration records from {}", records.len(), path.display());
                state.set_immd_records(records);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                errors.push(format!("{}: {e:#}", path.display()));
            }
        }
    }
    if let Some(path) = &cli.cases {
        match load_case_file(path) {
            Ok(cases) => {
                log::info!("Loaded {} case reports from {}", cases.len(), path.display());
                state.set_cases(cases);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                errors.push(format!("{}: {e:#}", path.display()));
            }
        }
    }
    if !errors.is_empty() {
        state.status_message = Some(format!("Error: {}", errors.join("; ")));
    }
    state
}

fn main() -> eframe::Result {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if let Some(level) = &cli.log_level {
        logger.parse_filters(level);
    }
    logger.init();

    let state = initial_state(&cli);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Outbreak Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new(state)))),
    )
}
