use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::loader::{load_case_file, load_immd_file};
use crate::data::model::{Direction, Language, Source};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – selector widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ui.strong("Direction");
    let current = state.selection.direction;
    egui::ComboBox::from_id_salt("immd_direction")
        .selected_text(current.as_str())
        .show_ui(ui, |ui: &mut Ui| {
            for direction in Direction::ALL {
                if ui
                    .selectable_label(current == direction, direction.as_str())
                    .clicked()
                {
                    state.set_direction(direction);
                }
            }
        });

    ui.add_space(4.0);
    ui.strong("Source");
    let current = state.selection.source;
    egui::ComboBox::from_id_salt("immd_source")
        .selected_text(current.as_str())
        .show_ui(ui, |ui: &mut Ui| {
            for source in Source::ALL {
                if ui
                    .selectable_label(current == source, source.as_str())
                    .clicked()
                {
                    state.set_source(source);
                }
            }
        });

    ui.separator();

    ui.strong("Language");
    let current = state.language;
    ui.horizontal(|ui: &mut Ui| {
        for language in Language::ALL {
            if ui
                .selectable_label(current == language, language.label())
                .clicked()
            {
                state.set_language(language);
            }
        }
    });

    ui.separator();
    ui.label(format!("{} immigration records", state.immd_records.len()));
    ui.label(format!("{} case reports", state.cases.len()));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open immigration data…").clicked() {
                open_immd_dialog(state);
                ui.close_menu();
            }
            if ui.button("Open case data…").clicked() {
                open_cases_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_immd_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open immigration data")
        .add_filter("Supported files", &["parquet", "pq", "json", "csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match load_immd_file(&path) {
            Ok(records) => {
                log::info!("Loaded {} immigration records from {}", records.len(), path.display());
                state.set_immd_records(records);
            }
            Err(e) => {
                log::error!("Failed to load immigration data: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

pub fn open_cases_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open case data")
        .add_filter("Supported files", &["json", "csv"])
        .pick_file();

    if let Some(path) = file {
        match load_case_file(&path) {
            Ok(cases) => {
                log::info!("Loaded {} case reports from {}", cases.len(), path.display());
                state.set_cases(cases);
            }
            Err(e) => {
                log::error!("Failed to load case data: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
