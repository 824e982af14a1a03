use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::filter::published_cases;
use crate::data::model::Language;
use crate::state::AppState;

const ROW_HEIGHT: f32 = 22.0;

/// Longest detail text shown inline; the full text is on hover.
const DETAIL_PREVIEW_CHARS: usize = 80;

fn preview(text: &str) -> String {
    if text.chars().count() <= DETAIL_PREVIEW_CHARS {
        text.to_string()
    } else {
        let mut s: String = text.chars().take(DETAIL_PREVIEW_CHARS).collect();
        s.push('…');
        s
    }
}

fn or_dash(text: &str) -> &str {
    if text.trim().is_empty() {
        "-"
    } else {
        text
    }
}

/// Table of published cases, newest first.
pub fn case_table(ui: &mut Ui, state: &AppState) {
    let cases = published_cases(&state.cases);
    ui.heading(format!("Cases ({})", cases.len()));
    if cases.is_empty() {
        ui.label("Open case data to list reported cases  (File → Open…)");
        return;
    }
    let lang: Language = state.language;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .vscroll(false)
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::remainder())
        .column(Column::auto())
        .header(ROW_HEIGHT, |mut header| {
            for title in [
                "#", "Type", "Status", "Age / Gender", "Confirmed", "Citizenship", "Hospital",
                "Detail", "Source",
            ] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, cases.len(), |mut row| {
                let case = cases[row.index()];
                row.col(|ui| {
                    ui.label(RichText::new(format!("#{}", case.case_no)).strong());
                });
                row.col(|ui| {
                    ui.label(case.case_type.get(lang));
                });
                row.col(|ui| {
                    ui.label(case.status.get(lang));
                });
                row.col(|ui| {
                    let age = case.age.map(|a| a.to_string()).unwrap_or_else(|| "-".into());
                    ui.label(format!("{age}  {}", case.gender.label()));
                });
                row.col(|ui| {
                    let date = case
                        .confirmation_date
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "-".into());
                    ui.label(date);
                });
                row.col(|ui| {
                    ui.label(or_dash(case.citizenship.get(lang)));
                });
                row.col(|ui| {
                    ui.label(or_dash(case.hospital.get(lang)));
                });
                row.col(|ui| {
                    let detail = case.detail.get(lang);
                    ui.label(preview(detail)).on_hover_text(detail);
                });
                row.col(|ui| {
                    if !case.source_url.is_empty() {
                        ui.hyperlink_to("source", &case.source_url);
                    }
                });
            });
        });
}
