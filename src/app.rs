use eframe::egui::{self, ScrollArea, Ui};

use crate::state::{AppState, LayoutMode};
use crate::ui::{cases, panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
}

impl DashboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

fn card(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(ui.available_width());
        add_contents(ui);
    });
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mode = LayoutMode::for_width(ctx.screen_rect().width());

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: selectors ----
        egui::SidePanel::left("filter_panel")
            .default_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: charts and case list ----
        let state = &self.state;
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    card(ui, |ui| {
                        ui.heading("Immigration");
                        plot::immd_chart(ui, state);
                    });

                    if let Some(stats) = &state.case_stats {
                        match mode {
                            LayoutMode::Compact => {
                                card(ui, |ui| plot::gender_chart(ui, stats));
                                card(ui, |ui| plot::age_summary(ui, stats, mode));
                                card(ui, |ui| plot::citizenship_chart(ui, stats));
                            }
                            LayoutMode::Wide => {
                                ui.columns(3, |cols| {
                                    card(&mut cols[0], |ui| plot::gender_chart(ui, stats));
                                    card(&mut cols[1], |ui| plot::age_summary(ui, stats, mode));
                                    card(&mut cols[2], |ui| plot::citizenship_chart(ui, stats));
                                });
                            }
                        }
                    }

                    card(ui, |ui| cases::case_table(ui, state));
                });
        });
    }
}
