use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use crate::color::{category_color, gender_color};
use crate::data::cases::CaseStats;
use crate::data::chart::{format_tick, Layer, SeriesKind};
use crate::data::model::Gender;
use crate::state::{AppState, LayoutMode};

// ---------------------------------------------------------------------------
// Immigration chart
// ---------------------------------------------------------------------------

/// Stacked area chart of the selected passenger counts per control point.
pub fn immd_chart(ui: &mut Ui, state: &AppState) {
    if let Some(err) = &state.chart_error {
        ui.label(RichText::new(format!("Cannot chart data: {err}")).color(Color32::RED));
        return;
    }
    let Some(spec) = &state.chart else {
        ui.label("Open immigration data to view arrivals and departures  (File → Open…)");
        return;
    };
    if spec.no_data {
        ui.label(format!(
            "No data for {} / {}",
            state.selection.direction, state.selection.source
        ));
        return;
    }

    let tick_format = spec.tick_format;
    let show_y_ticks = spec.y_tick_labels;

    Plot::new("immd_chart")
        .legend(Legend::default())
        .height(320.0)
        .x_axis_formatter(move |mark, _range| format_tick(tick_format, mark.value))
        .y_axis_formatter(move |mark, _range| {
            if show_y_ticks {
                format!("{}", mark.value)
            } else {
                String::new()
            }
        })
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            // Tallest stack first so lower layers paint over it; lines on top.
            let (areas, lines): (Vec<&Layer>, Vec<&Layer>) = spec
                .layers
                .iter()
                .partition(|l| l.kind == SeriesKind::Area);
            for layer in areas.into_iter().rev().chain(lines) {
                let color = state.location_colors.color_for(&layer.name);
                for segment in layer.segments() {
                    let mut line = Line::new(PlotPoints::from(segment))
                        .name(&layer.name)
                        .color(color);
                    line = match layer.kind {
                        SeriesKind::Area => line.fill(0.0).width(1.0),
                        SeriesKind::Line => line.width(2.0),
                    };
                    plot_ui.line(line);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Case breakdowns
// ---------------------------------------------------------------------------

fn static_plot(id: &str, height: f32) -> Plot {
    Plot::new(id)
        .height(height)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(0.0)
}

pub fn gender_chart(ui: &mut Ui, stats: &CaseStats) {
    ui.heading("Gender");
    let bars: Vec<Bar> = stats
        .genders
        .iter()
        .enumerate()
        .map(|(i, g)| {
            Bar::new(i as f64, g.count as f64)
                .name(format!("{} - {}", g.gender.label(), g.count))
                .fill(gender_color(g.gender))
                .width(0.5)
        })
        .collect();
    static_plot("gender_chart", 30.0 * stats.genders.len().max(1) as f32 + 20.0)
        .legend(Legend::default())
        .show(ui, |plot_ui| plot_ui.bar_chart(BarChart::new(bars).horizontal()));
}

pub fn citizenship_chart(ui: &mut Ui, stats: &CaseStats) {
    ui.heading("Citizenship");
    let bars: Vec<Bar> = stats
        .citizenship
        .iter()
        .enumerate()
        .map(|(i, g)| {
            Bar::new(i as f64, g.count as f64)
                .name(format!("{} - {}", g.label, g.count))
                .fill(category_color(i))
                .width(0.8)
        })
        .collect();
    static_plot("citizenship_chart", 30.0 * stats.citizenship.len().max(1) as f32)
        .legend(Legend::default())
        .show(ui, |plot_ui| plot_ui.bar_chart(BarChart::new(bars).horizontal()));
}

pub fn age_summary(ui: &mut Ui, stats: &CaseStats, mode: LayoutMode) {
    ui.heading("Age");
    let range = match stats.age_range {
        Some((lo, hi)) => format!("{lo} – {hi}"),
        None => "-".to_string(),
    };
    let average = |gender: Gender| {
        stats
            .gender(gender)
            .and_then(|g| g.average_age)
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string())
    };

    match mode {
        LayoutMode::Compact => {
            ui.horizontal_wrapped(|ui: &mut Ui| {
                ui.label(format!("Range: {range}"));
                ui.label(format!("Male avg.: {}", average(Gender::Male)));
                ui.label(format!("Female avg.: {}", average(Gender::Female)));
            });
        }
        LayoutMode::Wide => {
            ui.columns(3, |cols| {
                for (col, (title, value)) in cols.iter_mut().zip([
                    ("Age range", range.clone()),
                    ("Male average", average(Gender::Male)),
                    ("Female average", average(Gender::Female)),
                ]) {
                    col.vertical_centered(|ui: &mut Ui| {
                        ui.label(title);
                        ui.label(RichText::new(value).size(32.0));
                        ui.label("years");
                    });
                }
            });
        }
    }
}
