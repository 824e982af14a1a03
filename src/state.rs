use crate::color::ColorMap;
use crate::data::cases::CaseStats;
use crate::data::chart::ChartSpec;
use crate::data::filter::Selection;
use crate::data::model::{Direction, ImmdRecord, Language, Source, WarsCase};
use crate::data::series::build_series;

/// Widest window (in logical points) that still uses the compact layout.
pub const COMPACT_MAX_WIDTH: f32 = 960.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Compact,
    Wide,
}

impl LayoutMode {
    pub fn for_width(width: f32) -> Self {
        if width <= COMPACT_MAX_WIDTH {
            LayoutMode::Compact
        } else {
            LayoutMode::Wide
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Immigration records as loaded.
    pub immd_records: Vec<ImmdRecord>,

    /// Current selector values.
    pub selection: Selection,

    /// Chart derived from `immd_records` and `selection` (cached).
    pub chart: Option<ChartSpec>,

    /// Why the chart could not be built.
    pub chart_error: Option<String>,

    /// Colour per location.
    pub location_colors: ColorMap,

    /// Case reports as loaded.
    pub cases: Vec<WarsCase>,

    /// Breakdown of `cases` in the current language (cached).
    pub case_stats: Option<CaseStats>,

    pub language: Language,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest newly loaded immigration records.
    pub fn set_immd_records(&mut self, records: Vec<ImmdRecord>) {
        self.immd_records = records;
        self.rebuild_chart();
        self.status_message = None;
    }

    /// Ingest newly loaded case reports.
    pub fn set_cases(&mut self, cases: Vec<WarsCase>) {
        self.cases = cases;
        self.rebuild_stats();
        self.status_message = None;
    }

    pub fn set_direction(&mut self, direction: Direction) {
        if self.selection.direction != direction {
            self.selection.direction = direction;
            self.rebuild_chart();
        }
    }

    pub fn set_source(&mut self, source: Source) {
        if self.selection.source != source {
            self.selection.source = source;
            self.rebuild_chart();
        }
    }

    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            self.language = language;
            self.rebuild_stats();
        }
    }

    /// Recompute the series for the current records and selection.
    pub fn rebuild_chart(&mut self) {
        if self.immd_records.is_empty() {
            self.chart = None;
            self.chart_error = None;
            self.location_colors = ColorMap::default();
            return;
        }
        match build_series(&self.immd_records, self.selection) {
            Ok(set) => {
                self.location_colors = ColorMap::new(set.locations());
                self.chart = Some(ChartSpec::from_series(&set));
                self.chart_error = None;
            }
            Err(e) => {
                log::error!("Failed to build series: {e}");
                self.chart = None;
                self.chart_error = Some(e.to_string());
            }
        }
    }

    pub fn rebuild_stats(&mut self) {
        self.case_stats = if self.cases.is_empty() {
            None
        } else {
            Some(CaseStats::from_cases(&self.cases, self.language))
        };
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::data::model::{Category, Gender, Localized};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn records() -> Vec<ImmdRecord> {
        let am = Category::new(Direction::Arrival, Source::Mainland);
        let dt = Category::new(Direction::Departure, Source::Total);
        vec![
            ImmdRecord::new(date("2020-01-01"), "A").with_count(am, 10.0),
            ImmdRecord::new(date("2020-01-02"), "A")
                .with_count(am, 20.0)
                .with_count(dt, 5.0),
        ]
    }

    #[test]
    fn test_layout_mode() {
        assert_eq!(LayoutMode::for_width(400.0), LayoutMode::Compact);
        assert_eq!(LayoutMode::for_width(960.0), LayoutMode::Compact);
        assert_eq!(LayoutMode::for_width(1280.0), LayoutMode::Wide);
    }

    #[test]
    fn test_selection_change_rebuilds_chart() {
        let mut state = AppState::default();
        state.set_immd_records(records());
        assert!(!state.chart.as_ref().unwrap().no_data);

        state.set_source(Source::Total);
        assert!(state.chart.as_ref().unwrap().no_data);

        state.set_direction(Direction::Departure);
        let chart = state.chart.as_ref().unwrap();
        assert!(!chart.no_data);
        assert_eq!(chart.layers[0].points[1].map(|[_, y]| y), Some(5.0));
    }

    #[test]
    fn test_duplicate_records_surface_as_chart_error() {
        let mut recs = records();
        recs.push(recs[0].clone());
        let mut state = AppState::default();
        state.set_immd_records(recs);
        assert!(state.chart.is_none());
        assert!(state.chart_error.as_deref().unwrap().contains("both describe A"));
    }

    #[test]
    fn test_language_change_rebuilds_stats() {
        let case = WarsCase {
            case_no: 1,
            confirmation_date: None,
            gender: Gender::Female,
            age: Some(30),
            enabled: true,
            case_type: Localized::new("確診", "Confirmed"),
            status: Localized::default(),
            hospital: Localized::default(),
            citizenship: Localized::new("香港", "Hong Kong"),
            detail: Localized::default(),
            source_url: String::new(),
        };
        let mut state = AppState::default();
        state.set_cases(vec![case]);
        assert_eq!(state.case_stats.as_ref().unwrap().citizenship[0].label, "Hong Kong");

        state.set_language(Language::Zh);
        assert_eq!(state.case_stats.as_ref().unwrap().citizenship[0].label, "香港");
    }
}
