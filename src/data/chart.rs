use chrono::{Datelike, NaiveDate};

use super::series::SeriesSet;

/// Location rendered as an overlay line instead of a stacked area.
pub const TOTAL_LOCATION: &str = "Total";

/// Tick label format of the time axis.
pub const DATE_TICK_FORMAT: &str = "%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Area,
    Line,
}

/// One drawable series.  `points` is aligned with the date axis; `None`
/// is a gap.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: String,
    pub kind: SeriesKind,
    pub points: Vec<Option<[f64; 2]>>,
}

impl Layer {
    /// Contiguous runs of points between gaps.
    pub fn segments(&self) -> Vec<Vec<[f64; 2]>> {
        let mut out = Vec::new();
        let mut current = Vec::new();
        for p in &self.points {
            match p {
                Some(p) => current.push(*p),
                None if !current.is_empty() => out.push(std::mem::take(&mut current)),
                None => {}
            }
        }
        if !current.is_empty() {
            out.push(current);
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub tick_format: &'static str,
    pub y_tick_labels: bool,
    /// Area layers in stacking order (bottom first), then line layers.
    pub layers: Vec<Layer>,
    pub no_data: bool,
}

impl ChartSpec {
    /// Stack every area layer on top of the previous ones; a gap adds
    /// nothing to the running total.
    pub fn from_series(set: &SeriesSet) -> Self {
        let xs: Vec<f64> = set.dates.iter().map(|d| date_to_x(*d)).collect();
        let mut base = vec![0.0_f64; xs.len()];
        let mut areas = Vec::new();
        let mut lines = Vec::new();

        for series in &set.series {
            if series.location == TOTAL_LOCATION {
                let points = xs
                    .iter()
                    .zip(&series.values)
                    .map(|(&x, v)| v.map(|v| [x, v]))
                    .collect();
                lines.push(Layer {
                    name: series.location.clone(),
                    kind: SeriesKind::Line,
                    points,
                });
                continue;
            }

            let points = xs
                .iter()
                .zip(&series.values)
                .zip(base.iter_mut())
                .map(|((&x, v), acc)| {
                    v.map(|v| {
                        *acc += v;
                        [x, *acc]
                    })
                })
                .collect();
            areas.push(Layer {
                name: series.location.clone(),
                kind: SeriesKind::Area,
                points,
            });
        }

        areas.extend(lines);
        ChartSpec {
            tick_format: DATE_TICK_FORMAT,
            y_tick_labels: false,
            layers: areas,
            no_data: set.no_data,
        }
    }

    pub fn format_tick(&self, x: f64) -> String {
        format_tick(self.tick_format, x)
    }
}

/// Label for a time-axis position; empty when `x` is not a valid day.
pub fn format_tick(format: &str, x: f64) -> String {
    x_to_date(x)
        .map(|d| d.format(format).to_string())
        .unwrap_or_default()
}

/// Plot coordinate of a date (days since 0001-01-01).
pub fn date_to_x(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

pub fn x_to_date(x: f64) -> Option<NaiveDate> {
    if !x.is_finite() {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
}
