use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Gender;

/// Fixed colours for the female / male breakdown.
pub const GENDER_COLORS: [Color32; 2] = [
    Color32::from_rgb(0x00, 0x62, 0x66),
    Color32::from_rgb(0xED, 0x4C, 0x67),
];

/// Colours for categorical breakdowns (citizenship), cycled when exhausted.
pub const CATEGORY_COLORS: [Color32; 10] = [
    Color32::from_rgb(0x45, 0xCF, 0x8F),
    Color32::from_rgb(0x00, 0x5E, 0xCD),
    Color32::from_rgb(0xFF, 0x5D, 0x55),
    Color32::from_rgb(0x42, 0x45, 0x59),
    Color32::from_rgb(0xF4, 0x96, 0x00),
    Color32::from_rgb(0xF3, 0x96, 0x6F),
    Color32::from_rgb(0x06, 0xC7, 0xBA),
    Color32::from_rgb(0x00, 0x44, 0x27),
    Color32::from_rgb(0xBE, 0xB4, 0xD3),
    Color32::from_rgb(0xFC, 0xC4, 0x57),
];

pub fn gender_color(gender: Gender) -> Color32 {
    match gender {
        Gender::Male => GENDER_COLORS[0],
        Gender::Female => GENDER_COLORS[1],
        Gender::Unknown => Color32::GRAY,
    }
}

pub fn category_color(index: usize) -> Color32 {
    CATEGORY_COLORS[index % CATEGORY_COLORS.len()]
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.5);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Location → Color32
// ---------------------------------------------------------------------------

/// Assigns each chart location a stable colour.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    /// Build a colour map over `locations` in the order given.
    pub fn new<'a>(locations: impl IntoIterator<Item = &'a str>) -> Self {
        let locations: Vec<&str> = locations.into_iter().collect();
        let palette = generate_palette(locations.len());
        let mapping = locations
            .into_iter()
            .zip(palette)
            .map(|(loc, c)| (loc.to_string(), c))
            .collect();
        ColorMap { mapping }
    }

    pub fn color_for(&self, location: &str) -> Color32 {
        self.mapping
            .get(location)
            .copied()
            .unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_is_distinct() {
        assert!(generate_palette(0).is_empty());
        let p = generate_palette(6);
        assert_eq!(p.len(), 6);
        for (i, a) in p.iter().enumerate() {
            for b in &p[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_color_map_lookup() {
        let cm = ColorMap::new(["Airport", "Lo Wu"]);
        assert_ne!(cm.color_for("Airport"), cm.color_for("Lo Wu"));
        assert_eq!(cm.color_for("Nowhere"), Color32::GRAY);
    }

    #[test]
    fn test_category_colors_cycle() {
        assert_eq!(category_color(0), category_color(CATEGORY_COLORS.len()));
    }
}
