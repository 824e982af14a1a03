use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Category – the (direction, source) pair that picks one numeric column
// ---------------------------------------------------------------------------

/// Direction of travel through a control point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Arrival,
    Departure,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Arrival, Direction::Departure];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Arrival => "arrival",
            Direction::Departure => "departure",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == s)
    }
}

/// Where the travellers come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Source {
    Mainland,
    HongKong,
    Other,
    Total,
}

impl Source {
    pub const ALL: [Source; 4] = [Source::Mainland, Source::HongKong, Source::Other, Source::Total];

    pub fn as_str(self) -> &'static str {
        match self {
            Source::Mainland => "mainland",
            Source::HongKong => "hong_kong",
            Source::Other => "other",
            Source::Total => "total",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|src| src.as_str() == s)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite key of a measurement column, e.g. `arrival_hong_kong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Category {
    pub direction: Direction,
    pub source: Source,
}

impl Category {
    pub fn new(direction: Direction, source: Source) -> Self {
        Self { direction, source }
    }

    /// Every category, in selector order.
    pub fn all() -> impl Iterator<Item = Category> {
        Direction::ALL
            .into_iter()
            .flat_map(|d| Source::ALL.into_iter().map(move |s| Category::new(d, s)))
    }

    /// Column name used by the data files.
    pub fn field_name(self) -> String {
        format!("{}_{}", self.direction, self.source)
    }

    /// Resolve a column name into a category.  The direction never contains
    /// an underscore, so the first `_` splits the two halves.
    pub fn from_field_name(name: &str) -> Option<Self> {
        let (direction, source) = name.split_once('_')?;
        Some(Category::new(Direction::parse(direction)?, Source::parse(source)?))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.direction, self.source)
    }
}

// ---------------------------------------------------------------------------
// ImmdRecord – one row of the immigration table
// ---------------------------------------------------------------------------

/// Passenger counts for one control point on one day.
#[derive(Debug, Clone, PartialEq)]
pub struct ImmdRecord {
    pub date: NaiveDate,
    /// Control point name.
    pub location: String,
    /// Only categories with a value in the source row are present.
    pub counts: BTreeMap<Category, f64>,
}

impl ImmdRecord {
    pub fn new(date: NaiveDate, location: impl Into<String>) -> Self {
        Self {
            date,
            location: location.into(),
            counts: BTreeMap::new(),
        }
    }

    pub fn with_count(mut self, category: Category, value: f64) -> Self {
        self.counts.insert(category, value);
        self
    }

    pub fn value(&self, category: Category) -> Option<f64> {
        self.counts.get(&category).copied()
    }
}

// ---------------------------------------------------------------------------
// Localised text
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    Zh,
    #[default]
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Zh, Language::En];

    pub fn label(self) -> &'static str {
        match self {
            Language::Zh => "中文",
            Language::En => "English",
        }
    }
}

/// A text field stored in both languages (`<field>_zh` / `<field>_en`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Localized {
    pub zh: String,
    pub en: String,
}

impl Localized {
    pub fn new(zh: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            zh: zh.into(),
            en: en.into(),
        }
    }

    /// Text in `language`, or the other language when that one is blank.
    pub fn get(&self, language: Language) -> &str {
        let (preferred, fallback) = match language {
            Language::Zh => (&self.zh, &self.en),
            Language::En => (&self.en, &self.zh),
        };
        if preferred.trim().is_empty() {
            fallback
        } else {
            preferred
        }
    }
}

// ---------------------------------------------------------------------------
// WarsCase – one reported case
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Gender {
    Female,
    Male,
    Unknown,
}

impl Gender {
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "F" | "f" => Gender::Female,
            "M" | "m" => Gender::Male,
            _ => Gender::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WarsCase {
    pub case_no: u32,
    pub confirmation_date: Option<NaiveDate>,
    pub gender: Gender,
    pub age: Option<u32>,
    /// Whether the case is published (`enabled == "Y"` in the source).
    pub enabled: bool,
    pub case_type: Localized,
    pub status: Localized,
    pub hospital: Localized,
    pub citizenship: Localized,
    pub detail: Localized,
    pub source_url: String,
}

impl WarsCase {
    pub fn is_confirmed(&self) -> bool {
        self.case_type.en.trim() == "Confirmed"
    }
}
