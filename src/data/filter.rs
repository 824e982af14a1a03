use super::model::{Category, Direction, Source, WarsCase};

// ---------------------------------------------------------------------------
// Selector state: which measurement column is charted
// ---------------------------------------------------------------------------

/// The two selector values, passed explicitly into the series builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub direction: Direction,
    pub source: Source,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            direction: Direction::Arrival,
            source: Source::Mainland,
        }
    }
}

impl Selection {
    pub fn new(direction: Direction, source: Source) -> Self {
        Self { direction, source }
    }

    pub fn category(self) -> Category {
        Category::new(self.direction, self.source)
    }
}

// ---------------------------------------------------------------------------
// Case predicates
// ---------------------------------------------------------------------------

/// Published cases, newest case number first.
pub fn published_cases(cases: &[WarsCase]) -> Vec<&WarsCase> {
    let mut out: Vec<&WarsCase> = cases.iter().filter(|c| c.enabled).collect();
    out.sort_by(|a, b| b.case_no.cmp(&a.case_no));
    out
}

/// Cases counted by the demographic breakdowns.
pub fn confirmed_cases(cases: &[WarsCase]) -> impl Iterator<Item = &WarsCase> {
    cases.iter().filter(|c| c.is_confirmed())
}
