use std::collections::BTreeMap;

use super::filter::confirmed_cases;
use super::model::{Gender, Language, WarsCase};

/// Label used for cases with no citizenship recorded.
pub const UNKNOWN_CITIZENSHIP: &str = "-";

#[derive(Debug, Clone, PartialEq)]
pub struct GenderGroup {
    pub gender: Gender,
    pub count: usize,
    /// Truncated mean over cases with a known age.
    pub average_age: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CitizenshipGroup {
    pub label: String,
    pub count: usize,
}

/// Demographic breakdown of confirmed cases.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CaseStats {
    pub confirmed: usize,
    /// Female, male, then unknown; groups with no cases are omitted.
    pub genders: Vec<GenderGroup>,
    /// Youngest and oldest known age.
    pub age_range: Option<(u32, u32)>,
    /// Ascending by count, ties by label.
    pub citizenship: Vec<CitizenshipGroup>,
}

impl CaseStats {
    pub fn from_cases(cases: &[WarsCase], language: Language) -> Self {
        let mut confirmed = 0;
        let mut by_gender: BTreeMap<Gender, (usize, u64, u64)> = BTreeMap::new();
        let mut by_citizenship: BTreeMap<String, usize> = BTreeMap::new();
        let mut age_range: Option<(u32, u32)> = None;

        for case in confirmed_cases(cases) {
            confirmed += 1;

            let entry = by_gender.entry(case.gender).or_default();
            entry.0 += 1;
            if let Some(age) = case.age {
                entry.1 += u64::from(age);
                entry.2 += 1;
                age_range = Some(match age_range {
                    Some((lo, hi)) => (lo.min(age), hi.max(age)),
                    None => (age, age),
                });
            }

            let label = case.citizenship.get(language).trim();
            let label = if label.is_empty() { UNKNOWN_CITIZENSHIP } else { label };
            *by_citizenship.entry(label.to_string()).or_default() += 1;
        }

        let genders = by_gender
            .into_iter()
            .map(|(gender, (count, age_sum, aged))| GenderGroup {
                gender,
                count,
                average_age: (aged > 0).then(|| (age_sum / aged) as u32),
            })
            .collect();

        let mut citizenship: Vec<CitizenshipGroup> = by_citizenship
            .into_iter()
            .map(|(label, count)| CitizenshipGroup { label, count })
            .collect();
        // stable: equal counts keep label order
        citizenship.sort_by_key(|g| g.count);

        CaseStats {
            confirmed,
            genders,
            age_range,
            citizenship,
        }
    }

    pub fn gender(&self, gender: Gender) -> Option<&GenderGroup> {
        self.genders.iter().find(|g| g.gender == gender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Localized;

    fn case(no: u32, gender: &str, age: Option<u32>, citizenship: (&str, &str)) -> WarsCase {
        WarsCase {
            case_no: no,
            confirmation_date: None,
            gender: Gender::from_code(gender),
            age,
            enabled: true,
            case_type: Localized::new("確診", "Confirmed"),
            status: Localized::default(),
            hospital: Localized::default(),
            citizenship: Localized::new(citizenship.0, citizenship.1),
            detail: Localized::default(),
            source_url: String::new(),
        }
    }

    fn sample() -> Vec<WarsCase> {
        let mut probable = case(99, "M", Some(90), ("英國", "UK"));
        probable.case_type = Localized::new("疑似", "Probable");
        vec![
            case(1, "M", Some(39), ("香港", "Hong Kong")),
            case(2, "F", Some(62), ("香港", "Hong Kong")),
            case(3, "F", Some(73), ("內地", "Mainland")),
            case(4, "M", Some(56), ("香港", "Hong Kong")),
            case(5, "F", None, ("", "")),
            probable,
        ]
    }

    #[test]
    fn test_counts_only_confirmed() {
        let stats = CaseStats::from_cases(&sample(), Language::En);
        assert_eq!(stats.confirmed, 5);
        assert_eq!(stats.gender(Gender::Female).unwrap().count, 3);
        assert_eq!(stats.gender(Gender::Male).unwrap().count, 2);
        assert!(stats.gender(Gender::Unknown).is_none());
    }

    #[test]
    fn test_average_age_truncates_and_skips_unknown() {
        let stats = CaseStats::from_cases(&sample(), Language::En);
        // (62 + 73) / 2 = 67.5
        assert_eq!(stats.gender(Gender::Female).unwrap().average_age, Some(67));
        // (39 + 56) / 2 = 47.5
        assert_eq!(stats.gender(Gender::Male).unwrap().average_age, Some(47));
        assert_eq!(stats.age_range, Some((39, 73)));
    }

    #[test]
    fn test_citizenship_sorted_ascending_in_language() {
        let stats = CaseStats::from_cases(&sample(), Language::Zh);
        let groups: Vec<(&str, usize)> = stats
            .citizenship
            .iter()
            .map(|g| (g.label.as_str(), g.count))
            .collect();
        assert_eq!(groups, vec![("-", 1), ("內地", 1), ("香港", 3)]);
    }

    #[test]
    fn test_empty_input() {
        let stats = CaseStats::from_cases(&[], Language::En);
        assert_eq!(stats, CaseStats::default());
    }
}
