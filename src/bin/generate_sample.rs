use std::sync::Arc;

use arrow::array::{Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde_json::json;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_f64() * n as f64) as usize % n
    }
}

const SOURCES: [&str; 3] = ["mainland", "hong_kong", "other"];
const DIRECTIONS: [&str; 2] = ["arrival", "departure"];

/// (control point, daily baseline traffic)
const CONTROL_POINTS: [(&str, f64); 4] = [
    ("Airport", 30_000.0),
    ("Lo Wu", 45_000.0),
    ("Shenzhen Bay", 25_000.0),
    ("Hong Kong-Zhuhai-Macao Bridge", 12_000.0),
];

/// Share of traffic per source.
const SOURCE_SHARE: [f64; 3] = [0.35, 0.5, 0.15];

fn write_immd(path: &str, rng: &mut SimpleRng) -> (usize, usize) {
    let start = chrono::NaiveDate::from_ymd_opt(2020, 1, 20).expect("valid start date");
    let days = 30;

    let mut dates: Vec<String> = Vec::new();
    let mut locations: Vec<String> = Vec::new();
    // one column per direction x source, plus the per-direction total
    let mut columns: Vec<(String, Vec<f64>)> = DIRECTIONS
        .iter()
        .flat_map(|d| {
            SOURCES
                .iter()
                .chain(std::iter::once(&"total"))
                .map(move |s| (format!("{d}_{s}"), Vec::new()))
        })
        .collect();

    for day in 0..days {
        let date = start + chrono::Days::new(day as u64);
        // traffic collapses as the outbreak progresses
        let decay = (-(day as f64) / 12.0).exp();
        let mut day_totals = vec![0.0; columns.len()];

        for (location, baseline) in CONTROL_POINTS {
            dates.push(date.to_string());
            locations.push(location.to_string());

            for (d, _) in DIRECTIONS.iter().enumerate() {
                let mut total = 0.0;
                for (s, share) in SOURCE_SHARE.iter().enumerate() {
                    let noise = 0.9 + 0.2 * rng.next_f64();
                    let value = (baseline * share * decay * noise).round();
                    let col = d * (SOURCES.len() + 1) + s;
                    columns[col].1.push(value);
                    day_totals[col] += value;
                    total += value;
                }
                let col = d * (SOURCES.len() + 1) + SOURCES.len();
                columns[col].1.push(total);
                day_totals[col] += total;
            }
        }

        dates.push(date.to_string());
        locations.push("Total".to_string());
        for (col, total) in columns.iter_mut().zip(day_totals) {
            col.1.push(total);
        }
    }

    let mut fields = vec![
        Field::new("date", DataType::Utf8, false),
        Field::new("location", DataType::Utf8, false),
    ];
    fields.extend(
        columns
            .iter()
            .map(|(name, _)| Field::new(name.as_str(), DataType::Float64, true)),
    );
    let schema = Arc::new(Schema::new(fields));

    let mut arrays: Vec<arrow::array::ArrayRef> = vec![
        Arc::new(StringArray::from(dates.iter().map(|s| s.as_str()).collect::<Vec<_>>())),
        Arc::new(StringArray::from(locations.iter().map(|s| s.as_str()).collect::<Vec<_>>())),
    ];
    arrays.extend(
        columns
            .into_iter()
            .map(|(_, values)| Arc::new(Float64Array::from(values)) as arrow::array::ArrayRef),
    );

    let rows = dates.len();
    let batch = RecordBatch::try_new(schema.clone(), arrays).expect("Failed to create RecordBatch");

    let file = std::fs::File::create(path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    (rows, days)
}

fn write_cases(path: &str, rng: &mut SimpleRng) -> usize {
    let citizenship = [
        ("香港", "Hong Kong"),
        ("內地", "Mainland"),
        ("英國", "United Kingdom"),
        ("菲律賓", "Philippines"),
    ];
    let hospitals = [
        ("瑪嘉烈醫院", "Princess Margaret Hospital"),
        ("伊利沙伯醫院", "Queen Elizabeth Hospital"),
        ("屯門醫院", "Tuen Mun Hospital"),
    ];
    let start = chrono::NaiveDate::from_ymd_opt(2020, 1, 23).expect("valid start date");
    let n = 60;

    let cases: Vec<serde_json::Value> = (1..=n)
        .map(|case_no| {
            let (cit_zh, cit_en) = citizenship[rng.below(citizenship.len())];
            let (hosp_zh, hosp_en) = hospitals[rng.below(hospitals.len())];
            let gender = if rng.next_f64() < 0.5 { "F" } else { "M" };
            // a few cases are still awaiting age details
            let age = if rng.below(15) == 0 {
                String::new()
            } else {
                (18 + rng.below(70)).to_string()
            };
            let confirmed = rng.below(10) != 0;
            let date = start + chrono::Days::new((case_no / 3) as u64);
            json!({
                "case_no": case_no.to_string(),
                "confirmation_date": date.to_string(),
                "gender": gender,
                "age": age,
                "enabled": if rng.below(20) == 0 { "N" } else { "Y" },
                "type_zh": if confirmed { "確診" } else { "疑似" },
                "type_en": if confirmed { "Confirmed" } else { "Probable" },
                "status_zh": "住院",
                "status_en": "Hospitalised",
                "hospital_zh": hosp_zh,
                "hospital_en": hosp_en,
                "citizenship_zh": cit_zh,
                "citizenship_en": cit_en,
                "detail_zh": "",
                "detail_en": format!("Case {case_no}: onset of symptoms reported to the health department."),
                "source_url": format!("https://example.org/press/{case_no}"),
            })
        })
        .collect();

    let text = serde_json::to_string_pretty(&cases).expect("Failed to serialise cases");
    std::fs::write(path, text).expect("Failed to write cases");
    n
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let immd_path = "sample_immd.parquet";
    let (rows, days) = write_immd(immd_path, &mut rng);
    println!("Wrote {rows} immigration records ({days} days) to {immd_path}");

    let cases_path = "sample_cases.json";
    let n = write_cases(cases_path, &mut rng);
    println!("Wrote {n} case reports to {cases_path}");
}
