use std::fmt;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Date32Type, Float32Type, Float64Type, Int32Type, Int64Type};
use chrono::NaiveDate;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{Category, Gender, ImmdRecord, Localized, WarsCase};

/// Days between 0001-01-01 and the Unix epoch.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// A malformed input row.  Rows are numbered from 0, excluding headers.
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("row {row}: missing required field '{field}'")]
    MissingField { row: usize, field: &'static str },

    #[error("row {row}: field '{field}' has invalid value '{value}'")]
    InvalidValue {
        row: usize,
        field: String,
        value: String,
    },
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load immigration records from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.parquet` – flat columns `date`, `location`, `<direction>_<source>`
/// * `.json`    – `[{ "date": "2020-02-01", "location": "Airport", "arrival_mainland": 120, ... }]`
/// * `.csv`     – same columns as the parquet layout
pub fn load_immd_file(path: &Path) -> Result<Vec<ImmdRecord>> {
    match extension(path).as_str() {
        "parquet" | "pq" => load_immd_parquet(path),
        "json" => load_immd_json(path),
        "csv" => load_immd_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

/// Load case reports from a `.json` array or a `.csv` table.
pub fn load_case_file(path: &Path) -> Result<Vec<WarsCase>> {
    let raw: Vec<RawCase> = match extension(path).as_str() {
        "json" => {
            let text = std::fs::read_to_string(path).context("reading JSON file")?;
            serde_json::from_str(&text).context("parsing case JSON")?
        }
        "csv" => {
            let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
            reader
                .deserialize::<RawCase>()
                .enumerate()
                .map(|(row, rec)| rec.with_context(|| format!("CSV row {row}")))
                .collect::<Result<_>>()?
        }
        other => bail!("Unsupported file extension: .{other}"),
    };

    let cases = raw
        .into_iter()
        .enumerate()
        .map(|(row, rec)| rec.into_case(row))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(cases)
}

// ---------------------------------------------------------------------------
// Immigration rows
// ---------------------------------------------------------------------------

/// One cell as read from any of the supported formats.
#[derive(Debug, Clone, Copy)]
enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Date(NaiveDate),
    /// Arrow column type the loader cannot read.
    Unsupported(&'a DataType),
    Null,
}

impl fmt::Display for Cell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{s}"),
            Cell::Number(v) => write!(f, "{v}"),
            Cell::Date(d) => write!(f, "{d}"),
            Cell::Unsupported(t) => write!(f, "<unsupported type {t}>"),
            Cell::Null => write!(f, "<null>"),
        }
    }
}

impl Cell<'_> {
    fn is_blank(&self) -> bool {
        match self {
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Null => true,
            _ => false,
        }
    }
}

fn invalid(row: usize, field: &str, cell: Cell<'_>) -> RecordError {
    RecordError::InvalidValue {
        row,
        field: field.to_string(),
        value: cell.to_string(),
    }
}

/// Validate one row and resolve its measurement columns.
fn immd_record<'a>(
    row: usize,
    cells: impl IntoIterator<Item = (&'a str, Cell<'a>)>,
) -> Result<ImmdRecord, RecordError> {
    let mut date = None;
    let mut location = None;
    let mut record = ImmdRecord::new(NaiveDate::MIN, String::new());

    for (column, cell) in cells {
        if cell.is_blank() {
            continue;
        }
        match column {
            "date" => {
                date = Some(match cell {
                    Cell::Date(d) => d,
                    Cell::Text(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                        .map_err(|_| invalid(row, column, cell))?,
                    _ => return Err(invalid(row, column, cell)),
                });
            }
            "location" => {
                location = Some(match cell {
                    Cell::Text(s) => s.trim().to_string(),
                    Cell::Number(v) => v.to_string(),
                    _ => return Err(invalid(row, column, cell)),
                });
            }
            _ => {
                let Some(category) = Category::from_field_name(column) else {
                    log::debug!("row {row}: ignoring column '{column}'");
                    continue;
                };
                let value = match cell {
                    Cell::Number(v) => v,
                    Cell::Text(s) => s
                        .trim()
                        .replace(',', "")
                        .parse::<f64>()
                        .map_err(|_| invalid(row, column, cell))?,
                    _ => return Err(invalid(row, column, cell)),
                };
                if !value.is_finite() {
                    return Err(invalid(row, column, cell));
                }
                record.counts.insert(category, value);
            }
        }
    }

    record.date = date.ok_or(RecordError::MissingField { row, field: "date" })?;
    record.location = location.ok_or(RecordError::MissingField {
        row,
        field: "location",
    })?;
    Ok(record)
}

fn load_immd_json(path: &Path) -> Result<Vec<ImmdRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_immd_json(&text)
}

fn parse_immd_json(text: &str) -> Result<Vec<ImmdRecord>> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let rows = root.as_array().context("Expected top-level JSON array")?;

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        let cells = obj.iter().map(|(key, val)| (key.as_str(), json_cell(val)));
        records.push(immd_record(i, cells)?);
    }
    Ok(records)
}

fn json_cell(val: &JsonValue) -> Cell<'_> {
    match val {
        JsonValue::String(s) => Cell::Text(s),
        JsonValue::Number(n) => n.as_f64().map(Cell::Number).unwrap_or(Cell::Null),
        JsonValue::Null => Cell::Null,
        // Bools, arrays and objects never hold a count; surface them as invalid text.
        JsonValue::Bool(b) => Cell::Text(if *b { "true" } else { "false" }),
        JsonValue::Array(_) => Cell::Text("[array]"),
        JsonValue::Object(_) => Cell::Text("{object}"),
    }
}

fn load_immd_csv(path: &Path) -> Result<Vec<ImmdRecord>> {
    let reader = csv::Reader::from_path(path).context("opening CSV")?;
    read_immd_csv(reader)
}

fn read_immd_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<ImmdRecord>> {
    let headers = reader.headers().context("reading CSV headers")?.clone();

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        let cells = headers
            .iter()
            .map(str::trim)
            .zip(row.iter().map(Cell::Text));
        records.push(immd_record(row_no, cells)?);
    }
    Ok(records)
}

fn load_immd_parquet(path: &Path) -> Result<Vec<ImmdRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();
        let columns: Vec<(&str, ArrayRef)> = schema
            .fields()
            .iter()
            .map(|f| f.name().as_str())
            .zip(batch.columns())
            .map(|(name, col)| {
                decode_strings(col)
                    .with_context(|| format!("decoding parquet column '{name}'"))
                    .map(|col| (name, col))
            })
            .collect::<Result<_>>()?;

        for row in 0..batch.num_rows() {
            let index = records.len();
            let cells = columns
                .iter()
                .map(|(name, col)| (*name, arrow_cell(col, row)));
            records.push(immd_record(index, cells)?);
        }
    }
    Ok(records)
}

/// Dictionary-encoded and view string columns are cast to plain `Utf8`;
/// every other column is passed through.
fn decode_strings(col: &ArrayRef) -> Result<ArrayRef> {
    let is_text = |t: &DataType| matches!(t, DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View);
    match col.data_type() {
        DataType::Dictionary(_, values) if is_text(values) => Ok(cast(col, &DataType::Utf8)?),
        DataType::Utf8View => Ok(cast(col, &DataType::Utf8)?),
        _ => Ok(Arc::clone(col)),
    }
}

/// Read one Arrow cell.  Unsupported column types are kept as
/// [`Cell::Unsupported`] so the row validation rejects them.
fn arrow_cell(col: &ArrayRef, row: usize) -> Cell<'_> {
    if col.is_null(row) {
        return Cell::Null;
    }
    match col.data_type() {
        DataType::Utf8 => Cell::Text(col.as_string::<i32>().value(row)),
        DataType::LargeUtf8 => Cell::Text(col.as_string::<i64>().value(row)),
        DataType::Date32 => {
            let days = col.as_primitive::<Date32Type>().value(row);
            NaiveDate::from_num_days_from_ce_opt(days + UNIX_EPOCH_DAYS_FROM_CE)
                .map(Cell::Date)
                .unwrap_or(Cell::Null)
        }
        DataType::Int32 => Cell::Number(col.as_primitive::<Int32Type>().value(row) as f64),
        DataType::Int64 => Cell::Number(col.as_primitive::<Int64Type>().value(row) as f64),
        DataType::Float32 => Cell::Number(col.as_primitive::<Float32Type>().value(row) as f64),
        DataType::Float64 => Cell::Number(col.as_primitive::<Float64Type>().value(row)),
        other => Cell::Unsupported(other),
    }
}

// ---------------------------------------------------------------------------
// Case rows
// ---------------------------------------------------------------------------

/// Case row as exported by the data source.  Every column may arrive as a
/// string or a number, so all of them are read as text first.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCase {
    #[serde(deserialize_with = "text")]
    case_no: String,
    #[serde(deserialize_with = "text")]
    confirmation_date: String,
    #[serde(deserialize_with = "text")]
    gender: String,
    #[serde(deserialize_with = "text")]
    age: String,
    #[serde(deserialize_with = "text")]
    enabled: String,
    #[serde(deserialize_with = "text")]
    type_zh: String,
    #[serde(deserialize_with = "text")]
    type_en: String,
    #[serde(deserialize_with = "text")]
    status_zh: String,
    #[serde(deserialize_with = "text")]
    status_en: String,
    #[serde(deserialize_with = "text")]
    hospital_zh: String,
    #[serde(deserialize_with = "text")]
    hospital_en: String,
    #[serde(deserialize_with = "text")]
    citizenship_zh: String,
    #[serde(deserialize_with = "text")]
    citizenship_en: String,
    #[serde(deserialize_with = "text")]
    detail_zh: String,
    #[serde(deserialize_with = "text")]
    detail_en: String,
    #[serde(deserialize_with = "text")]
    source_url: String,
}

impl RawCase {
    fn into_case(self, row: usize) -> Result<WarsCase, RecordError> {
        let case_no = self.case_no.trim();
        if case_no.is_empty() {
            return Err(RecordError::MissingField {
                row,
                field: "case_no",
            });
        }
        let case_no = case_no
            .parse::<u32>()
            .map_err(|_| RecordError::InvalidValue {
                row,
                field: "case_no".into(),
                value: self.case_no.clone(),
            })?;

        let age = match self.age.trim() {
            "" => None,
            s => Some(s.parse::<u32>().map_err(|_| RecordError::InvalidValue {
                row,
                field: "age".into(),
                value: self.age.clone(),
            })?),
        };

        let confirmation_date = match self.confirmation_date.trim() {
            "" => None,
            s => Some(NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
                RecordError::InvalidValue {
                    row,
                    field: "confirmation_date".into(),
                    value: self.confirmation_date.clone(),
                }
            })?),
        };

        Ok(WarsCase {
            case_no,
            confirmation_date,
            gender: Gender::from_code(&self.gender),
            age,
            enabled: self.enabled.trim() == "Y",
            case_type: Localized::new(self.type_zh, self.type_en),
            status: Localized::new(self.status_zh, self.status_en),
            hospital: Localized::new(self.hospital_zh, self.hospital_en),
            citizenship: Localized::new(self.citizenship_zh, self.citizenship_en),
            detail: Localized::new(self.detail_zh, self.detail_en),
            source_url: self.source_url,
        })
    }
}

fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string, number or null")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(TextVisitor)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use arrow::array::{BooleanArray, Date32Array, DictionaryArray, Int64Array, StringArray};
    use arrow::datatypes::{Field, Schema};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;
    use tempfile::TempDir;

    use super::*;
    use crate::data::model::{Direction, Source};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_immd_json_numbers_and_strings() -> Result<()> {
        let records = parse_immd_json(
            r#"[
                {"date": "2020-02-01", "location": "Airport", "arrival_mainland": 120, "arrival_total": "1,500"},
                {"date": "2020-02-02", "location": "Airport", "arrival_mainland": "", "note": "x"}
            ]"#,
        )?;
        assert_eq!(records.len(), 2);
        let am = Category::new(Direction::Arrival, Source::Mainland);
        let at = Category::new(Direction::Arrival, Source::Total);
        assert_eq!(records[0].date, date("2020-02-01"));
        assert_eq!(records[0].value(am), Some(120.0));
        assert_eq!(records[0].value(at), Some(1500.0));
        assert_eq!(records[1].value(am), None);
        assert!(records[1].counts.is_empty());
        Ok(())
    }

    #[test]
    fn test_immd_json_missing_location_fails_fast() {
        let err = parse_immd_json(
            r#"[
                {"date": "2020-02-01", "location": "Airport"},
                {"date": "2020-02-01", "arrival_mainland": 3}
            ]"#,
        )
        .unwrap_err();
        assert_eq!(
            err.downcast_ref::<RecordError>(),
            Some(&RecordError::MissingField {
                row: 1,
                field: "location"
            })
        );
    }

    #[test]
    fn test_immd_json_bad_date() {
        let err = parse_immd_json(r#"[{"date": "01/02/2020", "location": "Airport"}]"#).unwrap_err();
        assert_eq!(
            err.downcast_ref::<RecordError>(),
            Some(&RecordError::InvalidValue {
                row: 0,
                field: "date".into(),
                value: "01/02/2020".into(),
            })
        );
    }

    #[test]
    fn test_immd_csv() -> Result<()> {
        let data = "date,location,departure_hong_kong,departure_other\n\
                    2020-02-01,Lo Wu,10,\n\
                    2020-02-01,Airport,20,5\n";
        let records = read_immd_csv(csv::Reader::from_reader(data.as_bytes()))?;
        let dhk = Category::new(Direction::Departure, Source::HongKong);
        let dot = Category::new(Direction::Departure, Source::Other);
        assert_eq!(records[0].location, "Lo Wu");
        assert_eq!(records[0].value(dhk), Some(10.0));
        assert_eq!(records[0].value(dot), None);
        assert_eq!(records[1].value(dot), Some(5.0));
        Ok(())
    }

    #[test]
    fn test_immd_csv_missing_date() {
        let data = "date,location,arrival_total\n,Airport,1\n";
        let err = read_immd_csv(csv::Reader::from_reader(data.as_bytes())).unwrap_err();
        assert_eq!(
            err.downcast_ref::<RecordError>(),
            Some(&RecordError::MissingField { row: 0, field: "date" })
        );
    }

    #[test]
    fn test_immd_csv_non_numeric_count() {
        let data = "date,location,arrival_total\n2020-02-01,Airport,lots\n";
        let err = read_immd_csv(csv::Reader::from_reader(data.as_bytes())).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RecordError>(),
            Some(RecordError::InvalidValue { row: 0, .. })
        ));
    }

    #[test]
    fn test_immd_parquet_round_trip() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("immd.parquet");

        let schema = Arc::new(Schema::new(vec![
            Field::new("date", DataType::Date32, false),
            Field::new("location", DataType::Utf8, false),
            Field::new("arrival_total", DataType::Int64, true),
        ]));
        // 2020-02-01 is 18293 days after the epoch.
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(Date32Array::from(vec![18293, 18294])),
                Arc::new(StringArray::from(vec!["Airport", "Airport"])),
                Arc::new(Int64Array::from(vec![Some(7), None])),
            ],
        )?;
        let file = std::fs::File::create(&path)?;
        let mut writer = ArrowWriter::try_new(file, schema, None)?;
        writer.write(&batch)?;
        writer.close()?;

        let records = load_immd_file(&path)?;
        let at = Category::new(Direction::Arrival, Source::Total);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, date("2020-02-01"));
        assert_eq!(records[1].date, date("2020-02-02"));
        assert_eq!(records[0].value(at), Some(7.0));
        assert_eq!(records[1].value(at), None);
        Ok(())
    }

    fn write_parquet(path: &Path, fields: Vec<Field>, columns: Vec<ArrayRef>) -> Result<()> {
        let schema = Arc::new(Schema::new(fields));
        let batch = RecordBatch::try_new(schema.clone(), columns)?;
        let file = std::fs::File::create(path)?;
        let mut writer = ArrowWriter::try_new(file, schema, None)?;
        writer.write(&batch)?;
        writer.close()?;
        Ok(())
    }

    #[test]
    fn test_immd_parquet_dictionary_location() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("immd.parquet");
        let locations: DictionaryArray<Int32Type> = vec!["Airport", "Lo Wu"].into_iter().collect();
        write_parquet(
            &path,
            vec![
                Field::new("date", DataType::Utf8, false),
                Field::new(
                    "location",
                    DataType::Dictionary(Box::new(DataType::Int32), Box::new(DataType::Utf8)),
                    false,
                ),
            ],
            vec![
                Arc::new(StringArray::from(vec!["2020-02-01", "2020-02-01"])),
                Arc::new(locations),
            ],
        )?;

        let records = load_immd_file(&path)?;
        let names: Vec<&str> = records.iter().map(|r| r.location.as_str()).collect();
        assert_eq!(names, vec!["Airport", "Lo Wu"]);
        Ok(())
    }

    #[test]
    fn test_immd_parquet_unreadable_location_type() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("immd.parquet");
        write_parquet(
            &path,
            vec![
                Field::new("date", DataType::Utf8, false),
                Field::new("location", DataType::Boolean, false),
            ],
            vec![
                Arc::new(StringArray::from(vec!["2020-02-01"])),
                Arc::new(BooleanArray::from(vec![true])),
            ],
        )?;

        let err = load_immd_file(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RecordError>(),
            Some(RecordError::InvalidValue { row: 0, field, .. }) if field == "location"
        ));
        Ok(())
    }

    #[test]
    fn test_immd_non_finite_count() {
        for bad in ["NaN", "inf", "-infinity"] {
            let data = format!("date,location,arrival_total\n2020-02-01,Airport,{bad}\n");
            let err = read_immd_csv(csv::Reader::from_reader(data.as_bytes())).unwrap_err();
            assert_eq!(
                err.downcast_ref::<RecordError>(),
                Some(&RecordError::InvalidValue {
                    row: 0,
                    field: "arrival_total".into(),
                    value: bad.into(),
                })
            );
        }
    }

    #[test]
    fn test_unsupported_extension() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write(&dir, "data.xml", "<x/>");
        assert!(load_immd_file(&path).is_err());
        assert!(load_case_file(&path).is_err());
        Ok(())
    }

    #[test]
    fn test_case_json_mixed_types() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write(
            &dir,
            "cases.json",
            r#"[
                {"case_no": "12", "confirmation_date": "2020-02-04", "gender": "F", "age": 62,
                 "enabled": "Y", "type_zh": "確診", "type_en": "Confirmed",
                 "citizenship_zh": "香港", "citizenship_en": "Hong Kong",
                 "source_url": "https://example.org/12"},
                {"case_no": 13, "gender": "M", "age": "", "enabled": "N", "hospital_en": null}
            ]"#,
        );
        let cases = load_case_file(&path)?;
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].case_no, 12);
        assert_eq!(cases[0].age, Some(62));
        assert_eq!(cases[0].confirmation_date, Some(date("2020-02-04")));
        assert!(cases[0].enabled);
        assert!(cases[0].is_confirmed());
        assert_eq!(cases[1].case_no, 13);
        assert_eq!(cases[1].age, None);
        assert_eq!(cases[1].gender, Gender::Male);
        assert!(!cases[1].enabled);
        Ok(())
    }

    #[test]
    fn test_case_csv() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write(
            &dir,
            "cases.csv",
            "case_no,gender,age,enabled,type_en\n1,M,39,Y,Confirmed\n2,F,,Y,Confirmed\n",
        );
        let cases = load_case_file(&path)?;
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].age, Some(39));
        assert_eq!(cases[1].age, None);
        Ok(())
    }

    #[test]
    fn test_case_missing_number() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write(&dir, "cases.json", r#"[{"case_no": 1}, {"gender": "F"}]"#);
        let err = load_case_file(&path).unwrap_err();
        assert_eq!(
            err.downcast_ref::<RecordError>(),
            Some(&RecordError::MissingField {
                row: 1,
                field: "case_no"
            })
        );
        Ok(())
    }
}
