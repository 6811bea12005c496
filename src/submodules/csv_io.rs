//! CSV read/write helpers with header-driven column naming and optional
//! per-column type coercion.

use std::collections::{BTreeMap, HashMap};
use std::fs::{self, OpenOptions};
use std::io;
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use log::warn;
use serde::Serialize;
use thiserror::Error;

use crate::submodules::func_lib::round_to;
use crate::submodules::type_lib::NumericData;

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("csv error on {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },
    #[error("i/o error on {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("row contains field {field:?} not listed in fieldnames {fieldnames:?}")]
    UnexpectedField { field: String, fieldnames: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CsvValue {
    Number(NumericData),
    Text(String),
}

impl CsvValue {
    pub fn as_number(&self) -> Option<NumericData> {
        match self {
            CsvValue::Number(v) => Some(*v),
            CsvValue::Text(_) => None,
        }
    }
}

pub type Row = BTreeMap<String, CsvValue>;

pub type Converter = fn(&str) -> Result<CsvValue, ParseFloatError>;

/// Stock converter: parse the cell as a float.
pub fn to_number(raw: &str) -> Result<CsvValue, ParseFloatError> {
    raw.trim().parse::<NumericData>().map(CsvValue::Number)
}

pub enum FieldConversion<'a> {
    /// Keep every cell as its original string.
    Raw,
    /// Apply one converter to every column.
    All(Converter),
    /// Apply converters to the named columns only.
    PerColumn(&'a HashMap<String, Converter>),
}

/// Reads a CSV file into header-keyed rows. A failed conversion keeps the
/// original string value and logs a warning rather than aborting the read.
pub fn read_csv(path: &Path, conversion: &FieldConversion) -> Result<Vec<Row>, CsvError> {
    let csv_err = |source| CsvError::Csv { path: path.to_path_buf(), source };
    let mut reader = csv::Reader::from_path(path).map_err(csv_err)?;
    let headers = reader.headers().map_err(csv_err)?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        let mut row = Row::new();
        for (name, raw) in headers.iter().zip(record.iter()) {
            let converter = match conversion {
                FieldConversion::Raw => None,
                FieldConversion::All(f) => Some(f),
                FieldConversion::PerColumn(map) => map.get(name),
            };
            let value = match converter {
                Some(f) => f(raw).unwrap_or_else(|_| {
                    warn!(
                        "could not convert {:?} in column {:?} of {}; keeping the string",
                        raw,
                        name,
                        path.display()
                    );
                    CsvValue::Text(raw.to_string())
                }),
                None => CsvValue::Text(raw.to_string()),
            };
            row.insert(name.to_string(), value);
        }
        rows.push(row);
    }
    Ok(rows)
}

pub struct WriteOpts {
    pub append: bool,
    pub round_digits: Option<i32>,
    pub ignore_extra_fields: bool,
}

impl Default for WriteOpts {
    fn default() -> Self {
        WriteOpts { append: false, round_digits: None, ignore_extra_fields: false }
    }
}

/// Writes rows under the given fieldnames, in that column order. Fields absent
/// from a row are written empty; fields present in a row but missing from
/// `fieldnames` are an error unless `ignore_extra_fields` is set.
pub fn write_csv(rows: &[Row], path: &Path, fieldnames: &[&str], opts: &WriteOpts) -> Result<(), CsvError> {
    let csv_err = |source| CsvError::Csv { path: path.to_path_buf(), source };
    let io_err = |source| CsvError::Io { path: path.to_path_buf(), source };

    let write_header = !opts.append
        || fs::metadata(path).map(|meta| meta.len() == 0).unwrap_or(true);

    let mut open_opts = OpenOptions::new();
    open_opts.create(true).write(true);
    if opts.append {
        open_opts.append(true);
    } else {
        open_opts.truncate(true);
    }
    let file = open_opts.open(path).map_err(io_err)?;
    let mut writer = csv::Writer::from_writer(file);

    if write_header {
        writer.write_record(fieldnames).map_err(csv_err)?;
    }
    for row in rows {
        if !opts.ignore_extra_fields {
            for field in row.keys() {
                if !fieldnames.contains(&field.as_str()) {
                    return Err(CsvError::UnexpectedField {
                        field: field.clone(),
                        fieldnames: fieldnames.iter().map(|f| f.to_string()).collect(),
                    });
                }
            }
        }
        let record: Vec<CsvValue> = fieldnames
            .iter()
            .map(|name| match row.get(*name) {
                Some(CsvValue::Number(v)) => match opts.round_digits {
                    Some(digits) => CsvValue::Number(round_to(*v, digits)),
                    None => CsvValue::Number(*v),
                },
                Some(text) => text.clone(),
                None => CsvValue::Text(String::new()),
            })
            .collect();
        writer.serialize(record).map_err(csv_err)?;
    }
    writer.flush().map_err(io_err)
}

/// Removes a file, treating "already gone" as success.
pub fn silent_remove(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use tempfile::tempdir;

    use super::*;

    fn sample_rows() -> Vec<Row> {
        let mut row1 = Row::new();
        row1.insert("species".to_string(), CsvValue::Text("A".to_string()));
        row1.insert("conc".to_string(), CsvValue::Number(0.2));
        let mut row2 = Row::new();
        row2.insert("species".to_string(), CsvValue::Text("B".to_string()));
        row2.insert("conc".to_string(), CsvValue::Number(0.0125));
        vec![row1, row2]
    }

    #[test]
    fn round_trip_preserves_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("species.csv");
        write_csv(&sample_rows(), &path, &["species", "conc"], &WriteOpts::default()).unwrap();

        let mut converters: HashMap<String, Converter> = HashMap::new();
        converters.insert("conc".to_string(), to_number);
        let rows = read_csv(&path, &FieldConversion::PerColumn(&converters)).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["species"], CsvValue::Text("A".to_string()));
        assert_relative_eq!(rows[0]["conc"].as_number().unwrap(), 0.2);
        assert_relative_eq!(rows[1]["conc"].as_number().unwrap(), 0.0125);
    }

    #[test]
    fn failed_conversion_keeps_string() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mixed.csv");
        fs::write(&path, "name,value\nalpha,0.015\nbeta,n/a\n").unwrap();

        let rows = read_csv(&path, &FieldConversion::All(to_number)).unwrap();
        assert_relative_eq!(rows[0]["value"].as_number().unwrap(), 0.015);
        assert_eq!(rows[1]["value"], CsvValue::Text("n/a".to_string()));
        // the name column also fails to parse and stays text
        assert_eq!(rows[0]["name"], CsvValue::Text("alpha".to_string()));
    }

    #[test]
    fn append_mode_skips_duplicate_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("appended.csv");
        let fieldnames = ["species", "conc"];
        write_csv(&sample_rows()[..1], &path, &fieldnames, &WriteOpts::default()).unwrap();
        let append = WriteOpts { append: true, ..WriteOpts::default() };
        write_csv(&sample_rows()[1..], &path, &fieldnames, &append).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("species,conc").count(), 1);
        let rows = read_csv(&path, &FieldConversion::Raw).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn unexpected_field_is_an_error_unless_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("extras.csv");
        let mut rows = sample_rows();
        rows[0].insert("stray".to_string(), CsvValue::Number(1.0));

        let err = write_csv(&rows, &path, &["species", "conc"], &WriteOpts::default()).unwrap_err();
        assert!(matches!(err, CsvError::UnexpectedField { ref field, .. } if field == "stray"));

        let ignore = WriteOpts { ignore_extra_fields: true, ..WriteOpts::default() };
        write_csv(&rows, &path, &["species", "conc"], &ignore).unwrap();
        let read_back = read_csv(&path, &FieldConversion::Raw).unwrap();
        assert_eq!(read_back.len(), 2);
        assert!(!read_back[0].contains_key("stray"));
    }

    #[test]
    fn rounding_applies_to_numbers_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rounded.csv");
        let mut row = Row::new();
        row.insert("w".to_string(), CsvValue::Number(0.123456789));
        row.insert("tag".to_string(), CsvValue::Text("raw".to_string()));
        let opts = WriteOpts { round_digits: Some(4), ..WriteOpts::default() };
        write_csv(&[row], &path, &["w", "tag"], &opts).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("0.1235"));
        assert!(contents.contains("raw"));
    }

    #[test]
    fn silent_remove_swallows_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ghost.csv");
        silent_remove(&path).unwrap();

        fs::write(&path, "a,b\n1,2\n").unwrap();
        silent_remove(&path).unwrap();
        assert!(!path.exists());
    }
}
