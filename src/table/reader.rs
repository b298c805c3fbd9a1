use crate::error::{Result, StatsError};
use crate::model::{TransactionRecord, TransactionTable, BENEFIT_TYPE_COLUMN, PLACE_COLUMN};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::Path;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
];

/// Offset-aware forms; the local wall-clock time is kept
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"];

/// Parse a row key timestamp, accepting date-only values as midnight
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .or_else(|| {
                    OFFSET_FORMATS
                        .iter()
                        .find_map(|fmt| DateTime::parse_from_str(value, fmt).ok())
                })
                .map(|ts| ts.naive_local())
        })
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Read a transaction table from a CSV file
pub fn read_table_file(path: &Path) -> Result<TransactionTable> {
    if !path.exists() {
        return Err(StatsError::InputNotFound(path.to_path_buf()));
    }
    let file = std::fs::File::open(path)?;
    read_table(file)
}

/// Read a transaction table from CSV data
///
/// The first column is the row key and must hold a timestamp; the
/// benefit type and place columns are located by header name.
pub fn read_table<R: Read>(input: R) -> Result<TransactionTable> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);
    let headers = reader.headers()?.clone();

    if headers.is_empty() {
        return Err(StatsError::DataFormat("CSV has no header row".to_string()));
    }

    let benefit_column = find_column(&headers, BENEFIT_TYPE_COLUMN)?;
    let place_column = find_column(&headers, PLACE_COLUMN)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let key = row.get(0).unwrap_or("");
        let timestamp = parse_timestamp(key).ok_or_else(|| StatsError::InvalidDate {
            line,
            value: key.to_string(),
        })?;

        records.push(TransactionRecord {
            timestamp,
            benefit_type: row.get(benefit_column).unwrap_or("").to_string(),
            place: row.get(place_column).unwrap_or("").to_string(),
            fields: row.iter().map(String::from).collect(),
        });
    }

    log::debug!("Read {} transaction rows", records.len());

    Ok(TransactionTable::new(
        headers.iter().map(String::from).collect(),
        place_column,
        records,
    ))
}

fn find_column(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| StatsError::MissingColumn(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use std::io::Write;

    const SAMPLE_CSV: &str = "\
Date,Benefit type,Toimipiste,Amount
2024-03-04 11:32:00,(Lounas),Cafe 12,10.70
2024-03-05,(Lounas),Bistro3,11.20
2024-03-06 12:00:00,(Virike),Gym,20.00
";

    #[test]
    fn test_parse_timestamp_formats() {
        let ts = parse_timestamp("2024-03-04 11:32:00").unwrap();
        assert_eq!(ts.hour(), 11);
        assert_eq!(ts.minute(), 32);

        let ts = parse_timestamp("2024-03-04").unwrap();
        assert_eq!(ts.hour(), 0);

        let ts = parse_timestamp("04.03.2024 12:15").unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());

        let ts = parse_timestamp("2024-03-04 11:32:00.250").unwrap();
        assert_eq!(ts.minute(), 32);
        assert_eq!(ts.nanosecond(), 250_000_000);

        let ts = parse_timestamp("2024/03/04").unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());

        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_parse_timestamp_with_offset_keeps_local_time() {
        for value in ["2024-03-04T11:32:00+02:00", "2024-03-04 11:32:00+02:00"] {
            let ts = parse_timestamp(value).unwrap();
            assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
            assert_eq!(ts.hour(), 11);
            assert_eq!(ts.minute(), 32);
        }
    }

    #[test]
    fn test_read_table() {
        let table = read_table(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.place_column(), 2);
        assert_eq!(table.headers().len(), 4);

        let first = &table.records()[0];
        assert_eq!(first.benefit_type, "(Lounas)");
        assert_eq!(first.place, "Cafe 12");
        assert_eq!(first.fields[3], "10.70");
    }

    #[test]
    fn test_missing_column() {
        let csv = "Date,Benefit type,Place\n2024-03-04,(Lounas),Cafe\n";
        let err = read_table(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, StatsError::MissingColumn(ref c) if c == "Toimipiste"));
        assert!(err.is_data_format());
    }

    #[test]
    fn test_invalid_date() {
        let csv = "Date,Benefit type,Toimipiste\n2024-03-04,(Lounas),Cafe\nnot a date,(Lounas),Cafe\n";
        let err = read_table(csv.as_bytes()).unwrap_err();
        match err {
            StatsError::InvalidDate { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "not a date");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_header_only_table_is_empty() {
        let table = read_table("Date,Benefit type,Toimipiste\n".as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_read_table_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();
        let table = read_table_file(file.path()).unwrap();
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_table_file(&dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, StatsError::InputNotFound(_)));
        assert!(!err.is_data_format());
    }
}
