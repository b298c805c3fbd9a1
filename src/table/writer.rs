use crate::error::{Result, StatsError};
use crate::model::TransactionTable;
use csv::{QuoteStyle, WriterBuilder};
use std::path::Path;

/// Serialize a table as CSV with every field quoted
///
/// The timestamp column is rewritten from the parsed value: date only when
/// every row is at midnight, full date-time otherwise.
pub fn table_to_quoted_csv(table: &TransactionTable) -> Result<Vec<u8>> {
    let date_only = table.records().iter().all(|r| r.is_midnight());
    let timestamp_format = if date_only {
        "%Y-%m-%d"
    } else {
        "%Y-%m-%d %H:%M:%S"
    };

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());
    writer.write_record(table.headers())?;

    for record in table.records() {
        let mut fields = record.fields.clone();
        if let Some(key) = fields.first_mut() {
            *key = record.timestamp.format(timestamp_format).to_string();
        }
        if let Some(place) = fields.get_mut(table.place_column()) {
            *place = record.place.clone();
        }
        writer.write_record(&fields)?;
    }

    writer
        .into_inner()
        .map_err(|e| StatsError::Io(e.into_error()))
}

/// Write `contents` to `path`, creating parent directories first
pub fn write_output(path: &Path, contents: &[u8]) -> Result<()> {
    let to_output_error = |source| StatsError::OutputPath {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(to_output_error)?;
        }
    }
    std::fs::write(path, contents).map_err(to_output_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::read_table;

    #[test]
    fn test_quoted_output_date_only() {
        let csv = "Date,Benefit type,Toimipiste,Amount\n2024-03-04,(Lounas),Cafe,10.70\n";
        let mut table = read_table(csv.as_bytes()).unwrap();
        table.records_mut()[0].place = "Lunch place A".to_string();

        let out = String::from_utf8(table_to_quoted_csv(&table).unwrap()).unwrap();
        assert_eq!(
            out,
            "\"Date\",\"Benefit type\",\"Toimipiste\",\"Amount\"\n\
             \"2024-03-04\",\"(Lounas)\",\"Lunch place A\",\"10.70\"\n"
        );
    }

    #[test]
    fn test_quoted_output_with_times() {
        let csv = "Date,Benefit type,Toimipiste\n2024-03-04,(Lounas),Cafe\n2024-03-05 11:30,(Lounas),Bistro\n";
        let table = read_table(csv.as_bytes()).unwrap();
        let out = String::from_utf8(table_to_quoted_csv(&table).unwrap()).unwrap();
        assert!(out.contains("\"2024-03-04 00:00:00\""));
        assert!(out.contains("\"2024-03-05 11:30:00\""));
    }

    #[test]
    fn test_write_output_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.csv");
        write_output(&path, b"hello").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
    }

    #[test]
    fn test_write_output_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();
        // A regular file cannot act as a parent directory
        let err = write_output(&blocker.join("out.csv"), b"hello").unwrap_err();
        assert!(matches!(err, StatsError::OutputPath { .. }));
    }
}
