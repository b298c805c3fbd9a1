use chrono::NaiveDate;

use super::record::TransactionRecord;

/// A retained lunch visit with its derived calendar fields
#[derive(Debug, Clone, PartialEq)]
pub struct Visit {
    pub date: NaiveDate,
    pub place: String,
    /// 1..=12
    pub month: u32,
    /// 0 = Monday .. 6 = Sunday
    pub weekday: u32,
}

impl From<&TransactionRecord> for Visit {
    fn from(record: &TransactionRecord) -> Self {
        Visit {
            date: record.timestamp.date(),
            place: record.place.clone(),
            month: record.month(),
            weekday: record.weekday(),
        }
    }
}
