use chrono::{Datelike, NaiveDateTime, Timelike};

/// Column holding the benefit type label
pub const BENEFIT_TYPE_COLUMN: &str = "Benefit type";

/// Column holding the merchant/place name
pub const PLACE_COLUMN: &str = "Toimipiste";

/// Benefit type value of a lunch transaction
pub const LUNCH_MARKER: &str = "(Lounas)";

/// A single benefit transaction row
///
/// `fields` keeps every raw column of the source row (the timestamp column
/// included) so a table can be written back with its original schema.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub timestamp: NaiveDateTime,
    pub benefit_type: String,
    pub place: String,
    pub fields: Vec<String>,
}

impl TransactionRecord {
    /// Weekday index, 0 = Monday .. 6 = Sunday
    pub fn weekday(&self) -> u32 {
        self.timestamp.weekday().num_days_from_monday()
    }

    pub fn month(&self) -> u32 {
        self.timestamp.month()
    }

    pub fn is_weekday(&self) -> bool {
        self.weekday() < 5
    }

    pub fn is_midnight(&self) -> bool {
        self.timestamp.num_seconds_from_midnight() == 0
    }
}

/// Transactions in file order, with the header row they were read with
#[derive(Debug, Clone)]
pub struct TransactionTable {
    headers: Vec<String>,
    place_column: usize,
    records: Vec<TransactionRecord>,
}

impl TransactionTable {
    pub fn new(
        headers: Vec<String>,
        place_column: usize,
        records: Vec<TransactionRecord>,
    ) -> Self {
        Self {
            headers,
            place_column,
            records,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn place_column(&self) -> usize {
        self.place_column
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [TransactionRecord] {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keep only the records matching `keep`, preserving order
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&TransactionRecord) -> bool,
    {
        self.records.retain(keep);
    }

    /// Distinct place names in order of first appearance
    pub fn distinct_places(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.records
            .iter()
            .map(|r| r.place.as_str())
            .filter(|place| seen.insert(*place))
            .collect()
    }
}
