//! Row filters applied between loading and analysis
//!
//! Step order matters: the benefit type filter runs first, duplicates are
//! dropped after place names are normalized and before the weekday filter,
//! so the retained "first" duplicate may be a weekend row that is then
//! discarded.

use crate::config::AnalysisConfig;
use crate::model::{TransactionTable, Visit};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref DIGITS: Regex = Regex::new(r"[0-9]").unwrap();
}

/// Strip digits and surrounding whitespace from a place name
pub fn normalize_place(name: &str) -> String {
    DIGITS.replace_all(name, "").trim().to_string()
}

/// Keep rows whose benefit type equals `marker`
pub fn filter_lunch(table: &mut TransactionTable, marker: &str) {
    table.retain(|r| r.benefit_type == marker);
}

pub fn normalize_places(table: &mut TransactionTable) {
    for record in table.records_mut() {
        record.place = normalize_place(&record.place);
    }
}

/// Drop rows whose timestamp was already seen, keeping the first one
pub fn drop_duplicate_timestamps(table: &mut TransactionTable) {
    let before = table.len();
    let mut seen = HashSet::new();
    table.retain(|r| seen.insert(r.timestamp));

    let dropped = before - table.len();
    if dropped > 0 {
        log::debug!("Dropped {} rows with duplicate timestamps", dropped);
    }
}

/// Keep Monday to Friday rows
pub fn filter_weekdays(table: &mut TransactionTable) {
    table.retain(|r| r.is_weekday());
}

/// Full analyzer preprocessing, returning the augmented visits
pub fn prepare_visits(mut table: TransactionTable, config: &AnalysisConfig) -> Vec<Visit> {
    filter_lunch(&mut table, &config.lunch_marker);
    normalize_places(&mut table);
    drop_duplicate_timestamps(&mut table);
    filter_weekdays(&mut table);

    table.records().iter().map(Visit::from).collect()
}

/// Anonymizer preprocessing: lunch rows on weekdays, place names untouched
pub fn prepare_for_anonymization(table: &mut TransactionTable, marker: &str) {
    filter_lunch(table, marker);
    filter_weekdays(table);
}
