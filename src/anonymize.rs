//! Replace place names with synthetic labels before sharing data

use crate::model::TransactionTable;
use crate::table::prepare_for_anonymization;
use std::collections::HashMap;

/// Letters available for synthetic labels; places beyond these are dropped
pub const LABEL_LETTERS: &str = "ABCDEFGHIJKL";

/// Maps raw place names to "Lunch place X" labels in first-seen order
#[derive(Debug, Default)]
pub struct PlaceAnonymizer {
    labels: HashMap<String, String>,
    unmapped: Vec<String>,
}

impl PlaceAnonymizer {
    pub fn from_places<'a, I>(places: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut anonymizer = PlaceAnonymizer::default();
        let mut letters = LABEL_LETTERS.chars();

        for place in places {
            let seen = anonymizer.labels.contains_key(place)
                || anonymizer.unmapped.iter().any(|p| p == place);
            if seen {
                continue;
            }
            match letters.next() {
                Some(letter) => {
                    anonymizer
                        .labels
                        .insert(place.to_string(), format!("Lunch place {}", letter));
                }
                None => anonymizer.unmapped.push(place.to_string()),
            }
        }

        anonymizer
    }

    pub fn label(&self, place: &str) -> Option<&str> {
        self.labels.get(place).map(String::as_str)
    }

    pub fn mapped_count(&self) -> usize {
        self.labels.len()
    }

    /// Places that appeared after every label was taken
    pub fn unmapped(&self) -> &[String] {
        &self.unmapped
    }
}

/// Counts reported after anonymizing a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnonymizeSummary {
    pub kept_rows: usize,
    pub dropped_rows: usize,
    pub mapped_places: usize,
    pub dropped_places: usize,
}

/// Filter to weekday lunch rows, relabel places and drop unmapped rows
pub fn anonymize_table(table: &mut TransactionTable, lunch_marker: &str) -> AnonymizeSummary {
    prepare_for_anonymization(table, lunch_marker);
    let anonymizer = PlaceAnonymizer::from_places(table.distinct_places());

    let before = table.len();
    table.retain(|r| anonymizer.label(&r.place).is_some());
    for record in table.records_mut() {
        if let Some(label) = anonymizer.label(&record.place) {
            record.place = label.to_string();
        }
    }

    for place in anonymizer.unmapped() {
        log::debug!("No label left for place {:?}, dropping its rows", place);
    }

    AnonymizeSummary {
        kept_rows: table.len(),
        dropped_rows: before - table.len(),
        mapped_places: anonymizer.mapped_count(),
        dropped_places: anonymizer.unmapped().len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{read_table, table_to_quoted_csv};

    #[test]
    fn test_labels_in_first_seen_order() {
        let anonymizer =
            PlaceAnonymizer::from_places(["Cafeteria12", "Bistro3", "Cafeteria12", "Canteen"]);
        assert_eq!(anonymizer.label("Cafeteria12"), Some("Lunch place A"));
        assert_eq!(anonymizer.label("Bistro3"), Some("Lunch place B"));
        assert_eq!(anonymizer.label("Canteen"), Some("Lunch place C"));
        assert_eq!(anonymizer.label("Cafeteria"), None);
        assert_eq!(anonymizer.mapped_count(), 3);
    }

    #[test]
    fn test_thirteenth_place_is_unmapped() {
        let names: Vec<String> = (1..=13).map(|i| format!("Place {}", i)).collect();
        let anonymizer = PlaceAnonymizer::from_places(names.iter().map(String::as_str));
        assert_eq!(anonymizer.mapped_count(), 12);
        assert_eq!(anonymizer.label("Place 12"), Some("Lunch place L"));
        assert_eq!(anonymizer.label("Place 13"), None);
        assert_eq!(anonymizer.unmapped(), &["Place 13".to_string()]);
    }

    #[test]
    fn test_anonymize_table() {
        // 2024-03-04 is a Monday
        let mut csv = String::from("Date,Benefit type,Toimipiste\n");
        for day in 0..13 {
            let date = 4 + (day % 5);
            csv.push_str(&format!("2024-03-{:02},(Lounas),Place{}\n", date, day));
        }
        csv.push_str("2024-03-04,(Lounas),Place0\n");
        csv.push_str("2024-03-09,(Lounas),Saturday Place\n");
        csv.push_str("2024-03-05,(Virike),Gym\n");

        let mut table = read_table(csv.as_bytes()).unwrap();
        let summary = anonymize_table(&mut table, "(Lounas)");

        assert_eq!(
            summary,
            AnonymizeSummary {
                kept_rows: 13,
                dropped_rows: 1,
                mapped_places: 12,
                dropped_places: 1,
            }
        );
        assert_eq!(table.records()[0].place, "Lunch place A");
        assert_eq!(table.records()[12].place, "Lunch place A");
        assert!(table.records().iter().all(|r| r.place.starts_with("Lunch place ")));

        let out = String::from_utf8(table_to_quoted_csv(&table).unwrap()).unwrap();
        assert!(out.starts_with("\"Date\",\"Benefit type\",\"Toimipiste\"\n"));
        assert!(!out.contains("Place12"));
        assert!(!out.contains("Saturday"));
    }
}
