use crate::model::Visit;
use std::collections::HashMap;

/// Visit count of one place
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceCount {
    pub place: String,
    pub count: usize,
    /// Share of all visits, 0..=100
    pub percentage: f64,
}

/// Count visits per place, most visited first, ties by name
pub fn rank_places(visits: &[Visit]) -> Vec<PlaceCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for visit in visits {
        *counts.entry(visit.place.as_str()).or_insert(0) += 1;
    }

    let total = visits.len() as f64;
    let mut ranking: Vec<PlaceCount> = counts
        .into_iter()
        .map(|(place, count)| PlaceCount {
            place: place.to_string(),
            count,
            percentage: count as f64 / total * 100.0,
        })
        .collect();

    ranking.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.place.cmp(&b.place)));
    ranking
}

/// Names of the first `n` ranked places
pub fn top_places(ranking: &[PlaceCount], n: usize) -> Vec<String> {
    ranking.iter().take(n).map(|p| p.place.clone()).collect()
}
