//! Per-period place shares for the weekday and month pie grids

use crate::model::Visit;
use std::collections::HashMap;
use std::ops::RangeInclusive;

/// Slices summing below this many percent get an "Other" remainder
const FULL_PIE: f64 = 100.0 - 1e-9;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SliceLabel {
    Place(String),
    Other,
}

impl std::fmt::Display for SliceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SliceLabel::Place(name) => write!(f, "{}", name),
            SliceLabel::Other => write!(f, "Other"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: SliceLabel,
    pub percentage: f64,
}

/// Shares of one weekday or month
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodShares {
    /// Weekday index (0 = Monday) or month number (1 = January)
    pub period: u32,
    pub visits: usize,
    /// Non-zero slices in ranking order, "Other" last
    pub slices: Vec<Slice>,
}

impl PeriodShares {
    pub fn is_empty(&self) -> bool {
        self.visits == 0
    }

    pub fn has_other(&self) -> bool {
        self.slices.iter().any(|s| s.label == SliceLabel::Other)
    }

    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.percentage).sum()
    }

    pub fn percentage_of(&self, place: &str) -> f64 {
        self.slices
            .iter()
            .find(|s| matches!(&s.label, SliceLabel::Place(p) if p == place))
            .map(|s| s.percentage)
            .unwrap_or(0.0)
    }
}

/// Compute the share of each top place within every period
///
/// Percentages are relative to the visits of the period, not of the whole
/// table. A top place missing from a period counts as 0% and is left out of
/// the slices. Periods without visits have no slices at all.
pub fn period_shares<P, K>(visits: &[Visit], top: &[String], periods: P, key: K) -> Vec<PeriodShares>
where
    P: IntoIterator<Item = u32>,
    K: Fn(&Visit) -> u32,
{
    let mut counts: HashMap<(u32, &str), usize> = HashMap::new();
    let mut totals: HashMap<u32, usize> = HashMap::new();
    for visit in visits {
        let period = key(visit);
        *counts.entry((period, visit.place.as_str())).or_insert(0) += 1;
        *totals.entry(period).or_insert(0) += 1;
    }

    periods
        .into_iter()
        .map(|period| {
            let total = totals.get(&period).copied().unwrap_or(0);
            let mut slices = Vec::new();

            if total > 0 {
                for place in top {
                    let count = counts.get(&(period, place.as_str())).copied().unwrap_or(0);
                    let percentage = count as f64 / total as f64 * 100.0;
                    if percentage > 0.0 {
                        slices.push(Slice {
                            label: SliceLabel::Place(place.clone()),
                            percentage,
                        });
                    }
                }

                let sum: f64 = slices.iter().map(|s| s.percentage).sum();
                if sum < FULL_PIE {
                    slices.push(Slice {
                        label: SliceLabel::Other,
                        percentage: 100.0 - sum,
                    });
                }
            }

            PeriodShares {
                period,
                visits: total,
                slices,
            }
        })
        .collect()
}

/// Shares for Monday through Friday
pub fn shares_by_weekday(visits: &[Visit], top: &[String]) -> Vec<PeriodShares> {
    period_shares(visits, top, 0..5, |v| v.weekday)
}

/// Smallest to largest month number present, gaps included
pub fn month_range(visits: &[Visit]) -> Option<RangeInclusive<u32>> {
    let min = visits.iter().map(|v| v.month).min()?;
    let max = visits.iter().map(|v| v.month).max()?;
    Some(min..=max)
}

pub fn shares_by_month(visits: &[Visit], top: &[String]) -> Vec<PeriodShares> {
    match month_range(visits) {
        Some(range) => period_shares(visits, top, range, |v| v.month),
        None => Vec::new(),
    }
}

/// Legend entries for a pie grid: top places drawn in at least one pie,
/// followed by "Other" if any pie has an "Other" slice
pub fn legend_labels(shares: &[PeriodShares], top: &[String]) -> Vec<SliceLabel> {
    let mut labels: Vec<SliceLabel> = top
        .iter()
        .filter(|place| shares.iter().any(|s| s.percentage_of(place) > 0.0))
        .map(|place| SliceLabel::Place(place.clone()))
        .collect();

    if shares.iter().any(PeriodShares::has_other) {
        labels.push(SliceLabel::Other);
    }
    labels
}
