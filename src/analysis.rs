use crate::chart::palette::ColorMap;
use crate::config::{AnalysisConfig, MAX_TOP_N};
use crate::model::{TransactionTable, Visit};
use crate::stats::{
    legend_labels, rank_places, shares_by_month, shares_by_weekday, top_places, PeriodShares,
    PlaceCount, SliceLabel,
};
use crate::table::prepare_visits;

/// Everything the figure needs, computed before any drawing starts
#[derive(Debug, Clone)]
pub struct LunchStatistics {
    pub visits: Vec<Visit>,
    pub ranking: Vec<PlaceCount>,
    pub top: Vec<String>,
    pub colors: ColorMap,
    pub by_weekday: Vec<PeriodShares>,
    pub by_month: Vec<PeriodShares>,
}

impl LunchStatistics {
    /// Preprocess a loaded table and compute all groupings
    pub fn from_table(table: TransactionTable, config: &AnalysisConfig) -> Self {
        Self::compute(prepare_visits(table, config), config)
    }

    pub fn compute(visits: Vec<Visit>, config: &AnalysisConfig) -> Self {
        let top_n = config.top_n.min(MAX_TOP_N);
        let ranking = rank_places(&visits);
        let top = top_places(&ranking, top_n);
        let colors = ColorMap::from_ranking(&ranking, top_n);
        let by_weekday = shares_by_weekday(&visits, &top);
        let by_month = shares_by_month(&visits, &top);

        Self {
            visits,
            ranking,
            top,
            colors,
            by_weekday,
            by_month,
        }
    }

    pub fn total_visits(&self) -> usize {
        self.visits.len()
    }

    pub fn weekday_legend(&self) -> Vec<SliceLabel> {
        legend_labels(&self.by_weekday, &self.top)
    }
}
