pub mod distribution;
pub mod ranking;

pub use distribution::{
    legend_labels, month_range, shares_by_month, shares_by_weekday, PeriodShares, Slice,
    SliceLabel,
};
pub use ranking::{rank_places, top_places, PlaceCount};
