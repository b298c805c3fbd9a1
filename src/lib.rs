pub mod analysis;
pub mod anonymize;
pub mod chart;
pub mod config;
pub mod error;
pub mod model;
pub mod stats;
pub mod table;

pub use analysis::LunchStatistics;
pub use config::AnalysisConfig;
pub use error::{Result, StatsError};
pub use model::*;
