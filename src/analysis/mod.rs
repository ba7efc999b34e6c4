pub mod ratios;
pub mod scenarios;

pub use ratios::{compute_ratios, RatioReport, SpendingShares};
pub use scenarios::{opportunity_cost, time_to_save, ScenarioKind, WEEKS_PER_MONTH};
