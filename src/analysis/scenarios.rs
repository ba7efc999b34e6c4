//! Illustrative trade-off calculators. Each works only on its own inputs and
//! never looks at the ledger or the profile.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A month is approximated as four weeks. This is a deliberate simplification
/// for illustration, not a calendar computation.
pub const WEEKS_PER_MONTH: u64 = 4;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScenarioKind {
    BuyNowVsSave,
    WorkVsFreeTime,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 2] = [ScenarioKind::BuyNowVsSave, ScenarioKind::WorkVsFreeTime];

    pub fn title(self) -> &'static str {
        match self {
            ScenarioKind::BuyNowVsSave => "Buy Now vs Save",
            ScenarioKind::WorkVsFreeTime => "Work vs Free Time",
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for ScenarioKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "buy" | "save" | "buy-now-vs-save" | "buy now vs save" => Ok(ScenarioKind::BuyNowVsSave),
            "work" | "free-time" | "work-vs-free-time" | "work vs free time" => {
                Ok(ScenarioKind::WorkVsFreeTime)
            }
            _ => Err(format!("unknown scenario `{value}` (use buy or work)")),
        }
    }
}

/// Months of saving needed to afford an item. `None` when nothing is saved
/// per month. Fractional months are kept as-is.
pub fn time_to_save(item_price: u64, monthly_saving: u64) -> Option<f64> {
    if monthly_saving == 0 {
        return None;
    }
    if item_price == 0 {
        return Some(0.0);
    }
    Some(item_price as f64 / monthly_saving as f64)
}

/// Extra monthly income from working `hours_per_week` more hours.
///
/// Exact for every input: the widest product is below 2^98.
pub fn opportunity_cost(hourly_wage: u64, hours_per_week: u32) -> u128 {
    u128::from(hourly_wage) * u128::from(hours_per_week) * u128::from(WEEKS_PER_MONTH)
}
