use chrono::{DateTime, Local};
use serde::Serialize;

use crate::{
    analysis::{compute_ratios, RatioReport},
    errors::ValidationError,
    ledger::{ExpenseCategory, ExpenseRecord, ExpenseTotals, Profile, SharedLedger},
};

/// Everything the user has entered during one run of the shell.
///
/// Created when the shell starts and dropped when it exits; nothing is written
/// to disk.
#[derive(Debug)]
pub struct Session {
    profile: Profile,
    ledger: SharedLedger,
    reflection: Option<String>,
    started_at: DateTime<Local>,
}

/// Serializable view of the session used for rendering and JSON output.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SessionSnapshot {
    pub income: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_name: Option<String>,
    pub expenses: Vec<ExpenseRecord>,
    pub totals: ExpenseTotals,
    pub ratios: RatioReport,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        let session = Self {
            profile: Profile::default(),
            ledger: SharedLedger::new(),
            reflection: None,
            started_at: Local::now(),
        };
        tracing::info!(started_at = %session.started_at, "session started");
        session
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn set_income(&mut self, income: u64) {
        self.profile.set_income(income);
    }

    pub fn set_goal(&mut self, goal: Option<&str>) {
        self.profile.set_goal(goal);
    }

    /// Handle for callers that need to share the ledger with other handlers.
    pub fn ledger(&self) -> &SharedLedger {
        &self.ledger
    }

    pub fn add_expense(
        &self,
        name: &str,
        amount: u64,
        category: ExpenseCategory,
    ) -> Result<(), ValidationError> {
        self.ledger.add(name, amount, category)
    }

    pub fn clear_expenses(&self) {
        self.ledger.clear();
    }

    pub fn reflection(&self) -> Option<&str> {
        self.reflection.as_deref()
    }

    pub fn set_reflection(&mut self, note: Option<&str>) {
        self.reflection = note
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn ratios(&self) -> RatioReport {
        compute_ratios(self.profile.income, &self.ledger.aggregate())
    }

    /// Reads the ledger once so records and totals always agree.
    pub fn snapshot(&self) -> SessionSnapshot {
        let (expenses, totals) = self
            .ledger
            .with_ledger(|ledger| (ledger.list(), ledger.aggregate()));
        SessionSnapshot {
            income: self.profile.income,
            goal_name: self.profile.goal_name.clone(),
            ratios: compute_ratios(self.profile.income, &totals),
            expenses,
            totals,
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        tracing::info!(expenses = self.ledger.len(), "session ended");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_latest_mutation() {
        let mut session = Session::new();
        session.set_income(1_000_000);
        session
            .add_expense("Rent", 400_000, ExpenseCategory::Need)
            .unwrap();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.expenses.len(), 1);
        assert_eq!(snapshot.totals.total_needs, 400_000);
        assert_eq!(snapshot.ratios.remaining, 600_000);

        session.clear_expenses();
        let snapshot = session.snapshot();
        assert!(snapshot.expenses.is_empty());
        assert_eq!(snapshot.ratios.remaining, 1_000_000);
    }

    #[test]
    fn reflection_is_trimmed_and_clearable() {
        let mut session = Session::new();
        session.set_reflection(Some("  I spend a lot on snacks "));
        assert_eq!(session.reflection(), Some("I spend a lot on snacks"));
        session.set_reflection(None);
        assert!(session.reflection().is_none());
    }
}
