use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

use super::expense::{ExpenseCategory, ExpenseRecord};

/// Totals derived from the current ledger contents.
///
/// Sums are kept in `u128` so any number of `u64` amounts adds up exactly.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpenseTotals {
    pub total_expenses: u128,
    pub total_needs: u128,
    pub total_wants: u128,
}

/// In-memory list of the expenses logged during one session.
///
/// Only two mutations exist: appending a validated record and clearing
/// everything. Totals are always recomputed from the records on demand.
#[derive(Debug, Clone, Default)]
pub struct ExpenseLedger {
    records: Vec<ExpenseRecord>,
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends an expense. Rejected submissions leave the
    /// ledger untouched.
    pub fn add(
        &mut self,
        name: &str,
        amount: u64,
        category: ExpenseCategory,
    ) -> Result<(), ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            tracing::debug!("rejected expense with empty name");
            return Err(ValidationError::EmptyName);
        }
        if amount == 0 {
            tracing::debug!(name, "rejected expense with zero amount");
            return Err(ValidationError::NonPositiveAmount);
        }

        self.records
            .push(ExpenseRecord::new(name.to_string(), amount, category));
        tracing::debug!(name, amount, %category, count = self.records.len(), "expense added");
        Ok(())
    }

    pub fn clear(&mut self) {
        let removed = self.records.len();
        self.records.clear();
        tracing::debug!(removed, "ledger cleared");
    }

    /// Copy of the records in insertion order.
    pub fn list(&self) -> Vec<ExpenseRecord> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn aggregate(&self) -> ExpenseTotals {
        self.records
            .iter()
            .fold(ExpenseTotals::default(), |mut totals, record| {
                let amount = u128::from(record.amount());
                totals.total_expenses += amount;
                match record.category() {
                    ExpenseCategory::Need => totals.total_needs += amount,
                    ExpenseCategory::Want => totals.total_wants += amount,
                }
                totals
            })
    }
}

/// Handle to a ledger that may be touched from overlapping event handlers.
///
/// Every operation holds the lock for its full duration, so an append can never
/// interleave with a clear and aggregates always see a whole ledger.
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<RwLock<ExpenseLedger>>,
}

impl SharedLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, ExpenseLedger> {
        // A panic while holding the lock cannot leave a half-applied record
        // behind, so the poisoned state is still consistent.
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, ExpenseLedger> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn add(
        &self,
        name: &str,
        amount: u64,
        category: ExpenseCategory,
    ) -> Result<(), ValidationError> {
        self.write().add(name, amount, category)
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    pub fn list(&self) -> Vec<ExpenseRecord> {
        self.read().list()
    }

    pub fn aggregate(&self) -> ExpenseTotals {
        self.read().aggregate()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Runs `f` against a consistent view of the ledger.
    pub fn with_ledger<T>(&self, f: impl FnOnce(&ExpenseLedger) -> T) -> T {
        f(&self.read())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExpenseLedger {
        let mut ledger = ExpenseLedger::new();
        ledger.add("Rent", 400_000, ExpenseCategory::Need).unwrap();
        ledger.add("Movies", 100_000, ExpenseCategory::Want).unwrap();
        ledger
    }

    #[test]
    fn empty_ledger_aggregates_to_zero() {
        let ledger = ExpenseLedger::new();
        assert_eq!(ledger.aggregate(), ExpenseTotals::default());
        assert!(ledger.is_empty());
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let ledger = sample();
        let names: Vec<_> = ledger.list().iter().map(|r| r.name().to_string()).collect();
        assert_eq!(names, vec!["Rent", "Movies"]);
    }

    #[test]
    fn aggregate_splits_by_category() {
        let totals = sample().aggregate();
        assert_eq!(totals.total_expenses, 500_000);
        assert_eq!(totals.total_needs, 400_000);
        assert_eq!(totals.total_wants, 100_000);
    }

    #[test]
    fn largest_amounts_sum_without_overflow() {
        let shared = SharedLedger::new();
        shared.add("Car", u64::MAX, ExpenseCategory::Need).unwrap();
        shared.add("Gum", 1, ExpenseCategory::Want).unwrap();
        let totals = shared.aggregate();
        assert_eq!(totals.total_expenses, u128::from(u64::MAX) + 1);
        assert_eq!(totals.total_needs, u128::from(u64::MAX));
        assert_eq!(totals.total_wants, 1);
    }

    #[test]
    fn rejects_blank_name_without_mutation() {
        let mut ledger = sample();
        assert_eq!(
            ledger.add("", 1000, ExpenseCategory::Need),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            ledger.add("   ", 1000, ExpenseCategory::Need),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn rejects_zero_amount_without_mutation() {
        let mut ledger = sample();
        assert_eq!(
            ledger.add("Coffee", 0, ExpenseCategory::Want),
            Err(ValidationError::NonPositiveAmount)
        );
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.aggregate().total_expenses, 500_000);
    }

    #[test]
    fn name_is_stored_trimmed() {
        let mut ledger = ExpenseLedger::new();
        ledger.add("  Bus pass ", 50_000, ExpenseCategory::Need).unwrap();
        assert_eq!(ledger.list()[0].name(), "Bus pass");
    }

    #[test]
    fn clear_is_idempotent() {
        let mut ledger = sample();
        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.aggregate(), ExpenseTotals::default());
        ledger.clear();
        assert!(ledger.is_empty());
    }

    #[test]
    fn listed_snapshot_is_detached_from_ledger() {
        let mut ledger = sample();
        let snapshot = ledger.list();
        ledger.clear();
        assert_eq!(snapshot.len(), 2);
        assert!(ledger.is_empty());
    }

    #[test]
    fn shared_handles_see_the_same_ledger() {
        let shared = SharedLedger::new();
        let other = shared.clone();
        shared.add("Lunch", 35_000, ExpenseCategory::Need).unwrap();
        assert_eq!(other.aggregate().total_needs, 35_000);
        other.clear();
        assert!(shared.is_empty());
    }
}
