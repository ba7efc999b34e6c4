use serde::{Deserialize, Serialize};

use crate::ledger::ExpenseTotals;

/// Needs and wants as a share of income, in percent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SpendingShares {
    pub needs_pct: f64,
    pub wants_pct: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RatioReport {
    /// Income minus total expenses. Negative when spending exceeds income.
    pub remaining: i128,
    /// `None` while income is zero; shares are undefined rather than zero.
    pub shares: Option<SpendingShares>,
}

pub fn compute_ratios(income: u64, totals: &ExpenseTotals) -> RatioReport {
    // Totals above i128::MAX would need more than 2^63 maximal records.
    let spent = i128::try_from(totals.total_expenses).unwrap_or(i128::MAX);
    let remaining = i128::from(income) - spent;
    let shares = (income > 0).then(|| {
        let income = income as f64;
        SpendingShares {
            needs_pct: totals.total_needs as f64 / income * 100.0,
            wants_pct: totals.total_wants as f64 / income * 100.0,
        }
    });
    RatioReport { remaining, shares }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(needs: u128, wants: u128) -> ExpenseTotals {
        ExpenseTotals {
            total_expenses: needs + wants,
            total_needs: needs,
            total_wants: wants,
        }
    }

    #[test]
    fn computes_shares_of_income() {
        let report = compute_ratios(1_000_000, &totals(400_000, 100_000));
        assert_eq!(report.remaining, 500_000);
        let shares = report.shares.expect("income is positive");
        assert_eq!(shares.needs_pct, 40.0);
        assert_eq!(shares.wants_pct, 10.0);
    }

    #[test]
    fn zero_income_leaves_shares_undefined() {
        let report = compute_ratios(0, &totals(250_000, 0));
        assert!(report.shares.is_none());
        assert_eq!(report.remaining, -250_000);
    }

    #[test]
    fn overspending_keeps_negative_remaining() {
        let report = compute_ratios(100_000, &totals(90_000, 60_000));
        assert_eq!(report.remaining, -50_000);
        let shares = report.shares.unwrap();
        assert!(shares.needs_pct + shares.wants_pct > 100.0);
    }

    #[test]
    fn remaining_is_exact_beyond_u64_totals() {
        let spent = u128::from(u64::MAX) + 1;
        let report = compute_ratios(1, &totals(spent, 0));
        assert_eq!(report.remaining, 1 - i128::from(u64::MAX) - 1);
    }
}
