//! Turns session state into display lines. Kept separate from printing so the
//! shell can re-render on demand and tests can inspect the exact text.

use crate::analysis::{RatioReport, ScenarioKind};
use crate::cli::framing;
use crate::cli::output::{self, MessageKind};
use crate::currency::NumberFormat;
use crate::ledger::{ExpenseRecord, ExpenseTotals};
use crate::session::SessionSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLine {
    pub kind: MessageKind,
    pub text: String,
}

impl ViewLine {
    fn section(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Section,
            text: text.into(),
        }
    }

    fn info(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Info,
            text: text.into(),
        }
    }

    fn note(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Note,
            text: text.into(),
        }
    }

    fn separator() -> Self {
        Self {
            kind: MessageKind::Separator,
            text: String::new(),
        }
    }
}

pub fn print_lines(lines: &[ViewLine]) {
    for line in lines {
        output::print(line.kind, &line.text);
    }
}

pub fn expense_line(record: &ExpenseRecord, format: &NumberFormat) -> String {
    format!(
        "- {} ({}): {}",
        record.name(),
        record.category(),
        format.amount(record.amount())
    )
}

pub fn expense_lines(expenses: &[ExpenseRecord], format: &NumberFormat) -> Vec<ViewLine> {
    if expenses.is_empty() {
        return vec![ViewLine::info("No expenses logged yet.")];
    }
    let mut lines = vec![ViewLine::info("Current Expenses")];
    lines.extend(
        expenses
            .iter()
            .map(|record| ViewLine::info(expense_line(record, format))),
    );
    lines
}

pub fn balance_lines(
    totals: &ExpenseTotals,
    ratios: &RatioReport,
    format: &NumberFormat,
) -> Vec<ViewLine> {
    vec![
        ViewLine::separator(),
        ViewLine::info(format!(
            "Total expenses: {}",
            format.amount(totals.total_expenses)
        )),
        ViewLine::info(format!(
            "Remaining balance: {}",
            format.amount(ratios.remaining)
        )),
    ]
}

pub fn awareness_lines(ratios: &RatioReport, format: &NumberFormat) -> Vec<ViewLine> {
    match ratios.shares {
        Some(shares) => vec![
            ViewLine::info(format!(
                "Needs: {} of income",
                format.percent(shares.needs_pct)
            )),
            ViewLine::info(format!(
                "Wants: {} of income",
                format.percent(shares.wants_pct)
            )),
            ViewLine::note(framing::AWARENESS),
        ],
        None => vec![
            ViewLine::info(format!("Needs: {}", framing::UNDEFINED_SHARES)),
            ViewLine::info(format!("Wants: {}", framing::UNDEFINED_SHARES)),
        ],
    }
}

/// The compact view shown right after a ledger or income change.
pub fn refresh_lines(snapshot: &SessionSnapshot, format: &NumberFormat) -> Vec<ViewLine> {
    let mut lines = expense_lines(&snapshot.expenses, format);
    lines.extend(balance_lines(&snapshot.totals, &snapshot.ratios, format));
    lines.extend(awareness_lines(&snapshot.ratios, format));
    lines
}

pub fn summary_lines(snapshot: &SessionSnapshot, format: &NumberFormat) -> Vec<ViewLine> {
    let mut lines = vec![
        ViewLine::section("1. Your Financial Snapshot"),
        ViewLine::info(format!(
            "Monthly income / allowance: {}",
            format.amount(snapshot.income)
        )),
        ViewLine::info(format!(
            "Goal: {}",
            snapshot.goal_name.as_deref().unwrap_or("(none)")
        )),
        ViewLine::section("2. Monthly Expenses"),
    ];
    lines.extend(expense_lines(&snapshot.expenses, format));
    lines.extend(balance_lines(&snapshot.totals, &snapshot.ratios, format));
    lines.push(ViewLine::section("3. Spending Awareness"));
    lines.extend(awareness_lines(&snapshot.ratios, format));
    lines
}

pub fn time_to_save_lines(months: Option<f64>, format: &NumberFormat) -> Vec<ViewLine> {
    let mut lines = vec![ViewLine::section(format!(
        "Scenario: {}",
        ScenarioKind::BuyNowVsSave
    ))];
    match months {
        Some(months) => {
            lines.push(ViewLine::info(format!(
                "At this saving rate, it would take approximately {} to reach this amount.",
                format.months(months)
            )));
            lines.push(ViewLine::note(framing::BUY_NOW_VS_SAVE));
        }
        None => lines.push(ViewLine::info(
            "Time to save: n/a (enter a monthly saving above zero)",
        )),
    }
    lines
}

pub fn opportunity_cost_lines(monthly_gain: u128, format: &NumberFormat) -> Vec<ViewLine> {
    vec![
        ViewLine::section(format!("Scenario: {}", ScenarioKind::WorkVsFreeTime)),
        ViewLine::info(format!(
            "Estimated additional monthly income: {}",
            format.amount(monthly_gain)
        )),
        ViewLine::note(framing::WORK_VS_FREE_TIME),
    ]
}
