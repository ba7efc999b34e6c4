use std::thread;

use finaware::{
    ledger::{ExpenseCategory, SharedLedger},
    session::Session,
};

#[test]
fn overlapping_adds_and_clears_never_tear_the_ledger() {
    let ledger = SharedLedger::new();
    let writers: Vec<_> = (0..4)
        .map(|worker| {
            let ledger = ledger.clone();
            thread::spawn(move || {
                for step in 0..250u64 {
                    let category = if step % 2 == 0 {
                        ExpenseCategory::Need
                    } else {
                        ExpenseCategory::Want
                    };
                    ledger
                        .add(&format!("w{worker}-{step}"), step + 1, category)
                        .expect("valid record");
                    if step % 50 == 49 {
                        ledger.clear();
                    }
                }
            })
        })
        .collect();

    let reader = {
        let ledger = ledger.clone();
        thread::spawn(move || {
            for _ in 0..500 {
                let (records, totals) =
                    ledger.with_ledger(|inner| (inner.list(), inner.aggregate()));
                let sum: u128 = records.iter().map(|record| u128::from(record.amount())).sum();
                assert_eq!(totals.total_expenses, sum);
                assert_eq!(totals.total_expenses, totals.total_needs + totals.total_wants);
            }
        })
    };

    for writer in writers {
        writer.join().expect("writer thread");
    }
    reader.join().expect("reader thread");

    let totals = ledger.aggregate();
    assert_eq!(totals.total_expenses, totals.total_needs + totals.total_wants);
}

#[test]
fn sessions_are_independent() {
    let first = Session::new();
    let second = Session::new();
    first
        .add_expense("Rent", 400_000, ExpenseCategory::Need)
        .unwrap();
    assert_eq!(first.ledger().len(), 1);
    assert!(second.ledger().is_empty());
}

#[test]
fn snapshot_serializes_to_json() {
    let mut session = Session::new();
    session.set_income(1_000_000);
    session.set_goal(Some("Laptop"));
    session
        .add_expense("Rent", 400_000, ExpenseCategory::Need)
        .unwrap();

    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["income"], 1_000_000);
    assert_eq!(json["goal_name"], "Laptop");
    assert_eq!(json["expenses"][0]["category"], "Need");
    assert_eq!(json["totals"]["total_needs"], 400_000);
    assert_eq!(json["ratios"]["shares"]["needs_pct"], 40.0);
}
