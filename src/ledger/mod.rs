pub mod expense;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod profile;

pub use expense::{ExpenseCategory, ExpenseRecord, UnknownCategory};
pub use ledger::{ExpenseLedger, ExpenseTotals, SharedLedger};
pub use profile::Profile;
