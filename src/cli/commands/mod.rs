pub mod config;
pub mod expense;
pub mod profile;
pub mod reflection;
pub mod scenario;
pub mod summary;
pub mod system;

use crate::cli::core::CommandError;
use crate::cli::registry::CommandRegistry;
use crate::currency::{parse_amount, parse_hours};

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for entry in profile::definitions()
        .into_iter()
        .chain(expense::definitions())
        .chain(summary::definitions())
        .chain(scenario::definitions())
        .chain(reflection::definitions())
        .chain(config::definitions())
        .chain(system::definitions())
    {
        registry.register(entry);
    }
}

/// Boundary parsing shared by handlers taking amounts.
pub(crate) fn amount_arg(field: &str, raw: &str) -> Result<u64, CommandError> {
    parse_amount(raw).map_err(|err| CommandError::InvalidArguments(format!("{field}: {err}")))
}

pub(crate) fn hours_arg(field: &str, raw: &str) -> Result<u32, CommandError> {
    parse_hours(raw).map_err(|err| CommandError::InvalidArguments(format!("{field}: {err}")))
}

/// Joins free-text arguments back into one string; `None` when there were none.
pub(crate) fn joined_text(args: &[&str]) -> Option<String> {
    (!args.is_empty()).then(|| args.join(" "))
}
