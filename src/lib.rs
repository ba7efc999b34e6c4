#![doc(test(attr(deny(warnings))))]

//! FinAware is a session-scoped reflection tool for personal spending: log
//! expenses as needs or wants, see how they compare to income, and explore two
//! illustrative trade-off scenarios. It never recommends actions.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod session;
pub mod utils;

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes global tracing.
pub fn init() {
    INIT.call_once(|| {
        utils::init_tracing();
        tracing::debug!("FinAware tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
