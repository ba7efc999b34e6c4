use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::cli::core::CommandError;
use crate::cli::output;
use crate::currency::{parse_amount, parse_hours, AmountParseError};

pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

pub fn print_hint(message: impl fmt::Display) {
    output::hint(message);
}

pub fn print_note(message: impl fmt::Display) {
    output::note(message);
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

/// Free-form text; an empty answer is allowed so the caller decides what it means.
pub fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> Result<String, CommandError> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(CommandError::from)
}

/// Non-negative whole amount, re-asked until it parses.
pub fn prompt_amount(theme: &ColorfulTheme, prompt: &str) -> Result<u64, CommandError> {
    prompt_number(theme, prompt, parse_amount)
}

pub fn prompt_hours(theme: &ColorfulTheme, prompt: &str) -> Result<u32, CommandError> {
    prompt_number(theme, prompt, parse_hours)
}

fn prompt_number<T>(
    theme: &ColorfulTheme,
    prompt: &str,
    parse: fn(&str) -> Result<T, AmountParseError>,
) -> Result<T, CommandError> {
    let raw = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|input: &String| parse(input).map(|_| ()).map_err(|err| err.to_string()))
        .interact_text()?;
    parse(&raw).map_err(|err| CommandError::InvalidArguments(err.to_string()))
}

/// Pick one of `items`; returns its index.
pub fn select_item<T: ToString>(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[T],
) -> Result<usize, CommandError> {
    Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(CommandError::from)
}
