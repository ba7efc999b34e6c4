use colored::Colorize;
use std::fmt;
use std::io::IsTerminal;
use std::sync::{OnceLock, RwLock};

use crate::config::Config;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
    Note,
    Section,
    Separator,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputPreferences {
    pub screen_reader_mode: bool,
    pub high_contrast_mode: bool,
    pub quiet_mode: bool,
}

impl OutputPreferences {
    pub fn from_config(config: &Config) -> Self {
        Self {
            screen_reader_mode: config.screen_reader_mode,
            high_contrast_mode: config.high_contrast_mode,
            quiet_mode: config.quiet_mode,
        }
    }
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

/// Applies display preferences and decides whether ANSI colour is emitted.
pub fn apply_config(config: &Config) {
    set_preferences(OutputPreferences::from_config(config));
    let use_color = config.ui_color_enabled
        && !config.screen_reader_mode
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal();
    colored::control::set_override(use_color);
}

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn should_skip(kind: MessageKind, prefs: &OutputPreferences) -> bool {
    prefs.quiet_mode && matches!(kind, MessageKind::Separator | MessageKind::Hint)
}

fn decoration(kind: MessageKind) -> Option<(&'static str, &'static str)> {
    match kind {
        MessageKind::Success => Some(("✔", "OK:")),
        MessageKind::Warning => Some(("⚠", "WARNING:")),
        MessageKind::Error => Some(("✖", "ERROR:")),
        MessageKind::Hint => Some(("→", "HINT:")),
        MessageKind::Note => Some(("ℹ", "NOTE:")),
        MessageKind::Info | MessageKind::Section | MessageKind::Separator => None,
    }
}

pub(crate) fn format_message(
    kind: MessageKind,
    message: impl fmt::Display,
    prefs: &OutputPreferences,
) -> String {
    let text = message.to_string();
    let base = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Separator => "-".repeat(separator_width()),
        _ => match decoration(kind) {
            Some((_, label)) if prefs.screen_reader_mode => format!("{label} {text}"),
            Some((icon, _)) => format!("{icon} {text}"),
            None => text,
        },
    };

    if prefs.screen_reader_mode {
        return base;
    }

    if prefs.high_contrast_mode {
        return match kind {
            MessageKind::Info | MessageKind::Separator => base,
            _ => base.bold().to_string(),
        };
    }

    match kind {
        MessageKind::Success => base.bright_green().to_string(),
        MessageKind::Warning => base.bright_yellow().to_string(),
        MessageKind::Error => base.bright_red().to_string(),
        MessageKind::Hint => base.dimmed().to_string(),
        MessageKind::Note => base.bright_cyan().to_string(),
        MessageKind::Section => base.bold().to_string(),
        MessageKind::Info | MessageKind::Separator => base,
    }
}

fn separator_width() -> usize {
    crossterm::terminal::size()
        .map(|(columns, _)| usize::from(columns).clamp(20, 60))
        .unwrap_or(40)
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let prefs = current_preferences();
    if should_skip(kind, &prefs) {
        return;
    }
    let formatted = format_message(kind, message, &prefs);
    match kind {
        MessageKind::Section => println!("\n{formatted}"),
        _ => println!("{formatted}"),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn hint(message: impl fmt::Display) {
    print(MessageKind::Hint, message);
}

pub fn note(message: impl fmt::Display) {
    print(MessageKind::Note, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_reader_mode_uses_text_labels() {
        let prefs = OutputPreferences {
            screen_reader_mode: true,
            ..OutputPreferences::default()
        };
        assert_eq!(
            format_message(MessageKind::Success, "Saved", &prefs),
            "OK: Saved"
        );
        assert_eq!(
            format_message(MessageKind::Section, " Summary ", &prefs),
            "=== Summary ==="
        );
        assert_eq!(format_message(MessageKind::Info, "plain", &prefs), "plain");
    }

    #[test]
    fn quiet_mode_skips_hints_and_separators() {
        let prefs = OutputPreferences {
            quiet_mode: true,
            ..OutputPreferences::default()
        };
        assert!(should_skip(MessageKind::Hint, &prefs));
        assert!(should_skip(MessageKind::Separator, &prefs));
        assert!(!should_skip(MessageKind::Error, &prefs));
    }
}
