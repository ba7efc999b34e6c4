//! Shell context, dispatch, and error reporting.

use std::io;

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;

use crate::{
    config::{Config, ConfigManager},
    currency::NumberFormat,
    errors::ConfigError,
    session::Session,
};

use super::commands;
use super::io as cli_io;
use super::output;
use super::registry::{CommandEntry, CommandRegistry};
use super::view;

const SUGGESTION_DISTANCE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Owns the session for the lifetime of the shell together with the
/// command table and display preferences.
pub struct ShellContext {
    mode: CliMode,
    registry: CommandRegistry,
    session: Session,
    config: Config,
    config_manager: ConfigManager,
    theme: ColorfulTheme,
    pub(crate) last_command: Option<String>,
    pub(crate) running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Self {
        Self::with_config_manager(mode, ConfigManager::new())
    }

    pub fn with_config_manager(mode: CliMode, config_manager: ConfigManager) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        let config = config_manager.load_or_default();
        output::apply_config(&config);

        Self {
            mode,
            registry,
            session: Session::new(),
            config,
            config_manager,
            theme: ColorfulTheme::default(),
            last_command: None,
            running: true,
        }
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn is_interactive(&self) -> bool {
        self.mode == CliMode::Interactive
    }

    pub(crate) fn theme(&self) -> &ColorfulTheme {
        &self.theme
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn number_format(&self) -> NumberFormat {
        NumberFormat::from_config(&self.config)
    }

    pub(crate) fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.completion_words()
    }

    pub fn prompt(&self) -> String {
        "finaware > ".into()
    }

    /// Persists a changed config and re-applies output preferences.
    pub(crate) fn update_config(
        &mut self,
        update: impl FnOnce(&mut Config) -> Result<(), ConfigError>,
    ) -> CommandResult {
        let mut next = self.config.clone();
        update(&mut next)?;
        self.config_manager.save(&next)?;
        self.config = next;
        output::apply_config(&self.config);
        Ok(())
    }

    /// Recomputes aggregates and ratios from the current session and prints the
    /// compact view. Called by handlers after every successful change.
    pub(crate) fn render_refresh(&self) {
        let snapshot = self.session.snapshot();
        view::print_lines(&view::refresh_lines(&snapshot, &self.number_format()));
    }

    pub(crate) fn render_summary(&self) {
        let snapshot = self.session.snapshot();
        view::print_lines(&view::summary_lines(&snapshot, &self.number_format()));
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            tracing::debug!(command, args = args.len(), "dispatching command");
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match super::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                cli_io::print_warning(&err);
                return Ok(LoopControl::Continue);
            }
        };

        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };
        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

        self.last_command = Some(line.trim().to_string());

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= SUGGESTION_DISTANCE {
                cli_io::print_hint(format!("Did you mean `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(
            &self.theme,
            "Exit FinAware? Nothing from this session is kept.",
            true,
        )
        .map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(&message);
                cli_io::print_hint("Use `help <command>` for usage details.");
            }
            other => cli_io::print_error(&other),
        }
    }

    /// Usage error for the command currently being handled.
    pub(crate) fn usage_error(&self, name: &str) -> CommandError {
        let usage = self
            .registry
            .get(name)
            .map(|entry| entry.usage)
            .unwrap_or(name);
        CommandError::InvalidArguments(format!("usage: {usage}"))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

/// Failures that stop the shell itself.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("{0}")]
    Command(String),
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

#[cfg(test)]
pub(crate) fn process_script(lines: &[&str]) -> (ShellContext, tempfile::TempDir) {
    let home = tempfile::TempDir::new().expect("temp home");
    let manager = ConfigManager::with_base_dir(home.path().to_path_buf());
    let mut app = ShellContext::with_config_manager(CliMode::Script, manager);
    for line in lines {
        match app.process_line(line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => app.report_error(err),
        }
    }
    (app, home)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::ExpenseCategory;

    #[test]
    fn add_and_clear_flow_updates_session() {
        let (app, _home) = process_script(&[
            "income 1,000,000",
            "add-expense Rent 400000 need",
            "add-expense Movies 100_000 want",
        ]);
        let snapshot = app.session().snapshot();
        assert_eq!(snapshot.income, 1_000_000);
        assert_eq!(snapshot.totals.total_expenses, 500_000);
        assert_eq!(snapshot.expenses[1].category(), ExpenseCategory::Want);

        let (app, _home) = process_script(&["add-expense Rent 400000 need", "clear-expenses"]);
        assert!(app.session().ledger().is_empty());
    }

    #[test]
    fn prompt_is_plain_text() {
        let (app, _home) = process_script(&[]);
        assert_eq!(app.prompt(), "finaware > ");
    }

    #[test]
    fn multi_word_names_are_joined() {
        let (app, _home) = process_script(&["add-expense Bus pass 50000 need"]);
        let expenses = app.session().ledger().list();
        assert_eq!(expenses[0].name(), "Bus pass");
    }

    #[test]
    fn invalid_submissions_leave_ledger_unchanged() {
        let (app, _home) = process_script(&[
            "add-expense \"\" 1000 need",
            "add-expense Coffee 0 want",
            "add-expense Coffee -5 want",
            "add-expense Coffee 5000 luxury",
            "add-expense Coffee",
        ]);
        assert!(app.session().ledger().is_empty());
    }

    #[test]
    fn goal_and_reflection_are_stored() {
        let (app, _home) = process_script(&[
            "goal save for a laptop",
            "reflect I buy coffee every day",
        ]);
        assert_eq!(
            app.session().profile().goal_name.as_deref(),
            Some("save for a laptop")
        );
        assert_eq!(
            app.session().reflection(),
            Some("I buy coffee every day")
        );
    }

    #[test]
    fn aliases_reach_the_same_handlers() {
        let (app, _home) =
            process_script(&["add Coffee 20000 want", "ls", "quit", "add Tea 1 want"]);
        assert_eq!(app.session().ledger().len(), 1);
        assert!(!app.running);
    }

    #[test]
    fn exit_stops_processing() {
        let (app, _home) = process_script(&["exit", "income 5000"]);
        assert!(!app.running);
        assert_eq!(app.session().profile().income, 0);
    }

    #[test]
    fn unknown_command_is_not_fatal() {
        let (app, _home) = process_script(&["incme 5000", "income 5000"]);
        assert_eq!(app.session().profile().income, 5000);
        assert_eq!(app.last_command.as_deref(), Some("income 5000"));
    }

    #[test]
    fn config_set_persists_to_home() {
        let (app, home) = process_script(&["config set currency_label USD"]);
        assert_eq!(app.config().currency_label, "USD");
        let saved = ConfigManager::with_base_dir(home.path().to_path_buf())
            .load()
            .unwrap();
        assert_eq!(saved.currency_label, "USD");
    }

    #[test]
    fn bad_config_value_keeps_previous_config() {
        let (app, home) = process_script(&["config set percent_precision 12"]);
        assert_eq!(app.config().percent_precision, 1);
        assert!(!crate::utils::paths::config_file_in(home.path()).exists());
    }
}
