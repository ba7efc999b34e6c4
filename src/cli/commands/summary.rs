use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "summary",
            "Show income, expenses, balance, and spending shares",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new(
            "summary-json",
            "Print the current session snapshot as JSON",
            "summary-json",
            cmd_summary_json,
        ),
    ]
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.render_summary();
    Ok(())
}

fn cmd_summary_json(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let json = serde_json::to_string_pretty(&context.session().snapshot())?;
    println!("{json}");
    Ok(())
}
