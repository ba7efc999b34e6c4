use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;

use super::{amount_arg, joined_text};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "income",
            "Set your monthly income or allowance",
            "income <amount>",
            cmd_income,
        ),
        CommandEntry::new(
            "goal",
            "Set an optional personal goal (no text clears it)",
            "goal [text...]",
            cmd_goal,
        ),
        CommandEntry::new("profile", "Show income and goal", "profile", cmd_profile),
    ]
}

fn cmd_income(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let income = match args {
        [raw] => amount_arg("income", raw)?,
        [] if context.is_interactive() => {
            io::prompt_amount(context.theme(), "Monthly income / allowance")?
        }
        _ => return Err(context.usage_error("income")),
    };
    context.session_mut().set_income(income);
    io::print_success(format!(
        "Income set to {}.",
        context.number_format().amount(income)
    ));
    context.render_refresh();
    Ok(())
}

fn cmd_goal(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let goal = joined_text(args);
    context.session_mut().set_goal(goal.as_deref());
    match context.session().profile().goal_name.as_deref() {
        Some(goal) => io::print_success(format!("Goal set: {goal}")),
        None => io::print_success("Goal cleared."),
    }
    Ok(())
}

fn cmd_profile(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let format = context.number_format();
    let session = context.session();
    let profile = session.profile();
    output_section("Your Financial Snapshot");
    io::print_info(format!(
        "  Monthly income / allowance: {}",
        format.amount(profile.income)
    ));
    io::print_info(format!(
        "  Goal: {}",
        profile.goal_name.as_deref().unwrap_or("(none)")
    ));
    io::print_info(format!(
        "  Session started: {}",
        session.started_at().format("%Y-%m-%d %H:%M")
    ));
    Ok(())
}
