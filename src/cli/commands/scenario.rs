use crate::analysis::{opportunity_cost, time_to_save, ScenarioKind};
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::view;

use super::{amount_arg, hours_arg};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "scenario",
        "Explore a trade-off: buy now vs save, or work vs free time",
        "scenario buy <item-price> <monthly-saving> | scenario work <hourly-wage> <hours-per-week>",
        cmd_scenario,
    )]
}

fn cmd_scenario(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (kind, raw) = match args {
        [] if context.is_interactive() => {
            let index =
                io::select_item(context.theme(), "Choose a scenario", &ScenarioKind::ALL)?;
            (ScenarioKind::ALL[index], None)
        }
        [kind] if context.is_interactive() => (parse_kind(kind)?, None),
        [kind, first, second] => (parse_kind(kind)?, Some((*first, *second))),
        _ => return Err(context.usage_error("scenario")),
    };

    let format = context.number_format();
    let theme = context.theme();
    let lines = match kind {
        ScenarioKind::BuyNowVsSave => {
            let (price, saving) = match raw {
                Some((price, saving)) => (
                    amount_arg("item price", price)?,
                    amount_arg("monthly saving", saving)?,
                ),
                None => (
                    io::prompt_amount(theme, "Item price")?,
                    io::prompt_amount(theme, "How much could you save per month?")?,
                ),
            };
            view::time_to_save_lines(time_to_save(price, saving), &format)
        }
        ScenarioKind::WorkVsFreeTime => {
            let (wage, hours) = match raw {
                Some((wage, hours)) => (
                    amount_arg("hourly wage", wage)?,
                    hours_arg("hours per week", hours)?,
                ),
                None => (
                    io::prompt_amount(theme, "Hourly wage")?,
                    io::prompt_hours(theme, "Extra work hours per week")?,
                ),
            };
            view::opportunity_cost_lines(opportunity_cost(wage, hours), &format)
        }
    };
    view::print_lines(&lines);
    Ok(())
}

fn parse_kind(raw: &str) -> Result<ScenarioKind, CommandError> {
    raw.parse::<ScenarioKind>().map_err(CommandError::InvalidArguments)
}
