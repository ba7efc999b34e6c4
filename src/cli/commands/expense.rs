use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::view;
use crate::ledger::ExpenseCategory;

use super::amount_arg;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add-expense",
            "Log an expense tagged as need or want",
            "add-expense <name...> <amount> <need|want>",
            cmd_add_expense,
        )
        .with_aliases(&["add"]),
        CommandEntry::new(
            "list-expenses",
            "List logged expenses in the order they were added",
            "list-expenses",
            cmd_list_expenses,
        )
        .with_aliases(&["ls"]),
        CommandEntry::new(
            "clear-expenses",
            "Remove every logged expense",
            "clear-expenses",
            cmd_clear_expenses,
        )
        .with_aliases(&["clear"]),
    ]
}

struct ExpenseInput {
    name: String,
    amount: u64,
    category: ExpenseCategory,
}

fn cmd_add_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let input = match args {
        [] if context.is_interactive() => prompt_expense(context)?,
        [name @ .., amount, category] if !name.is_empty() => ExpenseInput {
            name: name.join(" "),
            amount: amount_arg("amount", amount)?,
            category: category
                .parse::<ExpenseCategory>()
                .map_err(|err| CommandError::InvalidArguments(format!("{err}")))?,
        },
        _ => return Err(context.usage_error("add-expense")),
    };

    // Rejected submissions are silent: the unchanged list is the only feedback.
    if let Err(reason) = context
        .session()
        .add_expense(&input.name, input.amount, input.category)
    {
        tracing::debug!(%reason, "expense submission ignored");
        return Ok(());
    }

    context.render_refresh();
    Ok(())
}

fn prompt_expense(context: &ShellContext) -> Result<ExpenseInput, CommandError> {
    let theme = context.theme();
    let name = io::prompt_text(theme, "Expense name")?;
    let amount = io::prompt_amount(theme, "Amount")?;
    let index = io::select_item(theme, "Category", &ExpenseCategory::ALL)?;
    Ok(ExpenseInput {
        name,
        amount,
        category: ExpenseCategory::ALL[index],
    })
}

fn cmd_list_expenses(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let expenses = context.session().ledger().list();
    view::print_lines(&view::expense_lines(&expenses, &context.number_format()));
    Ok(())
}

fn cmd_clear_expenses(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let removed = context.session().ledger().len();
    context.session().clear_expenses();
    io::print_success(format!("Cleared {removed} expense(s)."));
    context.render_refresh();
    Ok(())
}
