use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::framing;
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;

use super::joined_text;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "reflect",
            "Write down what you noticed (no text clears the note)",
            "reflect [text...]",
            cmd_reflect,
        ),
        CommandEntry::new(
            "reflection",
            "Show your reflection note",
            "reflection",
            cmd_reflection,
        ),
        CommandEntry::new(
            "about",
            "What FinAware is and is not",
            "about",
            cmd_about,
        ),
    ]
}

fn cmd_reflect(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let note = match joined_text(args) {
        Some(note) => Some(note),
        None if context.is_interactive() => {
            io::print_hint(framing::REFLECTION_PLACEHOLDER);
            Some(io::prompt_text(context.theme(), framing::REFLECTION_PROMPT)?)
        }
        None => None,
    };
    context.session_mut().set_reflection(note.as_deref());
    match context.session().reflection() {
        Some(_) => io::print_success("Reflection noted."),
        None => io::print_success("Reflection cleared."),
    }
    Ok(())
}

fn cmd_reflection(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output_section("Reflection");
    io::print_info(framing::REFLECTION_PROMPT);
    match context.session().reflection() {
        Some(note) => io::print_info(format!("  {note}")),
        None => io::print_hint(framing::REFLECTION_PLACEHOLDER),
    }
    Ok(())
}

fn cmd_about(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output_section(framing::APP_NAME);
    io::print_info(framing::CAPTION);
    io::print_note(framing::FOOTER);
    Ok(())
}
