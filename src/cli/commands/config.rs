use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::config::Config;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change display preferences",
        "config | config set <key> <value> | config reset",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            show_config(context);
            Ok(())
        }
        ["set", key, value @ ..] if !value.is_empty() => {
            let value = value.join(" ");
            context.update_config(|config| config.set_value(key, &value))?;
            io::print_success(format!("`{key}` updated."));
            Ok(())
        }
        ["reset"] => {
            context.update_config(|config| {
                *config = Config::default();
                Ok(())
            })?;
            io::print_success("Preferences reset to defaults.");
            Ok(())
        }
        _ => Err(context.usage_error("config")),
    }
}

fn show_config(context: &ShellContext) {
    output_section("Preferences");
    for (key, value) in context.config().entries() {
        io::print_info(format!("  {key:<20} {value}"));
    }
    io::print_hint(format!("Keys: {}", Config::KEYS.join(", ")));
}
