//! Usage text and `gb vendor help`

use std::fmt::Write as _;

use super::{Registry, VendorCommand};
use crate::error::DispatchError;

/// Top-level usage listing every runnable command
pub fn usage(registry: &Registry) -> String {
    let mut text = String::from(
        "gb-vendor, a gb plugin to manage your vendored dependencies.\n\
         \n\
         Usage:\n\
         \n\
         \tgb vendor command [arguments]\n\
         \n\
         The commands are:\n\
         \n",
    );
    for command in registry.iter().filter(|c| c.runnable()) {
        let _ = writeln!(text, "\t{:<11} {}", command.name(), command.short());
    }
    text.push_str("\nUse \"gb vendor help [command]\" for more information about a command.\n");
    text
}

/// Detailed help for one command
pub fn command_help(command: &dyn VendorCommand) -> String {
    format!(
        "usage: gb vendor {}\n\n{}",
        command.usage_line(),
        command.long().trim_end()
    )
}

/// Resolve `gb vendor help [topic]` to the text to print
pub fn help_text(registry: &Registry, args: &[String]) -> Result<String, DispatchError> {
    match args {
        [] => Ok(usage(registry)),
        [topic] => registry
            .lookup(topic)
            .map(|command| format!("{}\n", command_help(command)))
            .ok_or_else(|| DispatchError::UnknownHelpTopic(topic.clone())),
        _ => Err(DispatchError::HelpUsage(
            "usage: gb vendor help command\n\nToo many arguments given.".to_string(),
        )),
    }
}

/// Run the help subsystem, printing to stdout
pub fn run(registry: &Registry, args: &[String]) -> Result<(), DispatchError> {
    let text = help_text(registry, args)?;
    print!("{}", text);
    Ok(())
}
