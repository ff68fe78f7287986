//! Terminal output utilities

use console::style;

/// Print a warning message to stderr
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", style("warning").yellow().bold(), message);
}

/// Print a fatal message, and its hint if any, to stderr
pub fn print_fatal(message: &str, hint: Option<&str>) {
    eprintln!("{} {}", style("FATAL:").red().bold(), message);
    if let Some(h) = hint {
        eprintln!("{} {}", style("HINT:").yellow().bold(), h);
    }
}
