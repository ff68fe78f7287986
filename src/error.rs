//! Error types for the dispatch pipeline
//!
//! Every failure in the pipeline is fatal to the process. Collaborators and
//! command operations report `anyhow` errors; the dispatcher wraps them into
//! the kind-specific [`DispatchError`] variant, and `main` translates that
//! into an exit code exactly once.

use thiserror::Error;

use crate::utils::terminal;

/// Exit code for the early usage path and for fatal errors
pub const EXIT_FAILURE: i32 = 1;

/// Exit code for help misuse and per-command help requests
pub const EXIT_USAGE: i32 = 2;

/// Errors that terminate a dispatch
#[derive(Error, Debug)]
pub enum DispatchError {
    /// No verb, or a bare help flag; usage has already been printed
    #[error("usage requested")]
    Usage,

    /// `help` was given the wrong number of arguments
    #[error("{0}")]
    HelpUsage(String),

    /// `help <topic>` named no registered command
    #[error("Unknown help topic {0:?}. Run 'gb vendor help'.")]
    UnknownHelpTopic(String),

    /// A command's flag set was asked for help; carries the rendered text
    #[error("{0}")]
    CommandHelp(String),

    /// A command-line argument is not valid UTF-8
    #[error("argument {0:?} is not valid UTF-8")]
    InvalidArgument(std::ffi::OsString),

    /// The project directory hint is absent from the environment
    #[error("don't run this binary directly, it is meant to be run as 'gb vendor ...'")]
    MissingProjectRoot,

    /// Searching for the project root failed
    #[error("could not locate project root: {source:#}")]
    ProjectRootResolution {
        #[source]
        source: anyhow::Error,
    },

    /// Toolchain or context setup failed
    #[error("unable to construct context: {source:#}")]
    ContextConstruction {
        #[source]
        source: anyhow::Error,
    },

    /// The matched command rejected its flags
    #[error("could not parse flags for {command}: {}", summarize_clap_error(.source))]
    FlagParse {
        command: String,
        #[source]
        source: clap::Error,
    },

    /// The matched command ran and failed
    #[error("command {command:?} failed: {source:#}")]
    CommandExecution {
        command: String,
        #[source]
        source: anyhow::Error,
    },

    /// No registered command matches the verb
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
}

impl DispatchError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchError::HelpUsage(_)
            | DispatchError::UnknownHelpTopic(_)
            | DispatchError::CommandHelp(_) => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }

    /// Whether this error is reported as a fatal message rather than usage text
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            DispatchError::Usage
                | DispatchError::HelpUsage(_)
                | DispatchError::UnknownHelpTopic(_)
                | DispatchError::CommandHelp(_)
        )
    }

    /// Actionable hint shown under a fatal message
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            DispatchError::MissingProjectRoot => Some(hints::missing_project_root()),
            DispatchError::ProjectRootResolution { .. } => Some(hints::project_root_not_found()),
            DispatchError::UnknownCommand(_) => Some(hints::unknown_command()),
            DispatchError::FlagParse { .. } => Some(hints::flag_parse()),
            _ => None,
        }
    }

    /// Write the error to stderr in the form matching its kind
    pub fn report(&self) {
        match self {
            // usage text was printed before the error was returned
            DispatchError::Usage => {}
            DispatchError::CommandHelp(text) => eprint!("{}", text),
            _ if !self.is_fatal() => eprintln!("{}", self),
            _ => terminal::print_fatal(&self.to_string(), self.hint()),
        }
    }
}

/// First line of a clap error without its `error: ` prefix
fn summarize_clap_error(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.trim_start_matches("error: ").to_string()
}

/// Hints for the fatal error kinds
pub mod hints {
    /// Hint for an empty GB_PROJECT_DIR
    pub fn missing_project_root() -> &'static str {
        "gb vendor is a gb plugin; gb sets GB_PROJECT_DIR before running it.\n\
         Run: gb vendor <command> [arguments]"
    }

    /// Hint for a failed project root search
    pub fn project_root_not_found() -> &'static str {
        "A gb project root is a directory containing a src/ directory.\n\
         Run gb from inside your project, or point GB_PROJECT_DIR at it."
    }

    /// Hint for an unknown verb
    pub fn unknown_command() -> &'static str {
        "Run: gb vendor help"
    }

    /// Hint for rejected flags
    pub fn flag_parse() -> &'static str {
        "Run: gb vendor help <command> to see the flags a command accepts"
    }
}
