//! Argument dispatch
//!
//! The dispatcher turns one argument list into one command invocation:
//!
//! ```text
//! usage/help short-circuits → project dir check → root resolution
//!   → context construction → lookup → flag customization → parsing → execute
//! ```
//!
//! That order is part of the contract. Nothing here exits the process;
//! every outcome is returned to `main`.

use std::ffi::OsString;

use anyhow::Result;
use tracing::debug;

use crate::commands::{help, Registry, VendorCommand};
use crate::config::Environment;
use crate::error::DispatchError;
use crate::flags::{flag_set, ParsedFlags};
use crate::project::ProjectContext;
use crate::toolchain::{self, Toolchain};
use crate::utils::paths::{FsRootResolver, ProjectRootResolver};

/// Builds the toolchain for a new project context
pub type ToolchainFactory = Box<dyn Fn() -> Result<Box<dyn Toolchain>>>;

/// State of a single dispatch
#[derive(Default)]
pub struct InvocationState<'r> {
    /// Arguments as given, verb first
    pub raw_args: Vec<String>,
    /// The matched command, once lookup succeeds
    pub selected: Option<&'r dyn VendorCommand>,
    pub flags: Option<ParsedFlags>,
    /// Positional arguments left after flag parsing
    pub remaining: Vec<String>,
}

impl<'r> InvocationState<'r> {
    pub fn new(raw_args: Vec<String>) -> Self {
        Self {
            raw_args,
            ..Self::default()
        }
    }

    fn verb(&self) -> Option<&str> {
        self.raw_args.first().map(String::as_str)
    }

    /// Arguments after the verb
    fn tail(&self) -> &[String] {
        self.raw_args.get(1..).unwrap_or_default()
    }

    fn record_parse(&mut self, flags: ParsedFlags) {
        self.remaining = flags.remaining();
        self.flags = Some(flags);
    }

    /// Run the selected command with the parsed flags and leftovers
    fn invoke(&self, ctx: &ProjectContext) -> Result<(), DispatchError> {
        let (Some(command), Some(flags)) = (self.selected, self.flags.as_ref()) else {
            let verb = self.verb().unwrap_or_default().to_string();
            return Err(DispatchError::UnknownCommand(verb));
        };
        command
            .execute(ctx, flags, &self.remaining)
            .map_err(|source| DispatchError::CommandExecution {
                command: command.name().to_string(),
                source,
            })
    }
}

/// Routes arguments to registered commands
pub struct Dispatcher {
    env: Environment,
    registry: Registry,
    resolver: Box<dyn ProjectRootResolver>,
    toolchain: ToolchainFactory,
}

impl Dispatcher {
    /// Dispatcher using the filesystem resolver and the default toolchain
    pub fn new(env: Environment, registry: Registry) -> Self {
        Self {
            env,
            registry,
            resolver: Box::new(FsRootResolver),
            toolchain: Box::new(toolchain::default_toolchain),
        }
    }

    /// Replace the project root resolver
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_resolver(mut self, resolver: Box<dyn ProjectRootResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Replace the toolchain constructor
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_toolchain(mut self, toolchain: ToolchainFactory) -> Self {
        self.toolchain = toolchain;
        self
    }

    /// Dispatch one argument list (program name excluded)
    pub fn run(&self, raw_args: Vec<String>) -> Result<(), DispatchError> {
        let mut state = InvocationState::new(raw_args);

        let verb = match state.verb() {
            None => return self.usage(),
            Some(verb) if is_help_flag(verb) => return self.usage(),
            Some(verb) => verb.to_string(),
        };
        if verb == "help" {
            return help::run(&self.registry, state.tail());
        }

        if self.env.project_dir.is_empty() {
            return Err(DispatchError::MissingProjectRoot);
        }

        let root = self
            .resolver
            .find_project_root(&self.env.project_dir)
            .map_err(|source| DispatchError::ProjectRootResolution { source })?;
        let ctx = self.build_context(root)?;
        debug!(
            root = %ctx.root().display(),
            source_dirs = ?ctx.source_dirs(),
            vendor = %ctx.vendor_dir().display(),
            "project root"
        );

        let command = self
            .registry
            .lookup(&verb)
            .ok_or(DispatchError::UnknownCommand(verb))?;
        state.selected = Some(command);

        // custom flags must exist before parsing or they are rejected as unknown
        let flags = command.customize_flags(flag_set(command.name()));
        let parsed = command
            .parse_flags(flags, &state.raw_args)
            .map_err(|source| flag_error(command.name(), source))?;
        state.record_parse(parsed);
        debug!(args = ?state.remaining, "args");

        state.invoke(&ctx)
    }

    fn build_context(&self, root: std::path::PathBuf) -> Result<ProjectContext, DispatchError> {
        let source_dirs = ProjectContext::standard_source_dirs(&root);
        (self.toolchain)()
            .and_then(|toolchain| {
                debug!(toolchain = toolchain.name(), path = ?toolchain.path(), "toolchain");
                ProjectContext::new(root, source_dirs, toolchain)
            })
            .map_err(|source| DispatchError::ContextConstruction { source })
    }

    /// Print usage to stderr and stop
    fn usage(&self) -> Result<(), DispatchError> {
        eprint!("{}", help::usage(&self.registry));
        Err(DispatchError::Usage)
    }
}

/// Convert the process arguments, rejecting any that are not valid UTF-8
pub fn collect_args<I>(args: I) -> Result<Vec<String>, DispatchError>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| arg.into_string().map_err(DispatchError::InvalidArgument))
        .collect()
}

fn is_help_flag(arg: &str) -> bool {
    matches!(arg, "-h" | "-help" | "--help")
}

/// A help request from the flag set is not a parse failure
fn flag_error(command: &str, source: clap::Error) -> DispatchError {
    match source.kind() {
        clap::error::ErrorKind::DisplayHelp => DispatchError::CommandHelp(source.to_string()),
        _ => DispatchError::FlagParse {
            command: command.to_string(),
            source,
        },
    }
}
