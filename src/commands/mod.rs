//! Command implementations
//!
//! Each command module provides a descriptor implementing [`VendorCommand`]:
//! its flags, how its flags and leftover arguments become a request, and
//! the backend call that carries the request out.

pub mod delete;
pub mod fetch;
pub mod help;
pub mod list;
pub mod purge;
pub mod update;

use std::collections::HashSet;
use std::rc::Rc;

use anyhow::{bail, Result};
use clap::Command;
use thiserror::Error;

use crate::backend::VendorBackend;
use crate::flags::ParsedFlags;
use crate::project::ProjectContext;

/// A registered command verb and its behavior
pub trait VendorCommand {
    /// Verb matched verbatim against the first argument
    fn name(&self) -> &'static str;

    /// One-line usage shown after `gb vendor`
    fn usage_line(&self) -> &'static str;

    /// Short description for the command list
    fn short(&self) -> &'static str;

    /// Long description for `gb vendor help <command>`
    fn long(&self) -> &'static str;

    fn runnable(&self) -> bool {
        true
    }

    /// Register this command's flags on the flag set
    fn customize_flags(&self, flags: Command) -> Command {
        flags
    }

    /// Parse flags from the full argument list, verb included
    ///
    /// Long flags may be spelled with one dash or two (`-all`, `--all`).
    fn parse_flags(
        &self,
        flags: Command,
        raw_args: &[String],
    ) -> Result<ParsedFlags, clap::Error> {
        ParsedFlags::parse_single_dash(flags, raw_args.get(1..).unwrap_or_default())
    }

    /// Run the command against the project with the leftover arguments
    fn execute(&self, ctx: &ProjectContext, flags: &ParsedFlags, args: &[String]) -> Result<()>;
}

/// Registry construction errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("command {0:?} is registered more than once")]
    DuplicateCommand(String),
}

/// The ordered set of commands, fixed at startup
pub struct Registry {
    commands: Vec<Box<dyn VendorCommand>>,
}

impl Registry {
    /// Create a registry; names must be unique
    pub fn new(commands: Vec<Box<dyn VendorCommand>>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for command in &commands {
            if !seen.insert(command.name()) {
                return Err(RegistryError::DuplicateCommand(command.name().to_string()));
            }
        }
        Ok(Self { commands })
    }

    /// The vendoring commands: fetch, update, list, delete, purge
    pub fn standard(backend: Rc<dyn VendorBackend>) -> Result<Self, RegistryError> {
        Self::new(vec![
            Box::new(fetch::Fetch::new(Rc::clone(&backend))),
            Box::new(update::Update::new(Rc::clone(&backend))),
            Box::new(list::List::new(Rc::clone(&backend))),
            Box::new(delete::Delete::new(Rc::clone(&backend))),
            Box::new(purge::Purge::new(backend)),
        ])
    }

    /// First runnable command named `name`
    pub fn lookup(&self, name: &str) -> Option<&dyn VendorCommand> {
        self.commands
            .iter()
            .map(Box::as_ref)
            .find(|command| command.name() == name && command.runnable())
    }

    /// Commands in registration order
    pub fn iter(&self) -> impl Iterator<Item = &dyn VendorCommand> {
        self.commands.iter().map(Box::as_ref)
    }
}

/// What an `update` or `delete` applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Every dependency in the manifest
    All,
    /// A single dependency by import path
    ImportPath(String),
}

impl Target {
    /// Choose between `--all` and a single import path argument
    pub fn select(verb: &str, all: bool, args: &[String]) -> Result<Self> {
        match (all, args) {
            (true, []) => Ok(Target::All),
            (false, [path]) => Ok(Target::ImportPath(path.clone())),
            (true, [_]) => bail!("{verb}: you cannot specify path and --all flag at once"),
            _ => bail!("{verb}: import path or --all flag is missing"),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::All => write!(f, "all"),
            Target::ImportPath(path) => write!(f, "{}", path),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! A backend that records the requests it receives

    use std::cell::RefCell;
    use std::path::PathBuf;

    use anyhow::Result;

    use super::delete::DeleteRequest;
    use super::fetch::FetchRequest;
    use super::list::ListRequest;
    use super::update::UpdateRequest;
    use crate::backend::VendorBackend;
    use crate::project::ProjectContext;
    use crate::toolchain::Toolchain;

    #[derive(Debug)]
    pub struct StubToolchain;

    impl Toolchain for StubToolchain {
        fn name(&self) -> &str {
            "stub"
        }

        fn path(&self) -> Option<PathBuf> {
            None
        }
    }

    pub fn context() -> ProjectContext {
        let root = PathBuf::from("/tmp/proj");
        let dirs = ProjectContext::standard_source_dirs(&root);
        ProjectContext::new(root, dirs, Box::new(StubToolchain)).unwrap()
    }

    #[derive(Debug, Default)]
    pub struct RecordingBackend {
        pub calls: RefCell<Vec<String>>,
    }

    impl RecordingBackend {
        fn record(&self, call: String) -> Result<()> {
            self.calls.borrow_mut().push(call);
            Ok(())
        }
    }

    impl VendorBackend for RecordingBackend {
        fn fetch(&self, _ctx: &ProjectContext, request: &FetchRequest) -> Result<()> {
            self.record(format!("fetch {request}"))
        }

        fn update(&self, _ctx: &ProjectContext, request: &UpdateRequest) -> Result<()> {
            self.record(format!("update {request}"))
        }

        fn list(&self, _ctx: &ProjectContext, request: &ListRequest) -> Result<()> {
            self.record(format!("list {request}"))
        }

        fn delete(&self, _ctx: &ProjectContext, request: &DeleteRequest) -> Result<()> {
            self.record(format!("delete {request}"))
        }

        fn purge(&self, _ctx: &ProjectContext) -> Result<()> {
            self.record("purge".to_string())
        }
    }
}
