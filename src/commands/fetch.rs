//! Fetch command - Vendor a remote dependency
//!
//! Usage:
//!   gb vendor fetch [--branch b] [--revision r | --tag t] [--precaire] [--no-recurse] importpath

use std::fmt;
use std::rc::Rc;

use anyhow::{bail, Result};
use clap::{Arg, ArgAction, Command};

use super::VendorCommand;
use crate::backend::VendorBackend;
use crate::flags::ParsedFlags;
use crate::project::ProjectContext;

/// Which point in the upstream history to fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// The latest revision of the branch
    Latest,
    Revision(String),
    Tag(String),
}

/// A request to vendor one import path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub import_path: String,
    /// Branch to fetch from; the upstream default branch when unset
    pub branch: Option<String>,
    pub reference: Reference,
    /// Also fetch the dependency's own dependencies
    pub recurse: bool,
    /// Allow insecure protocols
    pub insecure: bool,
}

impl FetchRequest {
    fn from_flags(flags: &ParsedFlags, args: &[String]) -> Result<Self> {
        let [import_path] = args else {
            bail!("fetch: import path missing");
        };

        let reference = if let Some(revision) = flags.value("revision") {
            Reference::Revision(revision.to_string())
        } else if let Some(tag) = flags.value("tag") {
            Reference::Tag(tag.to_string())
        } else {
            Reference::Latest
        };

        Ok(Self {
            import_path: import_path.clone(),
            branch: flags.value("branch").map(str::to_string),
            reference,
            recurse: !flags.flag("no-recurse"),
            insecure: flags.flag("precaire"),
        })
    }
}

impl fmt::Display for FetchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.import_path)?;
        if let Some(branch) = &self.branch {
            write!(f, " branch={}", branch)?;
        }
        match &self.reference {
            Reference::Latest => {}
            Reference::Revision(revision) => write!(f, " revision={}", revision)?,
            Reference::Tag(tag) => write!(f, " tag={}", tag)?,
        }
        write!(f, " recurse={} insecure={}", self.recurse, self.insecure)
    }
}

/// Vendor a remote dependency
pub struct Fetch {
    backend: Rc<dyn VendorBackend>,
}

impl Fetch {
    pub fn new(backend: Rc<dyn VendorBackend>) -> Self {
        Self { backend }
    }
}

impl VendorCommand for Fetch {
    fn name(&self) -> &'static str {
        "fetch"
    }

    fn usage_line(&self) -> &'static str {
        "fetch [--branch branch] [--revision rev | --tag tag] [--precaire] [--no-recurse] \
         importpath"
    }

    fn short(&self) -> &'static str {
        "fetch a remote dependency"
    }

    fn long(&self) -> &'static str {
        "fetch vendors an upstream import path.

The import path may include a url scheme. This may be useful when fetching
dependencies from private repositories that cannot be probed.

Flags:
	--branch branch
		fetch from the named branch. Will also be used by gb vendor update.
		If not supplied the default upstream branch will be used.
	--no-recurse
		do not fetch recursively.
	--tag tag
		fetch the specified tag. Cannot be combined with --branch or --revision.
	--revision rev
		fetch the specific revision from the branch or repository.
		If no revision supplied, the latest available will be fetched.
	--precaire
		allow the use of insecure protocols.

Long flags may also be written with a single dash, as in -branch.
"
    }

    fn customize_flags(&self, flags: Command) -> Command {
        flags
            .arg(
                Arg::new("branch")
                    .long("branch")
                    .value_name("BRANCH")
                    .conflicts_with("tag")
                    .help("Fetch from the named branch"),
            )
            .arg(
                Arg::new("revision")
                    .long("revision")
                    .value_name("REV")
                    .conflicts_with("tag")
                    .help("Fetch the specific revision"),
            )
            .arg(
                Arg::new("tag")
                    .long("tag")
                    .value_name("TAG")
                    .help("Fetch the specified tag"),
            )
            .arg(
                Arg::new("no-recurse")
                    .long("no-recurse")
                    .action(ArgAction::SetTrue)
                    .help("Do not fetch recursively"),
            )
            .arg(
                Arg::new("precaire")
                    .long("precaire")
                    .action(ArgAction::SetTrue)
                    .help("Allow the use of insecure protocols"),
            )
    }

    fn execute(&self, ctx: &ProjectContext, flags: &ParsedFlags, args: &[String]) -> Result<()> {
        let request = FetchRequest::from_flags(flags, args)?;
        tracing::debug!(import_path = %request.import_path, "fetching");
        self.backend.fetch(ctx, &request)
    }
}
