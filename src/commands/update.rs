//! Update command - Replace a vendored dependency with its latest upstream
//!
//! Usage:
//!   gb vendor update [--all] [--precaire] importpath

use std::fmt;
use std::rc::Rc;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};

use super::{Target, VendorCommand};
use crate::backend::VendorBackend;
use crate::flags::ParsedFlags;
use crate::project::ProjectContext;

/// A request to update one or all vendored dependencies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    pub target: Target,
    /// Allow insecure protocols
    pub insecure: bool,
}

impl fmt::Display for UpdateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} insecure={}", self.target, self.insecure)
    }
}

/// Update a local dependency
pub struct Update {
    backend: Rc<dyn VendorBackend>,
}

impl Update {
    pub fn new(backend: Rc<dyn VendorBackend>) -> Self {
        Self { backend }
    }
}

impl VendorCommand for Update {
    fn name(&self) -> &'static str {
        "update"
    }

    fn usage_line(&self) -> &'static str {
        "update [--all] [--precaire] importpath"
    }

    fn short(&self) -> &'static str {
        "update a local dependency"
    }

    fn long(&self) -> &'static str {
        "update replaces the source with the latest available from the head of the fetched branch.

Updating from one copy of a dependency to another is ONLY possible when the
dependency was fetched by branch, without using --tag or --revision. It will be
updated to the HEAD of that branch; switching branches is not supported.

To update across branches, or from one tag/revision to another tag/revision,
use gb vendor delete, then gb vendor fetch.

Flags:
	--all
		update all dependencies in the manifest, otherwise only the dependency supplied.
	--precaire
		allow the use of insecure protocols.
"
    }

    fn customize_flags(&self, flags: Command) -> Command {
        flags
            .arg(
                Arg::new("all")
                    .long("all")
                    .action(ArgAction::SetTrue)
                    .help("Update all dependencies in the manifest"),
            )
            .arg(
                Arg::new("precaire")
                    .long("precaire")
                    .action(ArgAction::SetTrue)
                    .help("Allow the use of insecure protocols"),
            )
    }

    fn execute(&self, ctx: &ProjectContext, flags: &ParsedFlags, args: &[String]) -> Result<()> {
        let request = UpdateRequest {
            target: Target::select(self.name(), flags.flag("all"), args)?,
            insecure: flags.flag("precaire"),
        };
        self.backend.update(ctx, &request)
    }
}
