//! Delete command - Remove a vendored dependency
//!
//! Usage:
//!   gb vendor delete [--all] importpath

use std::fmt;
use std::rc::Rc;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};

use super::{Target, VendorCommand};
use crate::backend::VendorBackend;
use crate::flags::ParsedFlags;
use crate::project::ProjectContext;

/// A request to delete one or all vendored dependencies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub target: Target,
}

impl fmt::Display for DeleteRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target)
    }
}

/// Delete a local dependency
pub struct Delete {
    backend: Rc<dyn VendorBackend>,
}

impl Delete {
    pub fn new(backend: Rc<dyn VendorBackend>) -> Self {
        Self { backend }
    }
}

impl VendorCommand for Delete {
    fn name(&self) -> &'static str {
        "delete"
    }

    fn usage_line(&self) -> &'static str {
        "delete [--all] importpath"
    }

    fn short(&self) -> &'static str {
        "deletes a local dependency"
    }

    fn long(&self) -> &'static str {
        "delete removes a dependency from $PROJECT/vendor/src and the vendor manifest.

Flags:
	--all
		remove all dependencies.
"
    }

    fn customize_flags(&self, flags: Command) -> Command {
        flags.arg(
            Arg::new("all")
                .long("all")
                .action(ArgAction::SetTrue)
                .help("Remove all dependencies"),
        )
    }

    fn execute(&self, ctx: &ProjectContext, flags: &ParsedFlags, args: &[String]) -> Result<()> {
        let request = DeleteRequest {
            target: Target::select(self.name(), flags.flag("all"), args)?,
        };
        self.backend.delete(ctx, &request)
    }
}
