//! Purge command - Remove vendored packages nothing imports

use std::rc::Rc;

use anyhow::{bail, Result};

use super::VendorCommand;
use crate::backend::VendorBackend;
use crate::flags::ParsedFlags;
use crate::project::ProjectContext;

/// Purge all unreferenced dependencies
pub struct Purge {
    backend: Rc<dyn VendorBackend>,
}

impl Purge {
    pub fn new(backend: Rc<dyn VendorBackend>) -> Self {
        Self { backend }
    }
}

impl VendorCommand for Purge {
    fn name(&self) -> &'static str {
        "purge"
    }

    fn usage_line(&self) -> &'static str {
        "purge"
    }

    fn short(&self) -> &'static str {
        "purges all unreferenced dependencies"
    }

    fn long(&self) -> &'static str {
        "purge removes all unreferenced dependencies from $PROJECT/vendor/src.\n"
    }

    fn execute(&self, ctx: &ProjectContext, _flags: &ParsedFlags, args: &[String]) -> Result<()> {
        if !args.is_empty() {
            bail!("purge: unexpected arguments {:?}", args);
        }
        self.backend.purge(ctx)
    }
}
