//! List command - Print vendored dependencies, one per line
//!
//! Usage:
//!   gb vendor list [-f format]

use std::fmt;
use std::rc::Rc;

use anyhow::{bail, Result};
use clap::{Arg, Command};

use super::VendorCommand;
use crate::backend::VendorBackend;
use crate::flags::ParsedFlags;
use crate::project::ProjectContext;

/// Default template for one manifest entry
pub const DEFAULT_FORMAT: &str = "{importpath}\t{repository}{path}\t{branch}\t{revision}";

/// A request to print manifest entries with a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub format: String,
}

impl fmt::Display for ListRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "format={:?}", self.format)
    }
}

/// List dependencies, one per line
pub struct List {
    backend: Rc<dyn VendorBackend>,
}

impl List {
    pub fn new(backend: Rc<dyn VendorBackend>) -> Self {
        Self { backend }
    }
}

impl VendorCommand for List {
    fn name(&self) -> &'static str {
        "list"
    }

    fn usage_line(&self) -> &'static str {
        "list [-f format]"
    }

    fn short(&self) -> &'static str {
        "lists dependencies, one per line"
    }

    fn long(&self) -> &'static str {
        "list formats the contents of the manifest file.

Flags:
	-f, --format
		controls the template used for printing each manifest entry. If not supplied
		the default value is \"{importpath}\\t{repository}{path}\\t{branch}\\t{revision}\"
"
    }

    fn customize_flags(&self, flags: Command) -> Command {
        flags.arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .default_value(DEFAULT_FORMAT)
                .help("Template used for each manifest entry"),
        )
    }

    fn execute(&self, ctx: &ProjectContext, flags: &ParsedFlags, args: &[String]) -> Result<()> {
        if !args.is_empty() {
            bail!("list: unexpected arguments {:?}", args);
        }
        let request = ListRequest {
            format: flags.value("format").unwrap_or(DEFAULT_FORMAT).to_string(),
        };
        self.backend.list(ctx, &request)
    }
}
