//! The vendoring backend the commands hand their requests to
//!
//! Fetching, updating and pruning vendored sources lives behind
//! [`VendorBackend`]. The binary ships [`ReportingBackend`], which prints
//! each request it receives.

use anyhow::Result;

use crate::commands::delete::DeleteRequest;
use crate::commands::fetch::FetchRequest;
use crate::commands::list::ListRequest;
use crate::commands::update::UpdateRequest;
use crate::project::ProjectContext;

/// Operations on the project's vendored dependencies
pub trait VendorBackend {
    /// Vendor a remote dependency and record it in the manifest
    fn fetch(&self, ctx: &ProjectContext, request: &FetchRequest) -> Result<()>;

    /// Replace vendored sources with the head of their fetched branch
    fn update(&self, ctx: &ProjectContext, request: &UpdateRequest) -> Result<()>;

    /// Print manifest entries
    fn list(&self, ctx: &ProjectContext, request: &ListRequest) -> Result<()>;

    /// Remove vendored sources and their manifest entries
    fn delete(&self, ctx: &ProjectContext, request: &DeleteRequest) -> Result<()>;

    /// Remove vendored packages nothing in the project imports
    fn purge(&self, ctx: &ProjectContext) -> Result<()>;
}

/// Prints each request with the manifest it applies to
#[derive(Debug, Default, Clone, Copy)]
pub struct ReportingBackend;

impl ReportingBackend {
    fn report(
        &self,
        ctx: &ProjectContext,
        verb: &str,
        detail: &dyn std::fmt::Display,
    ) -> Result<()> {
        println!("{}", render(ctx, verb, detail));
        Ok(())
    }
}

/// One report line: verb, request, manifest path and toolchain
fn render(ctx: &ProjectContext, verb: &str, detail: &dyn std::fmt::Display) -> String {
    let detail = detail.to_string();
    let mut line = verb.to_string();
    if !detail.is_empty() {
        line.push(' ');
        line.push_str(&detail);
    }
    format!(
        "{} manifest={} toolchain={}",
        line,
        ctx.manifest_file().display(),
        ctx.toolchain().name()
    )
}

impl VendorBackend for ReportingBackend {
    fn fetch(&self, ctx: &ProjectContext, request: &FetchRequest) -> Result<()> {
        self.report(ctx, "fetch", request)
    }

    fn update(&self, ctx: &ProjectContext, request: &UpdateRequest) -> Result<()> {
        self.report(ctx, "update", request)
    }

    fn list(&self, ctx: &ProjectContext, request: &ListRequest) -> Result<()> {
        self.report(ctx, "list", request)
    }

    fn delete(&self, ctx: &ProjectContext, request: &DeleteRequest) -> Result<()> {
        self.report(ctx, "delete", request)
    }

    fn purge(&self, ctx: &ProjectContext) -> Result<()> {
        self.report(ctx, "purge", &"")
    }
}
