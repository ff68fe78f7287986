//! The resolved project a command runs against

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::toolchain::Toolchain;

/// Name of the vendor manifest inside `<root>/vendor`
pub const MANIFEST_FILE: &str = "manifest";

/// A resolved project: root, source directories and toolchain
///
/// Built once per invocation and never mutated afterwards.
#[derive(Debug)]
pub struct ProjectContext {
    root: PathBuf,
    source_dirs: Vec<PathBuf>,
    toolchain: Box<dyn Toolchain>,
}

impl ProjectContext {
    /// Create a context for the project at `root`
    pub fn new(
        root: impl Into<PathBuf>,
        source_dirs: Vec<PathBuf>,
        toolchain: Box<dyn Toolchain>,
    ) -> Result<Self> {
        let root = root.into();
        if !root.is_absolute() {
            bail!("project root {} is not an absolute path", root.display());
        }
        if source_dirs.is_empty() {
            bail!("project {} has no source directories", root.display());
        }
        Ok(Self {
            root,
            source_dirs,
            toolchain,
        })
    }

    /// The two source directories every project has: `src` and `vendor/src`
    pub fn standard_source_dirs(root: &Path) -> Vec<PathBuf> {
        vec![root.join("src"), root.join("vendor").join("src")]
    }

    /// Project root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Source directories, in lookup order
    pub fn source_dirs(&self) -> &[PathBuf] {
        &self.source_dirs
    }

    pub fn toolchain(&self) -> &dyn Toolchain {
        self.toolchain.as_ref()
    }

    /// Directory vendored packages are copied into
    pub fn vendor_dir(&self) -> PathBuf {
        self.root.join("vendor").join("src")
    }

    /// Location of the vendor manifest; never opened here
    pub fn manifest_file(&self) -> PathBuf {
        self.root.join("vendor").join(MANIFEST_FILE)
    }
}
