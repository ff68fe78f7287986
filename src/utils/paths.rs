//! Project root resolution

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Locates the project root from a directory hint
pub trait ProjectRootResolver {
    /// Resolve `hint` to the absolute path of the project root
    fn find_project_root(&self, hint: &str) -> Result<PathBuf>;
}

/// Resolves the project root by searching the filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct FsRootResolver;

impl ProjectRootResolver for FsRootResolver {
    fn find_project_root(&self, hint: &str) -> Result<PathBuf> {
        if hint.is_empty() {
            bail!("project root is blank");
        }
        find_project_root_from(Path::new(hint))
    }
}

/// Find the project root starting from a specific directory
///
/// `start` is canonicalized first, so `..` components and symlinks are
/// resolved before the walk. The project root is the first directory,
/// walking toward the filesystem root, that contains a `src` directory.
/// The filesystem root itself is never a project root.
pub fn find_project_root_from(start: &Path) -> Result<PathBuf> {
    let start = fs::canonicalize(start)
        .with_context(|| format!("Failed to resolve project directory {}", start.display()))?;

    let mut dir = start.as_path();
    while let Some(parent) = dir.parent() {
        let src = dir.join("src");
        match fs::metadata(&src) {
            Ok(meta) if meta.is_dir() => return Ok(dir.to_path_buf()),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to stat {}", src.display()));
            }
        }
        dir = parent;
    }

    bail!(
        "could not find project root in {:?} or its parents",
        start.display().to_string()
    )
}
