//! Toolchain detection
//!
//! The toolchain is an opaque capability carried by the project context.
//! Vendoring never compiles anything, so detection only records what it
//! finds; it fails only when the environment points at something that
//! cannot be a toolchain.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

/// Generic toolchain trait
pub trait Toolchain: fmt::Debug {
    /// Get the toolchain name
    fn name(&self) -> &str;

    /// Get the path to the toolchain installation (if known)
    fn path(&self) -> Option<PathBuf>;
}

/// The standard `gc` toolchain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GcToolchain {
    goroot: Option<PathBuf>,
}

impl GcToolchain {
    /// Detect the `gc` toolchain from `GOROOT` or the `go` executable on `PATH`
    pub fn detect() -> Result<Self> {
        if let Some(goroot) = get_env_path("GOROOT") {
            if !is_valid_directory(&goroot) {
                bail!("GOROOT {} is not a directory", goroot.display());
            }
            return Ok(Self {
                goroot: Some(goroot),
            });
        }

        // $GOROOT/bin/go
        let goroot = find_executable("go")
            .and_then(|go| go.canonicalize().ok())
            .and_then(|go| go.parent().and_then(Path::parent).map(Path::to_path_buf));
        Ok(Self { goroot })
    }
}

impl Toolchain for GcToolchain {
    fn name(&self) -> &str {
        "gc"
    }

    fn path(&self) -> Option<PathBuf> {
        self.goroot.clone()
    }
}

/// Construct the default toolchain
pub fn default_toolchain() -> Result<Box<dyn Toolchain>> {
    Ok(Box::new(GcToolchain::detect()?))
}

/// Find an executable in PATH
pub fn find_executable(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}

/// Get a non-empty environment variable as PathBuf
pub fn get_env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Check if a path exists and is a directory
pub fn is_valid_directory(path: &Path) -> bool {
    path.exists() && path.is_dir()
}
