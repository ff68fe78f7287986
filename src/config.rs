//! Settings read from the process environment
//!
//! gb runs plugins with the project directory in the environment. The
//! values are read once in `main` and passed down explicitly.

use std::ffi::OsString;

/// Project directory hint set by `gb`
pub const PROJECT_DIR_VAR: &str = "GB_PROJECT_DIR";

/// Enables debug diagnostics when set to a non-empty value
pub const DEBUG_VAR: &str = "GB_VENDOR_DEBUG";

/// Environment snapshot for one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// Project directory hint; empty when gb did not set it
    pub project_dir: String,
    /// Debug diagnostics requested
    pub debug: bool,
}

impl Environment {
    /// Read the environment of the current process
    pub fn from_env() -> Self {
        Self::from_vars(std::env::var_os(PROJECT_DIR_VAR), std::env::var_os(DEBUG_VAR))
    }

    /// Environment with only a project directory hint
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_project_dir(project_dir: impl Into<String>) -> Self {
        Self {
            project_dir: project_dir.into(),
            debug: false,
        }
    }

    fn from_vars(project_dir: Option<OsString>, debug: Option<OsString>) -> Self {
        Self {
            project_dir: project_dir
                .map(|dir| dir.to_string_lossy().into_owned())
                .unwrap_or_default(),
            debug: debug.is_some_and(|value| !value.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_from_vars() {
        let env = Environment::from_vars(Some("/tmp/proj".into()), Some("1".into()));
        assert_eq!(env.project_dir, "/tmp/proj");
        assert!(env.debug);

        let env = Environment::from_vars(None, Some("".into()));
        assert_eq!(env, Environment::default());
    }

    #[test]
    #[serial]
    fn test_from_env() {
        let saved = std::env::var_os(PROJECT_DIR_VAR);
        std::env::set_var(PROJECT_DIR_VAR, "/tmp/proj");

        let env = Environment::from_env();
        assert_eq!(env.project_dir, "/tmp/proj");

        match saved {
            Some(value) => std::env::set_var(PROJECT_DIR_VAR, value),
            None => std::env::remove_var(PROJECT_DIR_VAR),
        }
    }
}
