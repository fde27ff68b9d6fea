use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable holding the absolute install root.
pub const PREFIX_VAR: &str = "MESON_INSTALL_PREFIX";

/// Environment variable signalling a staged install (set and non-empty).
pub const DESTDIR_VAR: &str = "DESTDIR";

/// Install environment handed to the hook by the build system.
#[derive(Debug, Clone)]
pub struct InstallEnv {
    prefix: PathBuf,
    destdir: Option<OsString>,
}

impl InstallEnv {
    pub fn new(prefix: PathBuf, destdir: Option<OsString>) -> Self {
        Self { prefix, destdir }
    }

    /// Read the install environment from process environment variables.
    ///
    /// `MESON_INSTALL_PREFIX` is required; a missing value is an error before
    /// anything else runs. `DESTDIR` is optional.
    pub fn from_env() -> Result<Self> {
        let prefix = std::env::var_os(PREFIX_VAR)
            .with_context(|| format!("{} is not set (must be run as a meson install script)", PREFIX_VAR))?;

        Ok(Self::new(PathBuf::from(prefix), std::env::var_os(DESTDIR_VAR)))
    }

    /// Install root under which the package files were staged.
    pub fn prefix(&self) -> &Path {
        &self.prefix
    }

    /// True when installing into a staging root (DESTDIR set and non-empty).
    ///
    /// Staged installs must not touch the live system's shared caches.
    pub fn is_staged(&self) -> bool {
        self.destdir.as_deref().is_some_and(|d| !d.is_empty())
    }
}
