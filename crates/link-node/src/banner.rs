//! Build information for the startup banner

use std::fmt;

/// Build facts logged once at startup.
#[derive(Debug, Clone, Copy)]
pub struct BuildInfo {
    /// Crate name.
    pub name: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Compilation profile, `debug` or `release`.
    pub profile: &'static str,
    /// Target operating system.
    pub target_os: &'static str,
    /// Target architecture.
    pub target_arch: &'static str,
}

impl BuildInfo {
    /// Facts about the running binary.
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            profile: if cfg!(debug_assertions) {
                "debug"
            } else {
                "release"
            },
            target_os: std::env::consts::OS,
            target_arch: std::env::consts::ARCH,
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} v{} ({} build, {}/{})",
            self.name, self.version, self.profile, self.target_os, self.target_arch
        )
    }
}
