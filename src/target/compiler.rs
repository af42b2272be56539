// src/target/compiler.rs
//! Description of the compiler that built this crate.
//!
//! The values are probed once by `build.rs` (`rustc -vV`) and baked in as
//! environment constants, so querying them costs nothing at runtime.

/// Full `rustc -vV` banner line, e.g. `rustc 1.75.0 (82e1608df 2023-12-21)`.
pub const RUSTC_VERSION: &str = env!("SWAB_RUSTC_VERSION");

/// Semantic version of the compiler, e.g. `1.75.0` or `1.82.0-nightly`.
pub const RUSTC_SEMVER: &str = env!("SWAB_RUSTC_SEMVER");

/// Release channel: `stable`, `beta`, or `nightly`.
pub const RUSTC_CHANNEL: &str = env!("SWAB_RUSTC_CHANNEL");

/// Host triple of the compiler itself (not the compilation target).
pub const RUSTC_HOST: &str = env!("SWAB_RUSTC_HOST");

/// Commit hash the compiler was built from, or `unknown`.
pub const RUSTC_COMMIT: &str = env!("SWAB_RUSTC_COMMIT");

/// Parsed compiler version triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Compiler {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Compiler {
    /// The version of the compiler that built this crate.
    ///
    /// Falls back to `0.0.0` if the build script could not probe rustc,
    /// so version gates fail closed.
    pub fn current() -> Compiler {
        Self::parse(RUSTC_SEMVER).unwrap_or(Compiler {
            major: 0,
            minor: 0,
            patch: 0,
        })
    }

    /// Whether the compiler is at least `major.minor`.
    pub fn at_least(self, major: u32, minor: u32) -> bool {
        (self.major, self.minor) >= (major, minor)
    }

    fn parse(semver: &str) -> Option<Compiler> {
        // Strip any pre-release / build-metadata suffix first.
        let core = semver.split(['-', '+']).next()?;
        let mut parts = core.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        let patch = parts.next().unwrap_or("0").parse().ok()?;
        Some(Compiler {
            major,
            minor,
            patch,
        })
    }
}

impl std::fmt::Display for Compiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
