// src/target/os.rs

/// Operating system the crate was compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    Linux,
    Macos,
    Ios,
    Windows,
    Android,
    FreeBsd,
    NetBsd,
    OpenBsd,
    Dragonfly,
    Solaris,
    Illumos,
    Fuchsia,
    Haiku,
    Wasi,
    Unknown,
}

/// Broad platform family, one step coarser than [`Os`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Unix,
    Windows,
    Wasm,
    Unknown,
}

/// Operating system of the build target.
pub const OS: Os = Os::current();

/// Platform family of the build target.
pub const FAMILY: Family = Family::current();

pub const IS_LINUX: bool = cfg!(target_os = "linux");
pub const IS_MACOS: bool = cfg!(target_os = "macos");
pub const IS_WINDOWS: bool = cfg!(target_os = "windows");

impl Os {
    /// The operating system this crate was compiled for.
    pub const fn current() -> Os {
        if cfg!(target_os = "linux") {
            Os::Linux
        } else if cfg!(target_os = "macos") {
            Os::Macos
        } else if cfg!(target_os = "ios") {
            Os::Ios
        } else if cfg!(target_os = "windows") {
            Os::Windows
        } else if cfg!(target_os = "android") {
            Os::Android
        } else if cfg!(target_os = "freebsd") {
            Os::FreeBsd
        } else if cfg!(target_os = "netbsd") {
            Os::NetBsd
        } else if cfg!(target_os = "openbsd") {
            Os::OpenBsd
        } else if cfg!(target_os = "dragonfly") {
            Os::Dragonfly
        } else if cfg!(target_os = "solaris") {
            Os::Solaris
        } else if cfg!(target_os = "illumos") {
            Os::Illumos
        } else if cfg!(target_os = "fuchsia") {
            Os::Fuchsia
        } else if cfg!(target_os = "haiku") {
            Os::Haiku
        } else if cfg!(target_os = "wasi") {
            Os::Wasi
        } else {
            Os::Unknown
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Os::Linux => "linux",
            Os::Macos => "macos",
            Os::Ios => "ios",
            Os::Windows => "windows",
            Os::Android => "android",
            Os::FreeBsd => "freebsd",
            Os::NetBsd => "netbsd",
            Os::OpenBsd => "openbsd",
            Os::Dragonfly => "dragonfly",
            Os::Solaris => "solaris",
            Os::Illumos => "illumos",
            Os::Fuchsia => "fuchsia",
            Os::Haiku => "haiku",
            Os::Wasi => "wasi",
            Os::Unknown => "unknown",
        }
    }

    /// Whether the system exposes a POSIX-like API surface.
    pub const fn is_posix(self) -> bool {
        matches!(
            self,
            Os::Linux
                | Os::Macos
                | Os::Ios
                | Os::Android
                | Os::FreeBsd
                | Os::NetBsd
                | Os::OpenBsd
                | Os::Dragonfly
                | Os::Solaris
                | Os::Illumos
                | Os::Haiku
        )
    }

    /// Whether the system is one of the BSD descendants.
    pub const fn is_bsd(self) -> bool {
        matches!(
            self,
            Os::FreeBsd | Os::NetBsd | Os::OpenBsd | Os::Dragonfly | Os::Macos | Os::Ios
        )
    }
}

impl Family {
    pub const fn current() -> Family {
        if cfg!(target_family = "unix") {
            Family::Unix
        } else if cfg!(target_family = "windows") {
            Family::Windows
        } else if cfg!(target_family = "wasm") {
            Family::Wasm
        } else {
            Family::Unknown
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Family::Unix => "unix",
            Family::Windows => "windows",
            Family::Wasm => "wasm",
            Family::Unknown => "unknown",
        }
    }
}
