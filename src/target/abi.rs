// src/target/abi.rs

/// Binary-interface environment of the build target.
///
/// This is the toolchain/libc flavor (the `-gnu` / `-musl` / `-msvc`
/// component of the target triple), which is what actually determines
/// calling and layout compatibility between artifacts on the same OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Abi {
    Gnu,
    Musl,
    Msvc,
    Uclibc,
    Sgx,
    /// The target triple carries no environment component (e.g. macOS).
    None,
}

/// ABI environment of the build target.
pub const ABI: Abi = Abi::current();

impl Abi {
    /// The ABI environment this crate was compiled for.
    pub const fn current() -> Abi {
        if cfg!(target_env = "gnu") {
            Abi::Gnu
        } else if cfg!(target_env = "musl") {
            Abi::Musl
        } else if cfg!(target_env = "msvc") {
            Abi::Msvc
        } else if cfg!(target_env = "uclibc") {
            Abi::Uclibc
        } else if cfg!(target_env = "sgx") {
            Abi::Sgx
        } else {
            Abi::None
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Abi::Gnu => "gnu",
            Abi::Musl => "musl",
            Abi::Msvc => "msvc",
            Abi::Uclibc => "uclibc",
            Abi::Sgx => "sgx",
            Abi::None => "none",
        }
    }
}
