// src/target/mod.rs
//! Build-target description.
//!
//! Everything in this module is fixed the moment the crate is compiled:
//! the operating system, processor architecture, ABI environment, byte
//! order, pointer width, cache-line size, and the compiler itself. The
//! constants exist so portability decisions read as ordinary `if`/`match`
//! over plain values instead of `cfg` attributes scattered through the
//! codebase; the compiler folds them away just the same.

mod abi;
mod byte_order;
mod cache;
pub mod compiler;
mod os;
mod processor;
pub mod tls;
pub mod widths;

pub use abi::{Abi, ABI};
pub use byte_order::{Endianness, FLOAT_WORD_ORDER, HOST_ENDIAN};
pub use cache::{CachePadded, CACHE_LINE_SIZE};
pub use compiler::Compiler;
pub use os::{Family, Os, FAMILY, IS_LINUX, IS_MACOS, IS_WINDOWS, OS};
pub use processor::{is_aligned, Arch, ARCH, POINTER_WIDTH};

/// Description of the build target as one plain value.
///
/// Useful when the target needs to travel (into a log line, a diagnostic
/// report, a cache key) rather than gate a branch.
///
/// # Example
///
/// ```
/// use swab_rs::target::Target;
///
/// let target = Target::HOST;
/// println!("{}-{} ({} endian)", target.arch.name(), target.os.name(),
///          target.endianness.name());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub os: Os,
    pub family: Family,
    pub arch: Arch,
    pub abi: Abi,
    pub endianness: Endianness,
    pub pointer_width: u32,
    pub cache_line_size: usize,
}

impl Target {
    /// The target this crate was compiled for.
    pub const HOST: Target = Target {
        os: OS,
        family: FAMILY,
        arch: ARCH,
        abi: ABI,
        endianness: HOST_ENDIAN,
        pointer_width: POINTER_WIDTH,
        cache_line_size: CACHE_LINE_SIZE,
    };
}
