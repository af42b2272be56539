// src/lib.rs
//! # swab-rs
//!
//! Byte-order conversion for fixed-width integers, plus a description of
//! the build target (OS, architecture, ABI, byte order, cache geometry,
//! compiler) surfaced as plain compile-time constants.
//!
//! ## Features
//!
//! - **Branch-free swaps**: scalar swaps compile to the native byte-reverse
//!   instruction; buffer forms come in width-fixed variants with no runtime
//!   dispatch
//! - **Explicit remainder policy**: buffer operations convert every whole
//!   element and pass trailing bytes through unmodified, reporting how many
//!   bytes were converted
//! - **Host-order aware**: conversions against the host order degenerate to
//!   plain copies, decided once per call
//! - **Contract-checked**: unsupported widths and undersized destinations
//!   are rejected before any byte moves
//! - **Target description as data**: `Target::HOST` instead of `cfg`
//!   attributes sprinkled through portability logic
//!
//! ## Quick Start
//!
//! ### Swapping buffers
//!
//! ```rust
//! use swab_rs::*;
//!
//! fn main() -> Result<()> {
//!     let samples = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
//!     let mut swapped = [0u8; 6];
//!
//!     // Reverse each 16-bit element independently.
//!     swap_buffer(&mut swapped, &samples, ElementWidth::W16)?;
//!     assert_eq!(swapped, [0x02, 0x01, 0x04, 0x03, 0x06, 0x05]);
//!     Ok(())
//! }
//! ```
//!
//! ### Converting to a wire order
//!
//! ```rust
//! use swab_rs::*;
//!
//! fn main() -> Result<()> {
//!     let readings: [u32; 2] = [0x01020304, 0x05060708];
//!     let host_bytes: Vec<u8> = readings.iter().flat_map(|v| v.to_ne_bytes()).collect();
//!
//!     let mut wire = vec![0u8; host_bytes.len()];
//!     encode(&mut wire, &host_bytes, ElementWidth::W32, Endianness::Big)?;
//!     assert_eq!(wire, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]);
//!     Ok(())
//! }
//! ```
//!
//! ### Inspecting the build target
//!
//! ```rust
//! use swab_rs::target::Target;
//!
//! let t = Target::HOST;
//! println!("built for {}-{}, {} endian, {}-byte cache lines",
//!          t.arch.name(), t.os.name(), t.endianness.name(), t.cache_line_size);
//! ```

// Modules
pub mod buf;
pub mod convert;
pub mod error;
pub mod swap;
pub mod target;
pub mod width;

// Re-export commonly used types at the crate root for convenience
pub use error::{Result, SwabError};

pub use width::ElementWidth;

// Swap exports
pub use swap::{
    swap16,
    swap32,
    swap64,
    swap_buffer,
    swap_buffer16,
    swap_buffer32,
    swap_buffer64,
    swap_buffer_in_place,
    swap_copy,
    swap_in_place,
    swap_slice_in_place,
};

// Conversion exports
pub use convert::{decode, decode_in_place, encode, encode_in_place};

pub use buf::OrderedBuf;

// Target exports
pub use target::{Endianness, Target, CACHE_LINE_SIZE, HOST_ENDIAN};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use swab_rs::prelude::*;
    //! ```

    pub use crate::error::{Result, SwabError};
    pub use crate::width::ElementWidth;
    pub use crate::swap::{swap_buffer, swap_buffer_in_place, swap_copy, swap_in_place};
    pub use crate::convert::{decode, encode};
    pub use crate::buf::OrderedBuf;
    pub use crate::target::{Endianness, Target};
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
