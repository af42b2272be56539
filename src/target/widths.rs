// src/target/widths.rs
//! Integer width constants for the build target.
//!
//! Rust fixes the width of every named integer type, so most of these are
//! the same on all targets; only the pointer-sized pair varies. They are
//! grouped here so downstream code can query widths from one place instead
//! of mixing `::BITS` lookups into portability logic.

pub const I8_WIDTH: u32 = i8::BITS;
pub const I16_WIDTH: u32 = i16::BITS;
pub const I32_WIDTH: u32 = i32::BITS;
pub const I64_WIDTH: u32 = i64::BITS;
pub const I128_WIDTH: u32 = i128::BITS;

pub const U8_WIDTH: u32 = u8::BITS;
pub const U16_WIDTH: u32 = u16::BITS;
pub const U32_WIDTH: u32 = u32::BITS;
pub const U64_WIDTH: u32 = u64::BITS;
pub const U128_WIDTH: u32 = u128::BITS;

/// Width of `isize` / `usize`, equal to the pointer width.
pub const ISIZE_WIDTH: u32 = isize::BITS;
pub const USIZE_WIDTH: u32 = usize::BITS;

/// Width of the largest integer type the target supports natively.
pub const MAX_WIDTH: u32 = u128::BITS;
