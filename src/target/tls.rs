// src/target/tls.rs
//! Thread-local storage declaration surface.
//!
//! C and C++ toolchains each spell thread-local storage differently
//! (`__thread`, `__declspec(thread)`, `thread_local`); Rust has exactly
//! one spelling on every target. The alias below gives portability layers
//! a keyword-style name to standardize on, and pins down that no
//! per-compiler selection is needed here.
//!
//! ```
//! use std::cell::Cell;
//!
//! swab_rs::target::tls::thread_local_storage! {
//!     static COUNTER: Cell<u32> = Cell::new(0);
//! }
//!
//! COUNTER.with(|c| c.set(c.get() + 1));
//! ```

pub use std::thread_local as thread_local_storage;
