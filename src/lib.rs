//! Base definitions shared across embedded firmware projects.
//!
//! - [`status`]: generic status codes ([`Status`]) and their categories
//! - [`var_type`]: variable type tags ([`VarType`]) with width/sign/array decoding
//! - [`timeout`]: wrap-aware timeout checks on free-running counters
//! - [`counter`]: DWT cycle counter and millisecond tick
//! - [`bits`], [`cmp`], [`array`]: bit helpers, min/max/clamp, array length
//! - [`status_log`]: status ring buffer with levels (and `defmt` output on ARM)
//! - [`config`]: compile-time configuration
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib --target x86_64-unknown-linux-gnu
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), while the crate itself is
//! `no_std` on the target.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod config;
pub mod error;
pub mod status_log;

mod ops {
    pub mod array;
    pub mod bits;
    pub mod cmp;
}

mod tags {
    pub mod status;
    pub mod var_type;
}

mod time {
    pub mod counter;
    pub mod timeout;
}

pub use error::{Error, Result};
pub use ops::{array, bits, cmp};
pub use tags::{status, var_type};
pub use time::{counter, timeout};

// Re-export commonly used items
pub use bits::Bits;
pub use status::{Status, StatusCategory};
pub use timeout::{Timeout, WrappingCounter, is_timed_out};
pub use var_type::VarType;
