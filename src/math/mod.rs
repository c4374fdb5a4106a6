//! Arithmetic utilities for pool and router calculations.
//!
//! - [`CheckedArithmetic`]: `?`-friendly checked ops on domain quantities.
//! - [`mul_div`], [`sqrt_product`], [`isqrt`]: 256-bit intermediates for
//!   reserve products, so no computation silently wraps.
//!
//! No floating point is used anywhere; every division floors.

mod checked;
mod wide;

pub use checked::CheckedArithmetic;
pub use wide::{isqrt, mul_div, narrow, sqrt_product, widen};
