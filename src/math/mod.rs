//! Math module re-exports.
//!
//! The inverse cotangent is a thin identity wrapper over an arctangent
//! primitive. The primitive comes from the `libm` crate (fdlibm port, no_std)
//! rather than being reimplemented here, so this module carries no shared
//! bit-manipulation helpers of its own.

mod acot;

pub use acot::acot;
