#![no_std]

#[cfg(test)]
extern crate std;

pub mod math;

pub use math::acot;
