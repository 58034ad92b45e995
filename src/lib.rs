#![cfg_attr(feature = "nightly", feature(test))]
#[cfg(feature = "nightly")]
extern crate test;

pub mod ops;
pub mod optional;

pub use ops::combinator::{filter, flat_map, for_each, map};
pub use optional::{Absent, AccessError, Optional, Present, absent, present};
