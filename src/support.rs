//! Crate-level supporting utilities.
//!
//! These modules are useful across model domains but are not themselves
//! models. Their APIs are public yet unstable; see the crate docs for the
//! utility code lifecycle.

pub mod constraint;
pub mod units;
