//! Supporting utilities used by models.
//!
//! Utility code starts inside a model's internal `core` module and moves
//! here once it is useful across models. Everything in this module is public
//! API, but not a stable one.

pub mod constraint;
pub mod units;
