//! # Twine Pinch
//!
//! Pinch analysis (minimum-utility targeting) models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given a set of process thermal streams and a minimum approach temperature,
//! this crate builds the classic problem-table cascade: it places every
//! stream on a common shifted temperature scale, decomposes the combined
//! stream endpoints into temperature intervals, cascades the interval heat
//! balances from the hottest interval down, and corrects the cascade so that
//! every residual heat flow is thermodynamically deliverable. The corrected
//! cascade yields the minimum hot and cold utility targets, the pinch
//! temperature, and each stream's duty split across the pinch.
//!
//! The analysis stops at targeting. Matching streams into an exchanger
//! network, choosing among multiple utility levels, and drawing composite
//! curves are left to consumers of the interval table and duty splits.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
