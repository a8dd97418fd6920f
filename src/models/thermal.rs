//! Thermal systems models.
//!
//! This module contains models for heat integration of thermal process
//! streams.

pub mod pinch;
