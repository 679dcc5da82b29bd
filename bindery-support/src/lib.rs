//! # Bindery Support
//!
//! Shared utilities for the Bindery container crates.
//!
//! This crate provides:
//! - Text rendering for error messages (key chains, short type names,
//!   "did you mean?" suggestions)
//! - Validation of the free-form names used for aliases

pub mod names;
pub mod rendering;
