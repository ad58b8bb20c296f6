//! Core data types for strains and classification outcomes.
//!
//! This module defines:
//!
//! - [`KnownStrain`]: a catalog entry with its canonical name and aliases
//! - [`Outcome`]: the five-way classification result for a query label
//! - [`Confidence`]: coarse confidence level derived from a similarity score
//!
//! [`KnownStrain`]: strain::KnownStrain
//! [`Outcome`]: types::Outcome
//! [`Confidence`]: types::Confidence

pub mod strain;
pub mod types;
