//! Label matching engine and scoring algorithms.
//!
//! This module provides the core classification functionality:
//!
//! - [`ClassifierEngine`]: main entry point for classifying labels
//! - [`classify_label`]: validated boundary wrapper around the engine
//! - [`similarity`]: normalized similarity ratio between two labels
//! - [`edit_distance`]: unit-cost Levenshtein distance
//!
//! ## Matching Algorithm
//!
//! Classification is priority-ordered; the first rule that matches wins:
//!
//! 1. **Exact name**: the raw label equals a canonical catalog name
//! 2. **Known alias**: the raw label equals a normalized alias key
//! 3. **Fuzzy scan**: every catalog name is pushed through three gates —
//!    first letter, length ratio, similarity threshold — and the surviving
//!    scores decide between a new alias, an ambiguous tie, and a new strain
//!
//! ## Example
//!
//! ```rust,no_run
//! use strain_solver::{ClassifierEngine, MatchingConfig, StrainCatalog};
//!
//! let catalog = StrainCatalog::load_embedded().unwrap();
//! let engine = ClassifierEngine::new(&catalog);
//!
//! let outcome = engine.classify("Mr. Grim");
//! println!("{outcome:?}");
//! ```
//!
//! [`ClassifierEngine`]: engine::ClassifierEngine
//! [`classify_label`]: engine::classify_label
//! [`similarity`]: scoring::similarity
//! [`edit_distance`]: distance::edit_distance

pub mod distance;
pub mod engine;
pub mod normalize;
pub mod scoring;
