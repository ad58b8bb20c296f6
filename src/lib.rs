//! # strain-solver
//!
//! A library for classifying strain name labels against a catalog of known
//! strains and aliases.
//!
//! Dispensary intake data is full of creative spellings: the same strain
//! shows up as "AK-47", "ak47", or "AK 47", and genuinely new strains arrive
//! alongside typos of old ones. `strain-solver` decides which is which by
//! checking exact names and known aliases first, then falling back to fuzzy
//! matching over normalized Levenshtein similarity.
//!
//! ## Outcomes
//!
//! Every query produces exactly one [`Outcome`]:
//!
//! - **`ExistingStrain`**: the label is already a canonical entry
//! - **`KnownAlias`**: the label is a recorded alias of a canonical entry
//! - **`NewAlias`**: a single catalog entry matches above the threshold
//! - **`AmbiguousMatches`**: two or more entries tie at the best score
//! - **`NewStrain`**: nothing qualifies
//!
//! ## Example
//!
//! ```rust,no_run
//! use strain_solver::{classify_label, MatchingConfig, Outcome, StrainCatalog};
//!
//! // Load the embedded catalog of known strains
//! let catalog = StrainCatalog::load_embedded().unwrap();
//!
//! // Classify a label with the default thresholds
//! let outcome = classify_label("Mr. Grim", &catalog, MatchingConfig::default()).unwrap();
//!
//! match outcome {
//!     Outcome::NewAlias { canonical, score } => {
//!         println!("new alias of {canonical} ({:.0}%)", score * 100.0);
//!     }
//!     other => println!("{other:?}"),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Strain catalog storage and indexing
//! - [`core`]: Core data types for strains and outcomes
//! - [`matching`]: Classification engine and scoring algorithms
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;

// Re-export commonly used types for convenience
pub use catalog::store::{CatalogError, StrainCatalog};
pub use core::strain::KnownStrain;
pub use core::types::{Confidence, Outcome};
pub use matching::engine::{
    classify_label, ClassifierEngine, ClassifyError, ConfigError, MatchingConfig, ScoredCandidate,
};
