use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::store::StrainCatalog;
use crate::core::types::Outcome;
use crate::matching::normalize::clean;
use crate::matching::scoring::similarity;

/// Default minimum similarity for a fuzzy candidate
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.75;

/// Default maximum relative length difference between query and candidate
pub const DEFAULT_MAX_LENGTH_DIFF: f64 = 0.25;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("confidence threshold must be finite and within [0, 1], got {0}")]
    ConfidenceThreshold(f64),

    #[error("max length diff must be finite and within [0, 1], got {0}")]
    MaxLengthDiff(f64),
}

/// Errors from the classification boundary
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("label is empty after stripping non-alphanumeric characters")]
    EmptyLabel,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Configuration for the classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Minimum similarity ratio for a catalog name to qualify as a candidate
    pub confidence_threshold: f64,

    /// Maximum allowed relative length difference between the normalized
    /// query and a normalized candidate name
    pub max_length_diff: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            max_length_diff: DEFAULT_MAX_LENGTH_DIFF,
        }
    }
}

impl MatchingConfig {
    /// Check both thresholds are finite and within `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the offending value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.confidence_threshold.is_finite()
            || !(0.0..=1.0).contains(&self.confidence_threshold)
        {
            return Err(ConfigError::ConfidenceThreshold(self.confidence_threshold));
        }
        if !self.max_length_diff.is_finite() || !(0.0..=1.0).contains(&self.max_length_diff) {
            return Err(ConfigError::MaxLengthDiff(self.max_length_diff));
        }
        Ok(())
    }
}

/// A catalog name that passed all candidate gates, with its score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    pub name: String,
    pub score: f64,
}

/// The classifier engine.
///
/// Borrows an immutable catalog; classification is a pure function of the
/// catalog, the config, and the query label, so one engine can serve any
/// number of queries, concurrently if desired.
pub struct ClassifierEngine<'a> {
    catalog: &'a StrainCatalog,
    config: MatchingConfig,
}

impl<'a> ClassifierEngine<'a> {
    /// Create an engine with the default configuration
    pub fn new(catalog: &'a StrainCatalog) -> Self {
        Self {
            catalog,
            config: MatchingConfig::default(),
        }
    }

    /// Create an engine with a custom configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if either threshold is non-finite or outside
    /// `[0, 1]`.
    pub fn with_config(
        catalog: &'a StrainCatalog,
        config: MatchingConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    /// Scan the catalog for fuzzy candidates.
    ///
    /// Three gates per canonical name, short-circuiting on first failure:
    ///
    /// 1. first letter of the normalized query equals first letter of the
    ///    normalized name (either side empty fails — nothing to compare);
    /// 2. `query_len / name_len >= 1 - max_length_diff` over normalized
    ///    lengths. The ratio is one-directional on purpose: an overlong
    ///    query is left for the similarity gate to reject;
    /// 3. `similarity >= confidence_threshold`.
    ///
    /// The returned order is catalog order; callers must not depend on it
    /// beyond the scores themselves.
    pub fn find_candidates(&self, raw_label: &str) -> Vec<ScoredCandidate> {
        let cleaned = clean(raw_label);
        let Some(query_initial) = cleaned.chars().next() else {
            return Vec::new();
        };

        let mut candidates = Vec::new();
        for strain in self.catalog.strains() {
            let name_cleaned = clean(&strain.name);
            let Some(name_initial) = name_cleaned.chars().next() else {
                continue;
            };
            if query_initial != name_initial {
                continue;
            }

            #[allow(clippy::cast_precision_loss)]
            let length_ratio = cleaned.len() as f64 / name_cleaned.len() as f64;
            if length_ratio < 1.0 - self.config.max_length_diff {
                continue;
            }

            let score = similarity(raw_label, &strain.name);
            if score >= self.config.confidence_threshold {
                candidates.push(ScoredCandidate {
                    name: strain.name.clone(),
                    score,
                });
            }
        }
        candidates
    }

    /// Classify a label. Priority-ordered; the first matching rule wins.
    ///
    /// 1. exact canonical name → [`Outcome::ExistingStrain`]
    /// 2. exact alias-table key → [`Outcome::KnownAlias`]
    /// 3. fuzzy scan: one candidate → [`Outcome::NewAlias`]; two or more →
    ///    [`Outcome::AmbiguousMatches`] over the exact-maximum ties; none →
    ///    [`Outcome::NewStrain`]
    ///
    /// Never fails: every label maps to exactly one outcome. A label that
    /// normalizes to empty cannot pass the first-letter gate and falls
    /// through to [`Outcome::NewStrain`]; [`classify_label`] rejects such
    /// input up front instead.
    pub fn classify(&self, raw_label: &str) -> Outcome {
        if self.catalog.contains_name(raw_label) {
            return Outcome::ExistingStrain;
        }

        if let Some(canonical) = self.catalog.resolve_alias(raw_label) {
            return Outcome::KnownAlias {
                canonical: canonical.to_string(),
            };
        }

        let mut candidates = self.find_candidates(raw_label);
        match candidates.len() {
            0 => Outcome::NewStrain,
            1 => {
                let only = candidates.remove(0);
                Outcome::NewAlias {
                    canonical: only.name,
                    score: only.score,
                }
            }
            _ => {
                let best = candidates
                    .iter()
                    .map(|c| c.score)
                    .fold(f64::NEG_INFINITY, f64::max);
                // exact equality: tied scores come from identical rational
                // arithmetic, so their representations are bit-identical
                #[allow(clippy::float_cmp)]
                let mut tied: Vec<String> = candidates
                    .into_iter()
                    .filter(|c| c.score == best)
                    .map(|c| c.name)
                    .collect();
                tied.sort_unstable();
                Outcome::AmbiguousMatches {
                    score: best,
                    candidates: tied,
                }
            }
        }
    }
}

/// Classify a label against a catalog: the single boundary operation.
///
/// Validates the configuration and rejects labels that normalize to empty,
/// then delegates to [`ClassifierEngine::classify`].
///
/// # Errors
///
/// [`ClassifyError::Config`] for out-of-range or non-finite thresholds,
/// [`ClassifyError::EmptyLabel`] for a label with no alphanumeric content.
pub fn classify_label(
    raw_label: &str,
    catalog: &StrainCatalog,
    config: MatchingConfig,
) -> Result<Outcome, ClassifyError> {
    let engine = ClassifierEngine::with_config(catalog, config)?;
    if clean(raw_label).is_empty() {
        return Err(ClassifyError::EmptyLabel);
    }
    Ok(engine.classify(raw_label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::strain::KnownStrain;

    fn make_test_catalog() -> StrainCatalog {
        let mut catalog = StrainCatalog::new();
        let strains = [
            KnownStrain::new("Mr. Grimm").with_aliases(["mrgrim", "mrgrimms"]),
            KnownStrain::new("Forbidden Fruit"),
            KnownStrain::new("Chemdog"),
            KnownStrain::new("AK-47").with_aliases(["ak47", "ka74"]),
            KnownStrain::new("Mrs. Grim"),
            KnownStrain::new("Super Lemon Haze"),
        ];
        for strain in strains {
            catalog.add_strain(strain).unwrap();
        }
        catalog
    }

    #[test]
    fn test_exact_name_wins() {
        let catalog = make_test_catalog();
        let engine = ClassifierEngine::new(&catalog);
        assert_eq!(engine.classify("AK-47"), Outcome::ExistingStrain);
        assert_eq!(engine.classify("Mr. Grimm"), Outcome::ExistingStrain);
    }

    #[test]
    fn test_known_alias_resolves() {
        let catalog = make_test_catalog();
        let engine = ClassifierEngine::new(&catalog);
        assert_eq!(
            engine.classify("ak47"),
            Outcome::KnownAlias {
                canonical: "AK-47".to_string()
            }
        );
        assert_eq!(
            engine.classify("ka74"),
            Outcome::KnownAlias {
                canonical: "AK-47".to_string()
            }
        );
    }

    #[test]
    fn test_alias_rule_uses_raw_label() {
        let catalog = make_test_catalog();
        let engine = ClassifierEngine::new(&catalog);
        // "AK47" is not an alias key (keys are normalized); it falls through
        // to the fuzzy scan and lands on the same canonical name
        assert_eq!(
            engine.classify("AK47"),
            Outcome::NewAlias {
                canonical: "AK-47".to_string(),
                score: 1.0
            }
        );
    }

    #[test]
    fn test_unmatched_first_letter_is_new_strain() {
        let catalog = make_test_catalog();
        let engine = ClassifierEngine::new(&catalog);
        assert_eq!(engine.classify("Xyzzyx"), Outcome::NewStrain);
    }

    #[test]
    fn test_single_strong_match_is_new_alias() {
        let catalog = make_test_catalog();
        let engine = ClassifierEngine::new(&catalog);
        // "mrgrimms" is distance 1 from "mrgrimm" (7/8 over the longer) but
        // distance 3 from "mrsgrim" (5/8, below threshold)
        let outcome = engine.classify("Mr. Grimms");
        match outcome {
            Outcome::NewAlias { canonical, score } => {
                assert_eq!(canonical, "Mr. Grimm");
                assert!((score - 7.0 / 8.0).abs() < 1e-12);
            }
            other => panic!("expected NewAlias, got {other:?}"),
        }
    }

    #[test]
    fn test_tied_scores_are_ambiguous() {
        let catalog = make_test_catalog();
        let engine = ClassifierEngine::new(&catalog);
        // "mrgrim" is distance 1 from both "mrgrimm" and "mrsgrim": 6/7 each
        let outcome = engine.classify("Mr. Grim");
        match outcome {
            Outcome::AmbiguousMatches { score, candidates } => {
                assert!((score - 6.0 / 7.0).abs() < 1e-12);
                assert_eq!(candidates, vec!["Mr. Grimm", "Mrs. Grim"]);
            }
            other => panic!("expected AmbiguousMatches, got {other:?}"),
        }
    }

    #[test]
    fn test_ambiguous_is_independent_of_catalog_order() {
        let mut reversed = StrainCatalog::new();
        reversed.add_strain(KnownStrain::new("Mrs. Grim")).unwrap();
        reversed.add_strain(KnownStrain::new("Mr. Grimm")).unwrap();
        let engine = ClassifierEngine::new(&reversed);
        match engine.classify("Mr. Grim") {
            Outcome::AmbiguousMatches { candidates, .. } => {
                assert_eq!(candidates, vec!["Mr. Grimm", "Mrs. Grim"]);
            }
            other => panic!("expected AmbiguousMatches, got {other:?}"),
        }
    }

    #[test]
    fn test_below_threshold_is_new_strain() {
        let catalog = make_test_catalog();
        let engine = ClassifierEngine::new(&catalog);
        // shares the first letter with "Chemdog" but is nowhere close
        assert_eq!(engine.classify("Cheesecake Supreme"), Outcome::NewStrain);
    }

    #[test]
    fn test_length_gate_rejects_short_query() {
        let catalog = make_test_catalog();
        let engine = ClassifierEngine::new(&catalog);
        // "slh" vs "superlemonhaze": 3/14 is far under 1 - 0.25
        assert_eq!(engine.classify("slh"), Outcome::NewStrain);
    }

    #[test]
    fn test_length_gate_is_one_directional() {
        let mut catalog = StrainCatalog::new();
        catalog.add_strain(KnownStrain::new("Haze")).unwrap();
        let config = MatchingConfig {
            confidence_threshold: 0.25,
            max_length_diff: 0.25,
        };
        let engine = ClassifierEngine::with_config(&catalog, config).unwrap();
        // query twice the candidate length sails through the length gate
        // (ratio 2.0 >= 0.75) and is only judged on similarity
        let candidates = engine.find_candidates("hazehaze");
        assert_eq!(candidates.len(), 1);
        assert!((candidates[0].score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_classify_is_total_for_empty_label() {
        let catalog = make_test_catalog();
        let engine = ClassifierEngine::new(&catalog);
        // empty normalized query fails the first-letter gate everywhere
        assert_eq!(engine.classify(""), Outcome::NewStrain);
        assert_eq!(engine.classify("!!!"), Outcome::NewStrain);
    }

    #[test]
    fn test_boundary_rejects_empty_label() {
        let catalog = make_test_catalog();
        let err = classify_label("   ", &catalog, MatchingConfig::default()).unwrap_err();
        assert!(matches!(err, ClassifyError::EmptyLabel));
        let err = classify_label("?!", &catalog, MatchingConfig::default()).unwrap_err();
        assert!(matches!(err, ClassifyError::EmptyLabel));
    }

    #[test]
    fn test_boundary_rejects_bad_config() {
        let catalog = make_test_catalog();
        let config = MatchingConfig {
            confidence_threshold: 1.5,
            ..MatchingConfig::default()
        };
        let err = classify_label("AK-47", &catalog, config).unwrap_err();
        assert!(matches!(
            err,
            ClassifyError::Config(ConfigError::ConfidenceThreshold(_))
        ));

        let config = MatchingConfig {
            max_length_diff: f64::NAN,
            ..MatchingConfig::default()
        };
        let err = classify_label("AK-47", &catalog, config).unwrap_err();
        assert!(matches!(
            err,
            ClassifyError::Config(ConfigError::MaxLengthDiff(_))
        ));
    }

    #[test]
    fn test_boundary_happy_path() {
        let catalog = make_test_catalog();
        let outcome = classify_label("ak47", &catalog, MatchingConfig::default()).unwrap();
        assert_eq!(
            outcome,
            Outcome::KnownAlias {
                canonical: "AK-47".to_string()
            }
        );
    }

    #[test]
    fn test_stricter_threshold_narrows_candidates() {
        let catalog = make_test_catalog();
        let loose = ClassifierEngine::new(&catalog);
        assert_eq!(loose.find_candidates("Mr. Grim").len(), 2);

        let strict = ClassifierEngine::with_config(
            &catalog,
            MatchingConfig {
                confidence_threshold: 0.9,
                max_length_diff: DEFAULT_MAX_LENGTH_DIFF,
            },
        )
        .unwrap();
        // 6/7 ≈ 0.857 no longer qualifies
        assert!(strict.find_candidates("Mr. Grim").is_empty());
        assert_eq!(strict.classify("Mr. Grim"), Outcome::NewStrain);
    }
}
