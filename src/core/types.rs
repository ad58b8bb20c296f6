use serde::{Deserialize, Serialize};

/// Result of classifying a single label against the catalog.
///
/// Exactly one variant is produced per query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// The raw label is already a canonical catalog entry
    ExistingStrain,

    /// The raw label is a known alias of a canonical entry
    KnownAlias { canonical: String },

    /// The label is unknown but is a strong single fuzzy match
    NewAlias { canonical: String, score: f64 },

    /// Two or more canonical names tie at the best qualifying score.
    /// `candidates` is sorted lexicographically so the variant is
    /// independent of catalog iteration order.
    AmbiguousMatches { score: f64, candidates: Vec<String> },

    /// Nothing in the catalog qualifies
    NewStrain,
}

/// Confidence level for a fuzzy match
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
    Exact,
}

impl Confidence {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 1.0 {
            Self::Exact
        } else if score >= 0.95 {
            Self::High
        } else if score >= 0.80 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Exact => write!(f, "exact"),
        }
    }
}
