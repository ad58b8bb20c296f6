use serde::{Deserialize, Serialize};

/// A known strain in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnownStrain {
    /// Canonical name, matched by exact string equality
    pub name: String,

    /// Known alternative spellings for this strain.
    /// Stored raw; the catalog normalizes them when building its alias index.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    /// Description/notes about this strain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Tags for filtering (e.g., "indica", "sativa", "hybrid")
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl KnownStrain {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            description: None,
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_style_construction() {
        let strain = KnownStrain::new("AK-47")
            .with_aliases(["ak47", "ka74"])
            .with_tags(["sativa"]);
        assert_eq!(strain.name, "AK-47");
        assert_eq!(strain.aliases.len(), 2);
        assert!(strain.has_tag("Sativa"));
        assert!(!strain.has_tag("indica"));
    }

    #[test]
    fn test_serde_skips_empty_fields() {
        let strain = KnownStrain::new("Chemdog");
        let json = serde_json::to_string(&strain).unwrap();
        assert_eq!(json, "{\"name\":\"Chemdog\"}");
    }
}
