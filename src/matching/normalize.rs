/// Normalize a label for matching: strip everything outside `[A-Za-z0-9]`,
/// then lowercase what remains.
///
/// Normalization is pure and total; an empty input yields an empty output.
///
/// # Examples
///
/// ```
/// use strain_solver::matching::normalize::clean;
///
/// assert_eq!(clean("AK-47"), "ak47");
/// assert_eq!(clean("Mr. Grimm"), "mrgrimm");
/// ```
#[must_use]
pub fn clean(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_punctuation() {
        assert_eq!(clean("AK-47"), "ak47");
        assert_eq!(clean("Mr. Grimm"), "mrgrimm");
        assert_eq!(clean("Super Lemon Haze"), "superlemonhaze");
    }

    #[test]
    fn test_clean_empty_and_symbol_only() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("!!! --- ???"), "");
        assert_eq!(clean("   "), "");
    }

    #[test]
    fn test_clean_drops_non_ascii() {
        // Only ASCII alphanumerics survive; accented chars are stripped, not folded
        assert_eq!(clean("Café"), "caf");
        assert_eq!(clean("naïve"), "nave");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let once = clean("Mrs. Grim #2");
        assert_eq!(clean(&once), once);
    }
}
