/// Levenshtein edit distance with unit cost for insertion, deletion, and
/// substitution (no transposition).
///
/// Dynamic programming over a single row of length `b.len() + 1`; the
/// diagonal predecessor is carried explicitly because the cell it lives in
/// has already been overwritten by the time it is needed.
///
/// Properties: `edit_distance(a, a) == 0`, `edit_distance("", s) == s.len()`,
/// and the metric is symmetric. Time O(len(a)·len(b)), space O(len(b)).
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // row[j] holds the distance between a[..i] and b[..j] for the row
    // currently being filled in
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.iter().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;

        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            let substitution = if ca == cb { diag } else { diag + 1 };
            row[j + 1] = substitution.min(above + 1).min(row[j] + 1);
            diag = above;
        }
    }

    row[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_self_is_zero() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("a", "a"), 0);
        assert_eq!(edit_distance("chemdog", "chemdog"), 0);
    }

    #[test]
    fn test_distance_from_empty_is_length() {
        assert_eq!(edit_distance("", "grimm"), 5);
        assert_eq!(edit_distance("grimm", ""), 5);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            ("kitten", "sitting"),
            ("mrgrim", "mrgrimm"),
            ("ak47", "ka74"),
            ("", "xyz"),
        ];
        for (a, b) in pairs {
            assert_eq!(edit_distance(a, b), edit_distance(b, a), "{a} vs {b}");
        }
    }

    #[test]
    fn test_known_distances() {
        // classic example: k->s, e->i, +g
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        // single insertion
        assert_eq!(edit_distance("mrgrim", "mrgrimm"), 1);
        // single substitution
        assert_eq!(edit_distance("chemdog", "chemdag"), 1);
        // two substitutions (transposition is not a single edit here)
        assert_eq!(edit_distance("ak47", "ak74"), 2);
    }

    #[test]
    fn test_distance_counts_chars_not_bytes() {
        // multi-byte chars are compared as whole chars
        assert_eq!(edit_distance("héllo", "hello"), 1);
    }
}
