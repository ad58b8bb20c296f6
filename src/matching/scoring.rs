use crate::matching::distance::edit_distance;
use crate::matching::normalize::clean;

/// Safely convert usize to f64 for ratio calculations
///
/// This function explicitly handles the precision loss that occurs when
/// converting usize to f64 on 64-bit platforms. Label lengths are tiny
/// compared to the f64 mantissa, so the loss is theoretical.
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Similarity ratio between two labels, in `[0, 1]`.
///
/// Both inputs are normalized via [`clean`] before comparison. The score is
/// `(longer_len - edit_distance) / longer_len` where `longer` is the longer
/// of the two normalized strings (the first argument wins the tie on equal
/// lengths, which only fixes the denominator; the distance is symmetric).
///
/// Two strings that both normalize to empty are maximally similar (`1.0`).
#[must_use]
pub fn similarity(s1: &str, s2: &str) -> f64 {
    let c1 = clean(s1);
    let c2 = clean(s2);

    let (longer, shorter) = if c1.len() < c2.len() { (c2, c1) } else { (c1, c2) };

    // normalized strings are pure ASCII, so byte length == char count
    let longer_len = longer.len();
    if longer_len == 0 {
        return 1.0;
    }

    let distance = edit_distance(&longer, &shorter);
    count_to_f64(longer_len - distance) / count_to_f64(longer_len)
}
