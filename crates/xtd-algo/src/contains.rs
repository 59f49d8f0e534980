//! Contiguous subsequence search.

/// Returns `true` if `needle` occurs as a contiguous run inside `haystack`.
///
/// An empty needle matches any non-empty haystack. An empty haystack contains nothing, not
/// even the empty needle.
pub fn contains<T: PartialEq>(haystack: &[T], needle: &[T]) -> bool {
    contains_by(haystack, needle, |a, b| a == b)
}

/// Like [`contains`], comparing elements with `eq`.
pub fn contains_by<T, U, F>(haystack: &[T], needle: &[U], mut eq: F) -> bool
where
    F: FnMut(&T, &U) -> bool,
{
    if haystack.is_empty() {
        return false;
    }
    if needle.is_empty() {
        return true;
    }
    if needle.len() > haystack.len() {
        return false;
    }
    haystack
        .windows(needle.len())
        .any(|window| window.iter().zip(needle).all(|(a, b)| eq(a, b)))
}
