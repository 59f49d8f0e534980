/// Returns `true` if `pred` holds for every pair of neighbouring elements.
///
/// Vacuously `true` for slices with fewer than two elements.
pub fn adjacent_all_of<T, P>(items: &[T], mut pred: P) -> bool
where
    P: FnMut(&T, &T) -> bool,
{
    items.windows(2).all(|pair| pred(&pair[0], &pair[1]))
}
