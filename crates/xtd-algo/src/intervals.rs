use std::ops::Range;

/// Greedy maximum set of pairwise disjoint half-open intervals.
///
/// Intervals are considered by ascending end; one is kept when it starts at or after the end
/// of the last kept interval, so touching intervals (`a.end == b.start`) are both kept. The
/// result is ordered by end.
pub fn maximum_disjoint_set<T, I>(intervals: I) -> Vec<Range<T>>
where
    T: Ord,
    I: IntoIterator<Item = Range<T>>,
{
    let mut by_end: Vec<Range<T>> = intervals.into_iter().collect();
    by_end.sort_by(|a, b| a.end.cmp(&b.end));

    let mut chosen: Vec<Range<T>> = Vec::new();
    for interval in by_end {
        if chosen.last().is_none_or(|last| last.end <= interval.start) {
            chosen.push(interval);
        }
    }
    chosen
}
