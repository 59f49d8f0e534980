use std::collections::BTreeMap;

/// Replaces every element with its rank-mirrored counterpart: the k-th smallest value becomes
/// the k-th largest and vice versa.
///
/// With duplicate values the mapping of the last occurrence in sorted order wins, so the
/// result is still a permutation of values drawn from the input.
pub fn invert_element_order<T: Ord + Clone>(items: &mut [T]) {
    let mut ascending = items.to_vec();
    ascending.sort();

    let mut mirror: BTreeMap<T, T> = BTreeMap::new();
    for (low, high) in ascending.iter().zip(ascending.iter().rev()) {
        mirror.insert(low.clone(), high.clone());
    }

    for item in items.iter_mut() {
        if let Some(mirrored) = mirror.get(item) {
            *item = mirrored.clone();
        }
    }
}
