//! Fixed and growing sliding-window scans.

/// Window lengths visited by [`sliding_window`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidingWindowOptions {
    pub min_len: usize,
    /// Upper bound on the window length; `None` grows up to the whole input.
    pub max_len: Option<usize>,
}

impl Default for SlidingWindowOptions {
    fn default() -> Self {
        Self {
            min_len: 1,
            max_len: None,
        }
    }
}

impl SlidingWindowOptions {
    /// A single window length.
    pub fn fixed(len: usize) -> Self {
        Self {
            min_len: len,
            max_len: Some(len),
        }
    }

    /// Every length from `min_len` up to the input length.
    pub fn growing(min_len: usize) -> Self {
        Self {
            min_len,
            max_len: None,
        }
    }
}

/// Scans `items` with windows of increasing length and collects `op(window)` for every window
/// accepted by `pred`.
///
/// For each length `L` in `options.min_len..=max` (where `max` is `options.max_len` capped at
/// `items.len()`), every window `items[s..s + L]` is visited left to right before moving on to
/// `L + 1`. Zero-length windows are visited too when `min_len == 0`.
pub fn sliding_window<T, U, P, F>(
    items: &[T],
    options: SlidingWindowOptions,
    mut pred: P,
    mut op: F,
) -> Vec<U>
where
    P: FnMut(&[T]) -> bool,
    F: FnMut(&[T]) -> U,
{
    let max_len = options
        .max_len
        .map_or(items.len(), |max| max.min(items.len()));

    let mut out: Vec<U> = Vec::new();
    for len in options.min_len..=max_len {
        for start in 0..=items.len() - len {
            let window = &items[start..start + len];
            if pred(window) {
                out.push(op(window));
            }
        }
    }
    out
}
