use xtd_algo::{SlidingWindowOptions, sliding_window};

fn is_palindrome(window: &[u8]) -> bool {
    window.iter().eq(window.iter().rev())
}

fn to_string(window: &[u8]) -> String {
    String::from_utf8_lossy(window).into_owned()
}

#[test]
fn ascending_window_endpoints_are_summed_shortest_windows_first() {
    let nums = [1, 2, 3, 4];
    let actual = sliding_window(
        &nums,
        SlidingWindowOptions::growing(2),
        |w| w[w.len() - 1] > w[0],
        |w| w[0] + w[w.len() - 1],
    );
    assert_eq!(actual, vec![3, 5, 7, 4, 6, 5]);
}

#[test]
fn empty_input_produces_nothing() {
    let actual = sliding_window(b"", SlidingWindowOptions::default(), |_| true, |w| w.len());
    assert!(actual.is_empty());
}

#[test]
fn zero_length_windows_are_visited_once_per_position() {
    let nums = [1, 2, 3];
    let actual = sliding_window(
        &nums,
        SlidingWindowOptions::fixed(0),
        |w| w.is_empty(),
        |w| w.len(),
    );
    assert_eq!(actual, vec![0, 0, 0, 0]);
}

#[test]
fn finds_palindromes_of_length_three_or_more() {
    let actual = sliding_window(
        b"heabalopo",
        SlidingWindowOptions::growing(3),
        is_palindrome,
        to_string,
    );
    assert_eq!(actual, vec!["aba", "opo"]);
}

#[test]
fn finds_nested_palindromes() {
    let actual = sliding_window(
        b"ababa",
        SlidingWindowOptions::growing(2),
        is_palindrome,
        to_string,
    );
    assert_eq!(actual, vec!["aba", "bab", "aba", "ababa"]);

    let actual = sliding_window(
        b"ababa",
        SlidingWindowOptions::growing(4),
        is_palindrome,
        to_string,
    );
    assert_eq!(actual, vec!["ababa"]);
}

#[test]
fn fixed_window_scans_a_single_length() {
    let actual = sliding_window(
        b"ababa",
        SlidingWindowOptions::fixed(3),
        is_palindrome,
        to_string,
    );
    assert_eq!(actual, vec!["aba", "bab", "aba"]);
}

#[test]
fn window_longer_than_input_produces_nothing() {
    let actual = sliding_window(
        &[1, 2],
        SlidingWindowOptions::growing(3),
        |_| true,
        |w| w.to_vec(),
    );
    assert!(actual.is_empty());
}

#[test]
fn max_len_caps_growth() {
    let options = SlidingWindowOptions {
        min_len: 1,
        max_len: Some(2),
    };
    let actual = sliding_window(&[1, 2, 3], options, |_| true, |w| w.iter().sum::<i32>());
    assert_eq!(actual, vec![1, 2, 3, 3, 5]);
}
