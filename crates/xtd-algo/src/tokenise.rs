use regex::Regex;

use crate::Result;

/// Splits `text` on every match of the `delimiter` regular expression.
///
/// Empty tokens between adjacent delimiters are kept, but an empty trailing token is dropped,
/// so `"a\nb\n"` split on `"\n"` yields `["a", "b"]`. Empty input yields no tokens.
pub fn tokenise(text: &str, delimiter: &str) -> Result<Vec<String>> {
    let delimiter = Regex::new(delimiter)?;
    let mut tokens: Vec<String> = delimiter.split(text).map(str::to_owned).collect();
    if tokens.last().is_some_and(String::is_empty) {
        tokens.pop();
    }
    Ok(tokens)
}
