//! String helpers used alongside the combinators.

/// Join items with `separator`. An empty input yields an empty string.
///
/// A separator is only written once the output is non-empty, so leading
/// empty items vanish: `["", "A"]` joins to `"A"`.
pub fn unsplit<I>(items: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut joined = String::new();
    for item in items {
        if !joined.is_empty() {
            joined.push_str(separator);
        }
        joined.push_str(item.as_ref());
    }
    joined
}
