//! `key=value` option lists
//!
//! Rule options such as `min_length=6,require_digits=false` are parsed here.

/// Splits a comma-separated `key=value` list.
///
/// Each part is split on its first `=`; keys and values are trimmed.
/// Empty parts are skipped. Returns the first part lacking a `=` as the
/// error.
///
/// # Examples
///
/// ```rust
/// use fieldguard_validator::tag::options::split_pairs;
///
/// assert_eq!(split_pairs("a=1, b=x=y"), Ok(vec![("a", "1"), ("b", "x=y")]));
/// assert_eq!(split_pairs("a=1,b"), Err("b"));
/// ```
pub fn split_pairs(options: &str) -> Result<Vec<(&str, &str)>, &str> {
    options
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part.split_once('=') {
            Some((key, value)) => Ok((key.trim(), value.trim())),
            None => Err(part),
        })
        .collect()
}

/// Parses a boolean the way flag values are commonly written.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
#[must_use]
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
