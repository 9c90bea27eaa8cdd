//! Placeholder parser for `{{variable}}` syntax
//!
//! A placeholder is `{{`, one or more characters other than `}`, then `}}`.
//! The captured text is the variable name, taken verbatim (no trimming).

use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::expect_used)]
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^}]+)\}\}").expect("valid regex"));

/// Yields the name of every placeholder in `input`, left to right.
///
/// # Examples
///
/// ```
/// use postie_application::variables::parse_variables;
///
/// let names: Vec<_> = parse_variables("{{base}}/users/{{id}}").collect();
/// assert_eq!(names, vec!["base", "id"]);
/// ```
pub fn parse_variables(input: &str) -> impl Iterator<Item = &str> {
    PLACEHOLDER
        .captures_iter(input)
        .filter_map(|caps| caps.get(1).map(|name| name.as_str()))
}
