//! URL decomposition
//!
//! Splits a request URL into the `host` / `path` / `query` parts of a
//! Postman URL object. Template placeholders are common in HTTPie URLs
//! (`{{base}}/users/{{id}}`), so anything the standard parser rejects, or
//! parses without an authority, degrades to a raw URL with a best-effort
//! host instead of failing.

use postie_domain::target::{PostmanQueryParam, PostmanUrl};
use url::Url;

/// Result of decomposing one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlDecomposition {
    /// The Postman URL object; `raw` is always the input verbatim.
    pub url: PostmanUrl,
    /// True when the standard parse failed or found no authority.
    pub fell_back: bool,
}

/// Decomposes a raw URL string. Never fails.
///
/// # Examples
///
/// ```
/// use postie_application::translate::decompose_url;
///
/// let parsed = decompose_url("https://api.example.com/v1/users?page=2");
/// assert_eq!(parsed.url.host, vec!["https://api.example.com"]);
/// assert_eq!(parsed.url.path, vec!["v1", "users"]);
/// assert_eq!(parsed.url.query[0].key, "page");
///
/// let templated = decompose_url("{{base}}/users");
/// assert!(templated.fell_back);
/// assert_eq!(templated.url.host, vec!["{{base}}"]);
/// ```
#[must_use]
pub fn decompose_url(raw: &str) -> UrlDecomposition {
    match Url::parse(raw) {
        Ok(parsed) if parsed.has_host() => UrlDecomposition {
            url: PostmanUrl {
                raw: raw.to_string(),
                host: vec![origin(raw, &parsed)],
                path: path_segments(&parsed),
                query: query_params(&parsed),
            },
            fell_back: false,
        },
        _ => UrlDecomposition {
            url: fallback(raw),
            fell_back: true,
        },
    }
}

/// `scheme://authority`, taken from the raw text when it has that shape so
/// placeholders in the authority keep their original case.
fn origin(raw: &str, parsed: &Url) -> String {
    if let Some((scheme, host_port)) = raw_authority(raw, parsed.scheme()) {
        return format!("{scheme}://{host_port}");
    }

    let host = parsed.host_str().unwrap_or_default();
    match parsed.port() {
        Some(port) => format!("{}://{host}:{port}", parsed.scheme()),
        None => format!("{}://{host}", parsed.scheme()),
    }
}

/// Scheme and authority (without userinfo) sliced from `raw`.
///
/// `None` unless `raw` starts with the parsed scheme and holds none of the
/// characters the parser rewrites (backslashes, whitespace, controls).
fn raw_authority<'a>(raw: &'a str, scheme: &str) -> Option<(&'a str, &'a str)> {
    if raw.contains(|c: char| c == '\\' || c.is_ascii_whitespace() || c.is_ascii_control()) {
        return None;
    }
    let (raw_scheme, rest) = raw.split_once("://")?;
    if !raw_scheme.eq_ignore_ascii_case(scheme) {
        return None;
    }

    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..end];
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host);
    (!host_port.is_empty()).then_some((raw_scheme, host_port))
}

fn path_segments(parsed: &Url) -> Vec<String> {
    parsed
        .path_segments()
        .map(|segments| {
            segments
                .filter(|s| !s.is_empty())
                .map(|s| {
                    urlencoding::decode(s).map_or_else(|_| s.to_string(), |d| d.into_owned())
                })
                .collect()
        })
        .unwrap_or_default()
}

fn query_params(parsed: &Url) -> Vec<PostmanQueryParam> {
    parsed
        .query_pairs()
        .map(|(key, value)| PostmanQueryParam::new(key, value))
        .collect()
}

fn fallback(raw: &str) -> PostmanUrl {
    let host = raw
        .split('/')
        .next()
        .filter(|first| !first.is_empty())
        .map(|first| vec![first.to_string()])
        .unwrap_or_default();

    PostmanUrl {
        raw: raw.to_string(),
        host,
        path: Vec::new(),
        query: Vec::new(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn query(pairs: &[(&str, &str)]) -> Vec<PostmanQueryParam> {
        pairs
            .iter()
            .map(|(k, v)| PostmanQueryParam::new(*k, *v))
            .collect()
    }

    #[test]
    fn test_full_url() {
        let result = decompose_url("https://api.example.com/v1/users?page=2&sort=name");
        assert!(!result.fell_back);
        assert_eq!(result.url.raw, "https://api.example.com/v1/users?page=2&sort=name");
        assert_eq!(result.url.host, vec!["https://api.example.com"]);
        assert_eq!(result.url.path, vec!["v1", "users"]);
        assert_eq!(result.url.query, query(&[("page", "2"), ("sort", "name")]));
    }

    #[test]
    fn test_leading_whitespace_uses_parsed_origin() {
        let result = decompose_url(" https://a.example.com/x");
        assert!(!result.fell_back);
        assert_eq!(result.url.raw, " https://a.example.com/x");
        assert_eq!(result.url.host, vec!["https://a.example.com"]);
        assert_eq!(result.url.path, vec!["x"]);
    }

    #[test]
    fn test_backslash_separator_uses_parsed_origin() {
        let result = decompose_url("https://a.example.com\\users");
        assert!(!result.fell_back);
        assert_eq!(result.url.host, vec!["https://a.example.com"]);
        assert_eq!(result.url.path, vec!["users"]);
    }

    #[test]
    fn test_port_is_part_of_host() {
        let result = decompose_url("http://localhost:8080/health");
        assert_eq!(result.url.host, vec!["http://localhost:8080"]);
        assert_eq!(result.url.path, vec!["health"]);
    }

    #[test]
    fn test_userinfo_is_not_part_of_host() {
        let result = decompose_url("https://user:pw@api.example.com/x");
        assert_eq!(result.url.host, vec!["https://api.example.com"]);
    }

    #[test]
    fn test_root_path_is_empty() {
        assert!(decompose_url("https://api.example.com/").url.path.is_empty());
        assert!(decompose_url("https://api.example.com").url.path.is_empty());
    }

    #[test]
    fn test_empty_segments_are_dropped() {
        let result = decompose_url("https://api.example.com//a///b/");
        assert_eq!(result.url.path, vec!["a", "b"]);
    }

    #[test]
    fn test_repeated_query_keys_stay_separate() {
        let result = decompose_url("https://api.example.com/s?tag=a&tag=b&q=hello+world");
        assert_eq!(
            result.url.query,
            query(&[("tag", "a"), ("tag", "b"), ("q", "hello world")])
        );
    }

    #[test]
    fn test_placeholders_in_path_survive_escaping() {
        let result = decompose_url("https://api.example.com/users/{{userId}}/posts");
        assert_eq!(result.url.path, vec!["users", "{{userId}}", "posts"]);
    }

    #[test]
    fn test_placeholder_led_url_falls_back() {
        let result = decompose_url("{{base}}/users/{{id}}?active=true");
        assert!(result.fell_back);
        assert_eq!(result.url.raw, "{{base}}/users/{{id}}?active=true");
        assert_eq!(result.url.host, vec!["{{base}}"]);
        assert!(result.url.path.is_empty());
        assert!(result.url.query.is_empty());
    }

    #[test]
    fn test_unparseable_url_keeps_raw() {
        let raw = "http://exa mple.com/some path";
        let result = decompose_url(raw);
        assert!(result.fell_back);
        assert_eq!(result.url.raw, raw);
        assert_eq!(result.url.host, vec!["http:"]);
    }

    #[test]
    fn test_empty_url() {
        let result = decompose_url("");
        assert!(result.fell_back);
        assert_eq!(result.url.raw, "");
        assert!(result.url.host.is_empty());
    }
}
