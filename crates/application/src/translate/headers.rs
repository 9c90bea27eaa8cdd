//! Header translation

use postie_domain::source::HttpieHeader;
use postie_domain::target::PostmanHeader;

/// Translates headers one to one, keeping order and duplicates.
///
/// Disabled headers are kept and flagged `disabled`.
#[must_use]
pub fn translate_headers(headers: &[HttpieHeader]) -> Vec<PostmanHeader> {
    headers
        .iter()
        .map(|h| PostmanHeader {
            disabled: !h.enabled,
            ..PostmanHeader::text(&h.name, &h.value)
        })
        .collect()
}

/// Returns true if any header's key is `name`, ignoring ASCII case.
#[must_use]
pub fn has_header(headers: &[PostmanHeader], name: &str) -> bool {
    headers.iter().any(|h| h.key.eq_ignore_ascii_case(name))
}
