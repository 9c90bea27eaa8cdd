//! Body translation
//!
//! Only text bodies cross over, as Postman raw-mode bodies. Form, file and
//! GraphQL payloads are reported as untranslated.

use postie_domain::source::{BodyKind, HttpieBody};
use postie_domain::target::{PostmanBody, PostmanBodyOptions, PostmanHeader, PostmanRawOptions};

use super::headers::has_header;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Outcome of translating one body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyTranslation {
    /// A raw-mode body.
    Raw(PostmanBody),
    /// Nothing to send.
    Empty,
    /// A payload of this kind exists but is not translated.
    Untranslated(BodyKind),
}

impl BodyTranslation {
    /// The body node, if any.
    #[must_use]
    pub fn into_body(self) -> Option<PostmanBody> {
        match self {
            Self::Raw(body) => Some(body),
            Self::Empty | Self::Untranslated(_) => None,
        }
    }
}

/// Translates a body and, when one is produced, makes sure a `Content-Type`
/// header carries its format.
///
/// `headers` must already hold the translated request headers; the
/// `Content-Type` header is appended after them, and only when no header
/// already has that key in any letter case.
pub fn translate_body(body: &HttpieBody, headers: &mut Vec<PostmanHeader>) -> BodyTranslation {
    let kind = body.kind();
    let text = &body.text;

    if body.body_type == "none" {
        return BodyTranslation::Empty;
    }

    if text.value.is_empty() {
        return if carries_payload(body, kind) {
            BodyTranslation::Untranslated(kind)
        } else {
            BodyTranslation::Empty
        };
    }

    let mut raw = PostmanBody::raw(&text.value);
    if text.format == JSON_MEDIA_TYPE {
        raw.options = Some(PostmanBodyOptions {
            raw: PostmanRawOptions {
                language: "json".to_string(),
            },
        });
    }

    if !text.format.is_empty() && !has_header(headers, "Content-Type") {
        headers.push(PostmanHeader::text("Content-Type", &text.format));
    }

    BodyTranslation::Raw(raw)
}

fn carries_payload(body: &HttpieBody, kind: BodyKind) -> bool {
    match kind {
        BodyKind::Form => !body.form.fields.is_empty(),
        BodyKind::File => !body.file.name.is_empty(),
        BodyKind::Graphql => !body.graphql.query.is_empty(),
        BodyKind::Other => true,
        BodyKind::None | BodyKind::Text => false,
    }
}
