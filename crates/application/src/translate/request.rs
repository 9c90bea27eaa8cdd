//! Request translation
//!
//! Composes the URL, header, auth and body translators into one Postman
//! request item.

use postie_domain::{ConversionWarning, WarningKind};
use postie_domain::source::HttpieRequest;
use postie_domain::target::{PostmanRequest, PostmanRequestItem};

use super::auth::{AuthTranslation, translate_auth};
use super::body::{BodyTranslation, translate_body};
use super::headers::translate_headers;
use super::url::decompose_url;

/// A translated request plus whatever fidelity was lost on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestConversion {
    /// The request item to place in a folder.
    pub item: PostmanRequestItem,
    /// Warnings raised while translating this request.
    pub warnings: Vec<ConversionWarning>,
}

/// Translates one request.
///
/// `parent` is the slash-separated folder path the item lands in; it only
/// prefixes warning paths.
#[must_use]
pub fn convert_request(request: &HttpieRequest, parent: &str) -> RequestConversion {
    let name = request.display_name();
    let path = if parent.is_empty() {
        name.clone()
    } else {
        format!("{parent}/{name}")
    };
    let mut warnings = Vec::new();

    let url = decompose_url(&request.url);
    if url.fell_back {
        warnings.push(ConversionWarning::new(
            &path,
            WarningKind::UrlKeptRaw {
                url: request.url.clone(),
            },
        ));
    }

    let auth = match translate_auth(&request.auth) {
        AuthTranslation::Unsupported(auth_type) => {
            warnings.push(ConversionWarning::new(
                &path,
                WarningKind::AuthDropped { auth_type },
            ));
            None
        }
        other => other.into_auth(),
    };

    let mut header = translate_headers(&request.headers);
    let body = match translate_body(&request.body, &mut header) {
        BodyTranslation::Untranslated(kind) => {
            warnings.push(ConversionWarning::new(&path, WarningKind::BodyUntranslated(kind)));
            None
        }
        other => other.into_body(),
    };

    tracing::debug!(request = %path, method = %request.method, "translated request");

    RequestConversion {
        item: PostmanRequestItem {
            name,
            request: PostmanRequest {
                method: request.method.clone(),
                header,
                body,
                auth,
                url: url.url,
            },
        },
        warnings,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use postie_domain::WarningSeverity;
    use postie_domain::source::BodyKind;
    use postie_domain::source::{HttpieAuth, HttpieBody, HttpieHeader};
    use pretty_assertions::assert_eq;

    fn login() -> HttpieRequest {
        HttpieRequest {
            name: "Login".to_string(),
            method: "POST".to_string(),
            url: "https://api.example.com/v1/login".to_string(),
            headers: vec![HttpieHeader::new("Accept", "application/json")],
            auth: HttpieAuth::new("basic", "admin", "{{password}}"),
            body: HttpieBody::text(r#"{"remember": true}"#, "application/json"),
            ..HttpieRequest::default()
        }
    }

    #[test]
    fn test_full_request() {
        let converted = convert_request(&login(), "API");
        assert!(converted.warnings.is_empty());

        let item = converted.item;
        assert_eq!(item.name, "Login");
        assert_eq!(item.request.method, "POST");
        assert_eq!(item.request.url.path, vec!["v1", "login"]);
        assert_eq!(item.request.auth.unwrap().auth_type, "basic");
        assert_eq!(item.request.body.unwrap().language(), Some("json"));

        let keys: Vec<_> = item.request.header.iter().map(|h| h.key.as_str()).collect();
        assert_eq!(keys, vec!["Accept", "Content-Type"]);
    }

    #[test]
    fn test_unnamed_request_gets_method_and_url() {
        let request = HttpieRequest {
            method: "GET".to_string(),
            url: "https://api.example.com/users".to_string(),
            ..HttpieRequest::default()
        };

        let converted = convert_request(&request, "");
        assert_eq!(converted.item.name, "GET https://api.example.com/users");
    }

    #[test]
    fn test_templated_url_records_info() {
        let request = HttpieRequest {
            name: "List".to_string(),
            method: "GET".to_string(),
            url: "{{base}}/users".to_string(),
            ..HttpieRequest::default()
        };

        let converted = convert_request(&request, "API");
        assert_eq!(converted.warnings.len(), 1);
        assert_eq!(converted.warnings[0].severity(), WarningSeverity::Info);
        assert_eq!(converted.warnings[0].path, "API/List");
        assert_eq!(
            converted.warnings[0].kind,
            WarningKind::UrlKeptRaw {
                url: "{{base}}/users".to_string()
            }
        );
        assert_eq!(converted.item.request.url.host, vec!["{{base}}"]);
    }

    #[test]
    fn test_unsupported_auth_is_a_warning_not_an_error() {
        let mut request = login();
        request.auth = HttpieAuth::new("digest", "u", "p");

        let converted = convert_request(&request, "API");
        assert!(converted.item.request.auth.is_none());
        assert_eq!(converted.warnings.len(), 1);
        assert_eq!(converted.warnings[0].severity(), WarningSeverity::Warning);
        assert_eq!(
            converted.warnings[0].kind,
            WarningKind::AuthDropped {
                auth_type: "digest".to_string()
            }
        );
    }

    #[test]
    fn test_untranslated_body_is_reported() {
        let mut request = login();
        request.body = HttpieBody {
            body_type: "graphql".to_string(),
            ..HttpieBody::default()
        };
        request.body.graphql.query = "{ me { id } }".to_string();

        let converted = convert_request(&request, "API");
        assert!(converted.item.request.body.is_none());
        assert_eq!(
            converted.warnings[0].kind,
            WarningKind::BodyUntranslated(BodyKind::Graphql)
        );
    }
}
