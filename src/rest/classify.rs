use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiErrorKind, InstagramError, Result};
use crate::rest::RawResponse;

/// Status/error envelope the API returns alongside `data`.
#[derive(Debug, Clone, Deserialize)]
pub struct Meta {
    pub code: Option<u16>,
    pub error_type: Option<String>,
    pub error_message: Option<String>,
}

/// Decide success or a classified API error from a raw response.
///
/// A structured `meta` error in the body takes precedence over the bare
/// HTTP status. On success the parsed JSON body is returned; a body
/// that fails classification never reaches decoding.
pub fn classify(raw: &RawResponse) -> Result<Value> {
    let parsed: Option<Value> = serde_json::from_str(&raw.body).ok();

    let meta = parsed
        .as_ref()
        .and_then(|v| v.get("meta"))
        .and_then(|m| serde_json::from_value::<Meta>(m.clone()).ok());

    if let Some(meta) = &meta {
        if let Some(error_type) = &meta.error_type {
            let status = meta.code.unwrap_or(raw.status);
            return Err(InstagramError::Api {
                kind: kind_from_error_type(error_type, status),
                status,
                message: meta.error_message.clone().unwrap_or_default(),
            });
        }
        // Some error responses carry only a meta code.
        if let Some(code) = meta.code {
            if code >= 400 {
                return Err(InstagramError::Api {
                    kind: kind_from_status(code),
                    status: code,
                    message: meta.error_message.clone().unwrap_or_default(),
                });
            }
        }
    }

    if (200..300).contains(&raw.status) {
        return parsed
            .ok_or_else(|| InstagramError::Decode("response body is not valid JSON".to_string()));
    }

    Err(InstagramError::Api {
        kind: kind_from_status(raw.status),
        status: raw.status,
        message: snippet(&raw.body),
    })
}

/// Map the API's exception-style `error_type` strings to a kind,
/// falling back to the status mapping for unrecognized types.
fn kind_from_error_type(error_type: &str, status: u16) -> ApiErrorKind {
    match error_type {
        t if t.starts_with("OAuthRateLimit") => ApiErrorKind::RateLimited,
        // Token and parameter problems: OAuthAccessTokenException,
        // OAuthParameterException, OAuthPermissionsException, ...
        t if t.starts_with("OAuth") => ApiErrorKind::BadRequest,
        "APINotFoundError" => ApiErrorKind::NotFound,
        "APIInvalidParametersError" => ApiErrorKind::BadRequest,
        _ => kind_from_status(status),
    }
}

fn kind_from_status(status: u16) -> ApiErrorKind {
    match status {
        404 => ApiErrorKind::NotFound,
        429 => ApiErrorKind::RateLimited,
        400..=499 => ApiErrorKind::BadRequest,
        500..=599 => ApiErrorKind::ServerError,
        _ => ApiErrorKind::Unknown,
    }
}

fn snippet(body: &str) -> String {
    const MAX: usize = 200;
    let trimmed = body.trim();
    if trimmed.len() <= MAX {
        trimmed.to_string()
    } else {
        let mut end = MAX;
        while !trimmed.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &trimmed[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            body: body.to_string(),
        }
    }

    fn kind_of(result: Result<Value>) -> ApiErrorKind {
        match result.unwrap_err() {
            InstagramError::Api { kind, .. } => kind,
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn success_returns_parsed_body() {
        let body = r#"{"meta":{"code":200},"data":[]}"#;
        let value = classify(&raw(200, body)).unwrap();
        assert!(value.get("data").is_some());
    }

    #[test]
    fn invalid_token_is_bad_request() {
        let body = r#"{"meta":{"error_type":"OAuthAccessTokenException","code":400,"error_message":"The access_token provided is invalid."}}"#;
        let err = classify(&raw(400, body)).unwrap_err();
        match err {
            InstagramError::Api {
                kind,
                status,
                message,
            } => {
                assert_eq!(kind, ApiErrorKind::BadRequest);
                assert_eq!(status, 400);
                assert!(message.contains("invalid"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn body_error_type_overrides_status() {
        // Classification trusts the embedded error even under HTTP 200.
        let body = r#"{"meta":{"error_type":"OAuthRateLimitException","code":429,"error_message":"Too many requests"}}"#;
        assert_eq!(kind_of(classify(&raw(200, body))), ApiErrorKind::RateLimited);
    }

    #[test]
    fn meta_code_alone_is_an_error() {
        let body = r#"{"meta":{"code":500},"data":null}"#;
        assert_eq!(kind_of(classify(&raw(200, body))), ApiErrorKind::ServerError);
    }

    #[test]
    fn not_found_from_error_type() {
        let body = r#"{"meta":{"error_type":"APINotFoundError","code":404,"error_message":"this user does not exist"}}"#;
        assert_eq!(kind_of(classify(&raw(404, body))), ApiErrorKind::NotFound);
    }

    #[test]
    fn bare_statuses_map_by_range() {
        assert_eq!(kind_of(classify(&raw(404, "gone"))), ApiErrorKind::NotFound);
        assert_eq!(
            kind_of(classify(&raw(429, "slow down"))),
            ApiErrorKind::RateLimited
        );
        assert_eq!(kind_of(classify(&raw(400, "nope"))), ApiErrorKind::BadRequest);
        assert_eq!(kind_of(classify(&raw(403, "nope"))), ApiErrorKind::BadRequest);
        assert_eq!(
            kind_of(classify(&raw(503, "maintenance"))),
            ApiErrorKind::ServerError
        );
        assert_eq!(
            kind_of(classify(&raw(302, "redirect"))),
            ApiErrorKind::Unknown
        );
    }

    #[test]
    fn unrecognized_error_type_falls_back_to_status() {
        let body = r#"{"meta":{"error_type":"SomethingNew","code":418,"error_message":"teapot"}}"#;
        assert_eq!(kind_of(classify(&raw(418, body))), ApiErrorKind::BadRequest);
    }

    #[test]
    fn success_status_with_garbage_body_is_decode_error() {
        let err = classify(&raw(200, "<html>not json</html>")).unwrap_err();
        assert!(matches!(err, InstagramError::Decode(_)));
    }

    #[test]
    fn long_error_bodies_are_truncated() {
        let body = "x".repeat(1000);
        match classify(&raw(500, &body)).unwrap_err() {
            InstagramError::Api { message, .. } => assert!(message.len() < 250),
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
