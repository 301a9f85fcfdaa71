//! # Request Methods
//!
//! [`RequestMethod`] is the closed set of verbs a route can be registered for.
//! Each variant is string-identical to its wire token, so `RequestMethod::Get`
//! prints, parses and serializes as `"GET"`.
//!
//! `ALL` is a routing wildcard rather than an HTTP verb; it has no
//! [`http::Method`] counterpart.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HTTP request methods a route responds to
///
/// See <https://developer.mozilla.org/en-US/docs/Web/HTTP/Methods>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestMethod {
    #[serde(rename = "GET")]
    Get,
    #[serde(rename = "POST")]
    Post,
    #[serde(rename = "PUT")]
    Put,
    #[serde(rename = "DELETE")]
    Delete,
    #[serde(rename = "PATCH")]
    Patch,
    #[serde(rename = "ALL")]
    All,
    #[serde(rename = "OPTIONS")]
    Options,
    #[serde(rename = "HEAD")]
    Head,
}

/// Returned when a token is not one of the eight method tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown request method `{token}`")]
pub struct ParseMethodError {
    /// The rejected token
    pub token: String,
}

impl RequestMethod {
    /// Every method, in declaration order.
    pub const ALL_METHODS: [RequestMethod; 8] = [
        RequestMethod::Get,
        RequestMethod::Post,
        RequestMethod::Put,
        RequestMethod::Delete,
        RequestMethod::Patch,
        RequestMethod::All,
        RequestMethod::Options,
        RequestMethod::Head,
    ];

    /// The wire token for this method
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Put => "PUT",
            RequestMethod::Delete => "DELETE",
            RequestMethod::Patch => "PATCH",
            RequestMethod::All => "ALL",
            RequestMethod::Options => "OPTIONS",
            RequestMethod::Head => "HEAD",
        }
    }

    /// Convert to the `http` crate's method type.
    ///
    /// Returns `None` for [`RequestMethod::All`], which matches any verb and
    /// therefore has no single HTTP equivalent.
    #[must_use]
    pub fn to_http(&self) -> Option<http::Method> {
        match self {
            RequestMethod::Get => Some(http::Method::GET),
            RequestMethod::Post => Some(http::Method::POST),
            RequestMethod::Put => Some(http::Method::PUT),
            RequestMethod::Delete => Some(http::Method::DELETE),
            RequestMethod::Patch => Some(http::Method::PATCH),
            RequestMethod::Options => Some(http::Method::OPTIONS),
            RequestMethod::Head => Some(http::Method::HEAD),
            RequestMethod::All => None,
        }
    }

    /// Normalize a registration method list.
    ///
    /// Repeated entries are dropped (first occurrence wins) and `HEAD` is
    /// appended exactly once when `GET` is present without it. Returns the
    /// normalized list and whether `HEAD` was inferred.
    pub fn normalize<I>(methods: I) -> (Vec<RequestMethod>, bool)
    where
        I: IntoIterator<Item = RequestMethod>,
    {
        let mut normalized: Vec<RequestMethod> = Vec::with_capacity(Self::ALL_METHODS.len());
        for method in methods {
            if !normalized.contains(&method) {
                normalized.push(method);
            }
        }

        let infer_head = normalized.contains(&RequestMethod::Get)
            && !normalized.contains(&RequestMethod::Head);
        if infer_head {
            normalized.push(RequestMethod::Head);
        }
        (normalized, infer_head)
    }

    /// Wire tokens of `methods` joined with commas, e.g. `GET,HEAD`
    #[must_use]
    pub fn join_tokens(methods: &[RequestMethod]) -> String {
        methods
            .iter()
            .map(RequestMethod::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestMethod {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RequestMethod::ALL_METHODS
            .iter()
            .find(|m| m.as_str() == s)
            .copied()
            .ok_or_else(|| ParseMethodError {
                token: s.to_string(),
            })
    }
}

impl TryFrom<&http::Method> for RequestMethod {
    type Error = ParseMethodError;

    fn try_from(method: &http::Method) -> Result<Self, Self::Error> {
        match *method {
            http::Method::GET => Ok(RequestMethod::Get),
            http::Method::POST => Ok(RequestMethod::Post),
            http::Method::PUT => Ok(RequestMethod::Put),
            http::Method::DELETE => Ok(RequestMethod::Delete),
            http::Method::PATCH => Ok(RequestMethod::Patch),
            http::Method::OPTIONS => Ok(RequestMethod::Options),
            http::Method::HEAD => Ok(RequestMethod::Head),
            _ => Err(ParseMethodError {
                token: method.as_str().to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_round_trip_through_display_and_parse() {
        for method in RequestMethod::ALL_METHODS {
            let token = method.to_string();
            assert_eq!(token, method.as_str());
            assert_eq!(token.parse::<RequestMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "get".parse::<RequestMethod>().unwrap_err();
        assert_eq!(err.token, "get");
        assert!("TRACE".parse::<RequestMethod>().is_err());
    }

    #[test]
    fn test_all_has_no_http_equivalent() {
        assert_eq!(RequestMethod::All.to_http(), None);
        assert_eq!(RequestMethod::Get.to_http(), Some(http::Method::GET));
    }

    #[test]
    fn test_try_from_http_method() {
        assert_eq!(
            RequestMethod::try_from(&http::Method::PATCH).unwrap(),
            RequestMethod::Patch
        );
        let err = RequestMethod::try_from(&http::Method::TRACE).unwrap_err();
        assert_eq!(err.token, "TRACE");
    }

    #[test]
    fn test_serde_uses_wire_token() {
        let json = serde_json::to_string(&RequestMethod::Options).unwrap();
        assert_eq!(json, "\"OPTIONS\"");
        let back: RequestMethod = serde_json::from_str("\"DELETE\"").unwrap();
        assert_eq!(back, RequestMethod::Delete);
    }

    #[test]
    fn test_normalize_appends_head_once() {
        let (methods, inferred) = RequestMethod::normalize([RequestMethod::Get]);
        assert_eq!(methods, vec![RequestMethod::Get, RequestMethod::Head]);
        assert!(inferred);
    }

    #[test]
    fn test_normalize_keeps_existing_head() {
        let (methods, inferred) =
            RequestMethod::normalize([RequestMethod::Head, RequestMethod::Get]);
        assert_eq!(methods, vec![RequestMethod::Head, RequestMethod::Get]);
        assert!(!inferred);
    }

    #[test]
    fn test_normalize_drops_repeats() {
        let (methods, _) = RequestMethod::normalize([
            RequestMethod::Post,
            RequestMethod::Post,
            RequestMethod::Put,
        ]);
        assert_eq!(methods, vec![RequestMethod::Post, RequestMethod::Put]);
    }

    #[test]
    fn test_join_tokens() {
        let (methods, _) = RequestMethod::normalize([RequestMethod::Get, RequestMethod::Post]);
        assert_eq!(RequestMethod::join_tokens(&methods), "GET,POST,HEAD");
        assert_eq!(RequestMethod::join_tokens(&[]), "");
    }
}
