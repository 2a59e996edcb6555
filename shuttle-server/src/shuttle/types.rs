//! Values exchanged with the shuttle site.

use std::fmt;

use reqwest::header::{HeaderMap, HeaderValue, SET_COOKIE};
use serde::{Deserialize, Serialize};

/// Session cookie issued by the map page.
///
/// Holds the raw `Set-Cookie` bytes exactly as received, including any
/// non-ASCII octets. It is sent back as the `Cookie` header of the data
/// request and then dropped; nothing keeps it beyond a single fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie(HeaderValue);

impl SessionCookie {
    /// Capture the session cookie from a response's headers.
    ///
    /// Multiple `Set-Cookie` headers are joined with `"; "` in the order
    /// they were received. Returns `None` when no header is present or every
    /// value is blank.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let values: Vec<&[u8]> = headers
            .get_all(SET_COOKIE)
            .iter()
            .map(HeaderValue::as_bytes)
            .filter(|v| !v.iter().all(u8::is_ascii_whitespace))
            .collect();

        if values.is_empty() {
            return None;
        }

        // Every part is already a valid header value, so the join is too.
        HeaderValue::from_bytes(&values.join(&b"; "[..]))
            .ok()
            .map(Self)
    }

    /// Value for the `Cookie` request header.
    pub fn header_value(&self) -> &HeaderValue {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for SessionCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.0.as_bytes()))
    }
}

/// Live bus location data as returned by the shuttle web service.
///
/// The shape is owned by the upstream service and is not validated; this is
/// whatever JSON the `GetGoogleObject` endpoint produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusLocations(pub serde_json::Value);

impl BusLocations {
    /// Borrow the decoded JSON.
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Take the decoded JSON.
    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}
