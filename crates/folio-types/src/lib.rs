//! Shared API Types for folio
//!
//! This crate is the SINGLE SOURCE OF TRUTH for all types crossing the
//! boundary between the portfolio client and the remote API.
//!
//! ## Boundaries
//!
//! ```text
//! ┌──────────────────┐         ┌──────────────────┐
//! │  Remote API      │  JSON   │  WASM UI         │
//! │  (auth, records) │ ◄─────► │  (egui)          │
//! └──────────────────┘         └──────────────────┘
//! ```
//!
//! ## Rules
//!
//! 1. All API payloads live here - no inline request structs in the UI
//! 2. Ids are strings on our side; the server may send numbers or strings

pub mod auth;
pub mod production;

pub use auth::*;
pub use production::*;

use serde::{Deserialize, Serialize};

// ============================================================================
// ERROR BODY
// ============================================================================

/// Error payload returned by the remote API on non-2xx responses.
///
/// Different endpoints use `message` or `error`; both are accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// The human-readable part of the body, if the server sent one
    pub fn text(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Helper to deserialize a numeric or string id into String
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de;

    struct IdVisitor;

    impl<'de> de::Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a numeric or string id")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_prefers_message() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"message":"Invalid credentials","error":"x"}"#).unwrap();
        assert_eq!(body.text(), Some("Invalid credentials"));

        let body: ApiErrorBody = serde_json::from_str(r#"{"error":"Token expired"}"#).unwrap();
        assert_eq!(body.text(), Some("Token expired"));
    }

    #[test]
    fn test_error_body_blank_is_none() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"message":"   "}"#).unwrap();
        assert_eq!(body.text(), None);

        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.text(), None);
    }
}
