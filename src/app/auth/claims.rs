//! Decoding of the claims segment carried by bearer tokens.
//!
//! The signature is not checked here; the API verifies tokens on every call.

use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::{Deserialize, Serialize};

use super::session::MANAGER_ROLE;

#[derive(Debug, thiserror::Error)]
pub enum ClaimsError {
    #[error("token has {0} segments, expected 3")]
    Segments(usize),
    #[error("claims segment is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("claims segment is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Role claim - the API issues a single string, but a list is accepted too
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Roles {
    One(String),
    Many(Vec<String>),
}

impl Default for Roles {
    fn default() -> Self {
        Roles::Many(Vec::new())
    }
}

impl Roles {
    pub fn contains(&self, role: &str) -> bool {
        match self {
            Roles::One(r) => r == role,
            Roles::Many(rs) => rs.iter().any(|r| r == role),
        }
    }
}

/// Payload of a bearer token
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub roles: Roles,
    /// Subject - the user's email
    #[serde(default)]
    pub sub: Option<String>,
}

impl Claims {
    pub fn decode(token: &str) -> Result<Self, ClaimsError> {
        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != 3 {
            return Err(ClaimsError::Segments(segments.len()));
        }

        let payload = segments[1].trim_end_matches('=');
        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .or_else(|_| STANDARD_NO_PAD.decode(payload))?;

        Ok(serde_json::from_slice(&bytes)?)
    }

    pub fn is_manager(&self) -> bool {
        self.roles.contains(MANAGER_ROLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with(payload: &str) -> String {
        format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn decodes_roles_and_subject() {
        let token = token_with(r#"{"sub":"boss@hotel.test","roles":"manager","exp":1700000000}"#);
        let claims = Claims::decode(&token).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("boss@hotel.test"));
        assert_eq!(claims.roles, Roles::One("manager".into()));
        assert!(claims.is_manager());
    }

    #[test]
    fn accepts_role_lists() {
        let token = token_with(r#"{"sub":"a@b.co","roles":["employee","manager"]}"#);
        assert!(Claims::decode(&token).unwrap().is_manager());
    }

    #[test]
    fn missing_roles_is_not_manager() {
        let token = token_with(r#"{"sub":"a@b.co"}"#);
        let claims = Claims::decode(&token).unwrap();
        assert!(!claims.is_manager());
    }

    #[test]
    fn accepts_padded_standard_alphabet() {
        let payload = r#"{"sub":"a>b@c.co","roles":"manager"}"#;
        let token = format!(
            "h.{}.s",
            base64::engine::general_purpose::STANDARD.encode(payload)
        );
        let claims = Claims::decode(&token).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("a>b@c.co"));
    }

    #[test]
    fn rejects_wrong_segment_count() {
        assert!(matches!(
            Claims::decode("only.two"),
            Err(ClaimsError::Segments(2))
        ));
        assert!(matches!(Claims::decode(""), Err(ClaimsError::Segments(1))));
    }

    #[test]
    fn rejects_non_json_payload() {
        let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode("not json"));
        assert!(matches!(Claims::decode(&token), Err(ClaimsError::Json(_))));
    }

    #[test]
    fn rejects_bad_base64() {
        assert!(matches!(
            Claims::decode("h.!!!.s"),
            Err(ClaimsError::Base64(_))
        ));
    }
}
