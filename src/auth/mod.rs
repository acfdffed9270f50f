//! Authentication: session state, login/registration wire types, captcha.
//!
//! ## Session Model
//!
//! - A [`Session`] is an instance URL plus an optional JWT. The client holds one
//!   shared session; every request takes a snapshot of it when issued, so
//!   retries of that request keep using the token they started with.
//! - The JWT travels as the `auth` query parameter on API calls and as the
//!   `jwt` cookie on image uploads.
//! - Switching accounts replaces the token in place. Requests already in
//!   flight are not invalidated and may complete under the old account.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Session
// ============================================================================

/// Bearer token issued by the server on login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Jwt(String);

impl Jwt {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tokens must not end up in logs.
impl fmt::Debug for Jwt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Jwt(***)")
    }
}

/// The instance and account a request is issued against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    instance_url: String,
    token: Option<Jwt>,
}

impl Session {
    pub fn new(instance_url: &str) -> Self {
        Self {
            instance_url: instance_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: Jwt) -> Self {
        self.token = Some(token);
        self
    }

    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    pub fn token(&self) -> Option<&Jwt> {
        self.token.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn set_token(&mut self, token: Option<Jwt>) {
        self.token = token;
    }

    /// `<instance>/api/v3/<path>`.
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.instance_url,
            crate::network::API_PATH,
            path.trim_start_matches('/')
        )
    }

    /// `<instance>/pictrs/image[/<path>]`.
    pub fn pictrs_url(&self, path: &str) -> String {
        if path.is_empty() {
            format!("{}/{}", self.instance_url, crate::network::PICTRS_PATH)
        } else {
            format!(
                "{}/{}/{}",
                self.instance_url,
                crate::network::PICTRS_PATH,
                path.trim_start_matches('/')
            )
        }
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// `POST user/login` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username_or_email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totp_2fa_token: Option<String>,
}

/// `POST user/register` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub password_verify: String,
    pub show_nsfw: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captcha_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captcha_answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub honeypot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

/// Response to both login and registration.
///
/// `jwt` is absent when registration still needs approval or email
/// verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub jwt: Option<Jwt>,
    #[serde(default)]
    pub registration_created: bool,
    #[serde(default)]
    pub verify_email_sent: bool,
}

/// Captcha challenge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Captcha {
    /// Base64-encoded PNG.
    pub png: String,
    /// Base64-encoded WAV, when the server provides audio.
    pub wav: Option<String>,
    pub uuid: String,
}

/// `GET user/get_captcha` response; `ok` is `None` when captchas are disabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetCaptchaResponse {
    pub ok: Option<Captcha>,
}
