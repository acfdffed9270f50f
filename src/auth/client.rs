//! Auth sub-client: login, registration, captcha, logout, account switching.

use crate::auth::{GetCaptchaResponse, Jwt, LoginRequest, LoginResponse, RegisterRequest};
use crate::client::LemmyClient;
use crate::error::{AuthError, SdkError};
use crate::http::RetryPolicy;

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a LemmyClient,
}

impl<'a> Auth<'a> {
    /// Log in and store the returned token on the shared session.
    ///
    /// Requests started before this call keep the session they were issued with.
    pub async fn login(
        &self,
        username_or_email: &str,
        password: &str,
        totp_2fa_token: Option<String>,
    ) -> Result<Jwt, SdkError> {
        let request = LoginRequest {
            username_or_email: username_or_email.to_string(),
            password: password.to_string(),
            totp_2fa_token,
        };
        let resp: LoginResponse = self
            .client
            .http
            .post_with_policy("user/login", &request, &RetryPolicy::None)
            .await?;

        let jwt = resp.jwt.ok_or_else(|| {
            AuthError::LoginFailed("Server did not return a token".to_string())
        })?;
        self.client.http.set_token(Some(jwt.clone())).await;
        tracing::debug!(user = username_or_email, "Logged in");
        Ok(jwt)
    }

    /// Create an account. When the instance issues a token right away it is
    /// stored like a login; otherwise check `verify_email_sent` and
    /// `registration_created`.
    pub async fn register(&self, request: &RegisterRequest) -> Result<LoginResponse, SdkError> {
        if request.password != request.password_verify {
            return Err(SdkError::Validation("Passwords do not match".to_string()));
        }
        let resp: LoginResponse = self
            .client
            .http
            .post_with_policy("user/register", request, &RetryPolicy::None)
            .await?;
        if let Some(jwt) = &resp.jwt {
            self.client.http.set_token(Some(jwt.clone())).await;
        }
        Ok(resp)
    }

    /// Fetch a registration captcha; `ok` is `None` when the instance has
    /// captchas disabled.
    pub async fn captcha(&self) -> Result<GetCaptchaResponse, SdkError> {
        Ok(self.client.http.get("user/get_captcha", Vec::new()).await?)
    }

    /// Drop the token. Later requests go out anonymously.
    pub async fn logout(&self) {
        self.client.http.set_token(None).await;
    }

    /// Switch to another account's token without logging in again.
    pub async fn set_token(&self, token: Jwt) {
        self.client.http.set_token(Some(token)).await;
    }

    pub async fn is_authenticated(&self) -> bool {
        self.client.http.has_token().await
    }

    /// The current token, if any.
    pub async fn token(&self) -> Option<Jwt> {
        self.client.http.session().await.token().cloned()
    }
}
