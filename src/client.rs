//! High-level client: `LemmyClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared session, and accessor methods.

use crate::auth::client::Auth;
use crate::auth::{Jwt, Session};
use crate::domain::comment::client::Comments;
use crate::domain::community::client::Communities;
use crate::domain::image::client::Images;
use crate::domain::inbox::client::Inbox;
use crate::domain::moderation::client::Moderation;
use crate::domain::person::client::People;
use crate::domain::post::client::Posts;
use crate::domain::search::client::Search;
use crate::domain::site::client::SiteInfo;
use crate::error::SdkError;
use crate::http::{LemmyHttp, RetryPolicy};

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::comment::client::Comments as CommentsClient;
pub use crate::domain::community::client::Communities as CommunitiesClient;
pub use crate::domain::image::client::Images as ImagesClient;
pub use crate::domain::inbox::client::Inbox as InboxClient;
pub use crate::domain::moderation::client::Moderation as ModerationClient;
pub use crate::domain::person::client::People as PeopleClient;
pub use crate::domain::post::client::Posts as PostsClient;
pub use crate::domain::search::client::Search as SearchClient;
pub use crate::domain::site::client::SiteInfo as SiteClient;

/// The primary entry point for the SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.posts()`, `client.comments()`, etc. Clones share the session.
#[derive(Clone)]
pub struct LemmyClient {
    pub(crate) http: LemmyHttp,
}

impl LemmyClient {
    pub fn builder() -> LemmyClientBuilder {
        LemmyClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn posts(&self) -> Posts<'_> {
        Posts { client: self }
    }

    pub fn comments(&self) -> Comments<'_> {
        Comments { client: self }
    }

    pub fn communities(&self) -> Communities<'_> {
        Communities { client: self }
    }

    pub fn people(&self) -> People<'_> {
        People { client: self }
    }

    pub fn inbox(&self) -> Inbox<'_> {
        Inbox { client: self }
    }

    pub fn search(&self) -> Search<'_> {
        Search { client: self }
    }

    pub fn moderation(&self) -> Moderation<'_> {
        Moderation { client: self }
    }

    pub fn site(&self) -> SiteInfo<'_> {
        SiteInfo { client: self }
    }

    pub fn images(&self) -> Images<'_> {
        Images { client: self }
    }

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    // ── Session ──────────────────────────────────────────────────────────

    /// Snapshot of the session new requests will use.
    pub async fn session(&self) -> Session {
        self.http.session().await
    }

    pub async fn instance_url(&self) -> String {
        self.http.instance_url().await
    }

    /// Point the client at another instance, anonymously.
    pub async fn switch_instance(&self, instance_url: &str) {
        self.http.set_session(Session::new(instance_url)).await;
    }

    /// Low-level transport, for endpoints without a typed wrapper.
    pub fn http(&self) -> &LemmyHttp {
        &self.http
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct LemmyClientBuilder {
    instance_url: String,
    token: Option<Jwt>,
    user_agent: String,
    retry: RetryPolicy,
}

impl Default for LemmyClientBuilder {
    fn default() -> Self {
        Self {
            instance_url: crate::network::DEFAULT_INSTANCE_URL.to_string(),
            token: None,
            user_agent: crate::network::USER_AGENT.to_string(),
            retry: RetryPolicy::default(),
        }
    }
}

impl LemmyClientBuilder {
    pub fn instance_url(mut self, url: &str) -> Self {
        self.instance_url = url.to_string();
        self
    }

    /// Start already logged in.
    pub fn token(mut self, token: Jwt) -> Self {
        self.token = Some(token);
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn build(self) -> Result<LemmyClient, SdkError> {
        if !self.instance_url.starts_with("http://") && !self.instance_url.starts_with("https://") {
            return Err(SdkError::Validation(format!(
                "Instance URL must start with http:// or https://, got {:?}",
                self.instance_url
            )));
        }
        let mut session = Session::new(&self.instance_url);
        if let Some(token) = self.token {
            session = session.with_token(token);
        }
        Ok(LemmyClient {
            http: LemmyHttp::new(session, &self.user_agent, self.retry)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = LemmyClient::builder().build().unwrap();
        let session = tokio_test::block_on(client.session());
        assert_eq!(session.instance_url(), "https://lemmy.world");
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_builder_rejects_bad_url() {
        let err = LemmyClient::builder().instance_url("lemmy.ml").build().err().unwrap();
        assert!(matches!(err, SdkError::Validation(_)));
    }

    #[test]
    fn test_clones_share_session() {
        let a = LemmyClient::builder()
            .instance_url("https://lemmy.ml/")
            .build()
            .unwrap();
        let b = a.clone();
        tokio_test::block_on(async {
            a.auth().set_token(Jwt::new("t1")).await;
            assert!(b.auth().is_authenticated().await);
            b.switch_instance("https://beehaw.org").await;
            assert_eq!(a.instance_url().await, "https://beehaw.org");
            assert!(!a.auth().is_authenticated().await);
        });
    }
}
