//! Low-level HTTP transport: `LemmyHttp`.
//!
//! One attempt per [`LemmyHttp::execute`]: build the request against the
//! session snapshot, send it, check the status. Retry wraps the attempt, and
//! decoding runs once on the body of the attempt that succeeded.

use crate::auth::{Jwt, Session};
use crate::error::ApiError;
use crate::http::retry::{with_retry, RetryPolicy};
use crate::shared::Query;

use async_lock::RwLock;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Low-level HTTP client for the Lemmy REST API.
pub struct LemmyHttp {
    client: Client,
    session: Arc<RwLock<Session>>,
    retry: RetryPolicy,
}

impl LemmyHttp {
    pub fn new(session: Session, user_agent: &str, retry: RetryPolicy) -> Result<Self, ApiError> {
        let mut builder = Client::builder().user_agent(user_agent);
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.pool_max_idle_per_host(10);
        }

        let client = builder.build().map_err(|e| ApiError::from_transport(&e))?;
        Ok(Self {
            client,
            session: Arc::new(RwLock::new(session)),
            retry,
        })
    }

    /// A copy of the current session, as a request would see it.
    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    pub async fn instance_url(&self) -> String {
        self.session.read().await.instance_url().to_string()
    }

    /// Replace the token in place (account switch or logout).
    pub async fn set_token(&self, token: Option<Jwt>) {
        self.session.write().await.set_token(token);
    }

    /// Point the client at another instance; the token is dropped.
    pub async fn set_session(&self, session: Session) {
        *self.session.write().await = session;
    }

    pub async fn has_token(&self) -> bool {
        self.session.read().await.is_authenticated()
    }

    // ── Typed requests ───────────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: Query) -> Result<T, ApiError> {
        let session = self.session().await;
        self.request_with_session(&session, Method::GET, path, query, None::<&()>)
            .await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let session = self.session().await;
        self.request_with_session(&session, Method::POST, path, Query::new(), Some(body))
            .await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let session = self.session().await;
        self.request_with_session(&session, Method::PUT, path, Query::new(), Some(body))
            .await
    }

    /// `POST` under an explicit retry policy instead of the client's.
    pub async fn post_with_policy<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        policy: &RetryPolicy,
    ) -> Result<T, ApiError> {
        let session = self.session().await;
        self.send(&session, policy, Method::POST, path, Query::new(), Some(body))
            .await
    }

    /// Issue a request against an explicit session snapshot.
    pub async fn request_with_session<T: DeserializeOwned, B: Serialize>(
        &self,
        session: &Session,
        method: Method,
        path: &str,
        query: Query,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        self.send(session, &self.retry, method, path, query, body).await
    }

    async fn send<T: DeserializeOwned, B: Serialize>(
        &self,
        session: &Session,
        policy: &RetryPolicy,
        method: Method,
        path: &str,
        query: Query,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let config = policy.config();
        let text = with_retry(&config, path, || {
            self.execute(session, &method, path, &query, body)
        })
        .await?;
        decode(text)
    }

    /// One round trip. Returns the body text of a 200 response.
    pub async fn execute<B: Serialize>(
        &self,
        session: &Session,
        method: &Method,
        path: &str,
        query: &Query,
        body: Option<&B>,
    ) -> Result<String, ApiError> {
        let url = session.api_url(path);
        let mut req = self.client.request(method.clone(), &url).query(query);

        if let Some(token) = session.token() {
            req = req.query(&[("auth", token.as_str())]);
        }

        if let Some(b) = body {
            req = req.json(b);
        }

        tracing::debug!(method = %method, path, "Lemmy request");
        let resp = req.send().await.map_err(|e| ApiError::from_transport(&e))?;
        read_body(resp).await
    }

    pub(crate) fn raw(&self) -> &Client {
        &self.client
    }

    pub(crate) fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }
}

/// Status check shared by API and pictrs requests.
pub(crate) async fn read_body(resp: reqwest::Response) -> Result<String, ApiError> {
    let status = resp.status();
    let text = resp.text().await.map_err(|e| ApiError::from_transport(&e))?;

    if status != StatusCode::OK {
        return Err(ApiError::Network {
            code: i32::from(status.as_u16()),
            description: text,
        });
    }
    Ok(text)
}

/// Decode a successful body, keeping the raw text on failure.
pub fn decode<T: DeserializeOwned>(text: String) -> Result<T, ApiError> {
    match serde_json::from_str(&text) {
        Ok(value) => Ok(value),
        Err(underlying) => {
            tracing::warn!(error = %underlying, "Failed to decode Lemmy response");
            Err(ApiError::Decoding {
                message: text,
                underlying,
            })
        }
    }
}

impl Clone for LemmyHttp {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            session: self.session.clone(),
            retry: self.retry.clone(),
        }
    }
}
