//! Session-aware HTTP client core.
//!
//! Every authenticated call goes through [`SessionClient::send_with_refresh`]:
//! the request is built with the current access token, and a 401 response
//! triggers a token refresh behind a single-flight gate. Requests that fail
//! while a refresh is outstanding queue on the gate (FIFO) and replay with
//! the new token once it resolves. A replay is never retried a second time.

use std::sync::Arc;

use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use tokio::sync::Mutex;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::storage::{MemoryTokenStore, TokenStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

use super::types::RefreshResponse;

pub struct SessionClient {
    http: Client,
    config: ClientConfig,
    tokens: Arc<dyn TokenStore>,
    refresh_gate: Mutex<()>,
}

impl SessionClient {
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_store(config, Arc::new(MemoryTokenStore::default()))
    }

    pub fn with_store(config: ClientConfig, tokens: Arc<dyn TokenStore>) -> Self {
        let mut builder = Client::builder();
        if config.with_credentials {
            builder = builder.cookie_store(true);
        }
        Self {
            // Same failure mode as reqwest::Client::new(): construction only
            // fails when the TLS backend cannot be initialized.
            http: builder.build().expect("failed to build HTTP client"),
            config,
            tokens,
            refresh_gate: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn tokens(&self) -> &dyn TokenStore {
        self.tokens.as_ref()
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.http
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Headers for an authenticated request. When no access token is held
    /// the map is empty: no Authorization header is sent at all.
    pub(crate) fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = self.tokens.get(ACCESS_TOKEN_KEY) {
            if let Some(value) = bearer_header(&token) {
                headers.insert(AUTHORIZATION, value);
            }
        }
        headers
    }

    /// Drops both stored tokens. Never leaves a partial token pair behind.
    pub(crate) fn clear_session(&self) {
        self.tokens.remove(ACCESS_TOKEN_KEY);
        self.tokens.remove(REFRESH_TOKEN_KEY);
    }

    /// Issues a request, refreshing the session and replaying once if the
    /// first attempt comes back 401.
    ///
    /// `build` runs once per attempt so the replay picks up the refreshed
    /// token when it re-reads `auth_headers`.
    pub(crate) async fn send_with_refresh<F>(&self, build: F) -> Result<Response, ApiError>
    where
        F: Fn() -> RequestBuilder,
    {
        let stale = self.tokens.get(ACCESS_TOKEN_KEY);
        let response = build().send().await.map_err(ApiError::from_transport)?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }
        if stale.is_none() && self.tokens.get(REFRESH_TOKEN_KEY).is_none() {
            // Never authenticated; there is nothing to refresh with.
            return Err(ApiError::Unauthorized);
        }

        self.refresh_access(stale).await?;

        // One-shot replay: a second 401 means the session is gone for good.
        let replay = build().send().await.map_err(ApiError::from_transport)?;
        if replay.status() == StatusCode::UNAUTHORIZED {
            self.clear_session();
            return Err(ApiError::SessionExpired);
        }
        Ok(replay)
    }

    /// Single-flight refresh. `stale` is the access token the caller used
    /// for its failed attempt; whoever acquires the gate first performs the
    /// actual refresh, and everyone queued behind it observes the changed
    /// token and goes straight to its replay. The tokio mutex wakes waiters
    /// in FIFO order, so queued callers replay in the order they arrived.
    async fn refresh_access(&self, stale: Option<String>) -> Result<(), ApiError> {
        let _gate = self.refresh_gate.lock().await;

        let current = self.tokens.get(ACCESS_TOKEN_KEY);
        if current != stale {
            // The refresh we queued behind already settled this session.
            return match current {
                Some(_) => Ok(()),
                None => Err(ApiError::SessionExpired),
            };
        }

        let refresh = match self.tokens.get(REFRESH_TOKEN_KEY) {
            Some(token) => token,
            None => {
                self.clear_session();
                return Err(ApiError::SessionExpired);
            }
        };

        debug!("access token rejected, refreshing session");
        let result = self
            .http
            .post(self.endpoint("api/auth/refresh/"))
            .json(&json!({ "refresh": refresh }))
            .send()
            .await;

        let response = match result {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                warn!("token refresh rejected with status {}", response.status());
                self.clear_session();
                return Err(ApiError::SessionExpired);
            }
            Err(err) => {
                warn!("token refresh did not reach the server: {}", err);
                self.clear_session();
                return Err(ApiError::SessionExpired);
            }
        };

        let refreshed: RefreshResponse = match response.json().await {
            Ok(body) => body,
            Err(err) => {
                warn!("token refresh returned an unreadable body: {}", err);
                self.clear_session();
                return Err(ApiError::SessionExpired);
            }
        };

        self.tokens.set(ACCESS_TOKEN_KEY, &refreshed.access);
        if let Some(rotated) = &refreshed.refresh {
            self.tokens.set(REFRESH_TOKEN_KEY, rotated);
        }
        debug!("session refreshed");
        Ok(())
    }

    /// Forces a refresh of the access token using the stored refresh token.
    pub async fn refresh_session(&self) -> Result<(), ApiError> {
        let stale = self.tokens.get(ACCESS_TOKEN_KEY);
        self.refresh_access(stale).await
    }

    /// Fetches a pagination link (`next`/`previous`) exactly as returned by
    /// the backend.
    pub async fn follow_page<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<super::types::Page<T>, ApiError> {
        let response = self
            .send_with_refresh(|| self.http.get(url).headers(self.auth_headers()))
            .await?;
        expect_json(response).await
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        let response = self
            .send_with_refresh(|| {
                let mut request = self.http.get(&url).headers(self.auth_headers());
                if !query.is_empty() {
                    request = request.query(query);
                }
                request
            })
            .await?;
        expect_json(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        let response = self
            .send_with_refresh(|| self.http.post(&url).headers(self.auth_headers()).json(body))
            .await?;
        expect_json(response).await
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        let response = self
            .send_with_refresh(|| self.http.put(&url).headers(self.auth_headers()).json(body))
            .await?;
        expect_json(response).await
    }

    pub(crate) async fn patch_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        let response = self
            .send_with_refresh(|| self.http.patch(&url).headers(self.auth_headers()).json(body))
            .await?;
        expect_json(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.endpoint(path);
        let response = self
            .send_with_refresh(|| self.http.delete(&url).headers(self.auth_headers()))
            .await?;
        expect_ok(response).await
    }
}

impl Default for SessionClient {
    fn default() -> Self {
        Self::new()
    }
}

fn bearer_header(token: &str) -> Option<HeaderValue> {
    match HeaderValue::from_str(&format!("Bearer {}", token)) {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("stored access token is not a valid header value, sending unauthenticated");
            None
        }
    }
}

/// Maps a response onto the error taxonomy and decodes a successful body.
pub(crate) async fn expect_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        response.json().await.map_err(ApiError::from_transport)
    } else {
        Err(error_for_status(status, response).await)
    }
}

pub(crate) async fn expect_ok(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(error_for_status(status, response).await)
    }
}

async fn error_for_status(status: StatusCode, response: Response) -> ApiError {
    if status == StatusCode::UNAUTHORIZED {
        return ApiError::Unauthorized;
    }
    let body = response.text().await.unwrap_or_default();
    ApiError::ServerError { status, body }
}
