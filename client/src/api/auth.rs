use log::warn;
use serde_json::json;

use crate::error::ApiError;
use crate::storage::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

use super::client::{expect_json, SessionClient};
use super::types::{LoginRequest, LoginResponse, RegisterRequest, UserProfile};

impl SessionClient {
    /// Exchanges credentials for a token pair and stores it. Login never
    /// goes through the refresh path: a 401 here is simply bad credentials.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self
            .http_client()
            .post(self.endpoint("api/auth/login/"))
            .json(request)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let login: LoginResponse = expect_json(response).await?;
        self.tokens().set(ACCESS_TOKEN_KEY, &login.access);
        self.tokens().set(REFRESH_TOKEN_KEY, &login.refresh);
        Ok(login)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<UserProfile, ApiError> {
        let response = self
            .http_client()
            .post(self.endpoint("api/auth/register/"))
            .json(request)
            .send()
            .await
            .map_err(ApiError::from_transport)?;
        expect_json(response).await
    }

    /// Revokes the session server-side on a best-effort basis and always
    /// drops the local token pair.
    pub async fn logout(&self) {
        let url = self.endpoint("api/auth/logout/");
        let result = self
            .send_with_refresh(|| {
                self.http_client()
                    .post(&url)
                    .headers(self.auth_headers())
                    .json(&json!({}))
            })
            .await;
        if let Err(err) = result {
            warn!("server-side logout failed: {}", err);
        }
        self.clear_session();
    }

    /// Whether a token pair is currently held.
    pub fn is_authenticated(&self) -> bool {
        self.tokens().get(ACCESS_TOKEN_KEY).is_some()
            || self.tokens().get(REFRESH_TOKEN_KEY).is_some()
    }
}
