//! Optional Auth Wrapper
//!
//! The dashboard can sit behind a third-party session API. When the
//! credentials are missing or still hold placeholder values the server runs
//! with [`DisabledAuth`], which exposes the same interface and reports demo
//! sessions.

use std::sync::Arc;

use async_trait::async_trait;
use hostline_core::api::SessionInfo;
use hostline_core::{LoaderConfig, Result, RetryLoader, SiteError, TokioDelay};
use reqwest::StatusCode;
use serde::Deserialize;

/// Session lookup capability
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Provider name for logs
    fn name(&self) -> &'static str;

    /// Whether sessions are actually checked
    fn is_enabled(&self) -> bool;

    /// Resolve a bearer token into session info
    async fn session(&self, token: Option<&str>) -> Result<SessionInfo>;
}

/// No-op provider used when auth is not configured
#[derive(Clone, Copy, Debug, Default)]
pub struct DisabledAuth;

#[async_trait]
impl AuthProvider for DisabledAuth {
    fn name(&self) -> &'static str {
        "disabled"
    }

    fn is_enabled(&self) -> bool {
        false
    }

    async fn session(&self, _token: Option<&str>) -> Result<SessionInfo> {
        Ok(SessionInfo::demo())
    }
}

#[derive(Debug, Deserialize)]
struct RemoteSession {
    user_id: String,
    #[serde(default)]
    display_name: Option<String>,
    status: String,
}

/// Session API client
pub struct RemoteAuth {
    client: reqwest::Client,
    api_url: String,
    secret_key: String,
    loader: RetryLoader<TokioDelay>,
}

impl RemoteAuth {
    pub fn new(
        api_url: impl Into<String>,
        secret_key: impl Into<String>,
        loader: LoaderConfig,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            secret_key: secret_key.into(),
            loader: RetryLoader::new(loader, TokioDelay),
        }
    }

    async fn fetch(&self, url: &str) -> Result<Option<RemoteSession>> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.secret_key)
            .send()
            .await
            .map_err(|e| SiteError::Http(e.to_string()))?;

        match response.status() {
            status if status.is_success() => {
                let session = response
                    .json()
                    .await
                    .map_err(|e| SiteError::Http(e.to_string()))?;
                Ok(Some(session))
            }
            StatusCode::UNAUTHORIZED | StatusCode::NOT_FOUND => Ok(None),
            StatusCode::FORBIDDEN => Err(SiteError::Auth(
                "session API rejected the server credentials".into(),
            )),
            status => Err(SiteError::Status {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            }),
        }
    }
}

#[async_trait]
impl AuthProvider for RemoteAuth {
    fn name(&self) -> &'static str {
        "remote"
    }

    fn is_enabled(&self) -> bool {
        true
    }

    async fn session(&self, token: Option<&str>) -> Result<SessionInfo> {
        let Some(token) = token.filter(|t| is_token_shaped(t)) else {
            return Ok(SessionInfo::anonymous());
        };

        let url = format!("{}/sessions/{}", self.api_url, token);
        let remote = self.loader.load(|| self.fetch(&url)).await?;

        Ok(match remote {
            Some(session) if session.status == "active" => SessionInfo {
                auth_enabled: true,
                authenticated: true,
                user_id: Some(session.user_id),
                display_name: session.display_name,
            },
            _ => SessionInfo::anonymous(),
        })
    }
}

fn is_token_shaped(token: &str) -> bool {
    !token.is_empty()
        && token.len() <= 256
        && token.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// True for empty keys and the values left over from `.env.example`
pub fn is_placeholder(key: &str) -> bool {
    let key = key.trim().to_ascii_lowercase();
    key.is_empty()
        || key.contains("placeholder")
        || key.starts_with("your_")
        || key.contains("xxxx")
}

/// Pick the provider from explicit settings
pub fn select_auth(
    publishable_key: Option<&str>,
    secret_key: Option<&str>,
    api_url: Option<&str>,
    loader: LoaderConfig,
) -> Arc<dyn AuthProvider> {
    match (publishable_key, secret_key, api_url) {
        (Some(pk), Some(sk), Some(url))
            if !is_placeholder(pk) && !is_placeholder(sk) && !url.trim().is_empty() =>
        {
            Arc::new(RemoteAuth::new(url, sk, loader))
        }
        _ => Arc::new(DisabledAuth),
    }
}

/// Pick the provider from `AUTH_PUBLISHABLE_KEY`, `AUTH_SECRET_KEY` and `AUTH_API_URL`
pub fn auth_from_env(loader: LoaderConfig) -> Arc<dyn AuthProvider> {
    let publishable = std::env::var("AUTH_PUBLISHABLE_KEY").ok();
    let secret = std::env::var("AUTH_SECRET_KEY").ok();
    let api_url = std::env::var("AUTH_API_URL").ok();

    select_auth(publishable.as_deref(), secret.as_deref(), api_url.as_deref(), loader)
}
