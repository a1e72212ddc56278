//! API Client

use hostline_core::api::{ChatReply, ChatRequest, SessionInfo};
use hostline_core::{PageContent, Result, SiteError};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Key under which the dashboard session token is kept
const SESSION_KEY: &str = "hostline_session";

/// Chat message for display
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
    pub sent_at: String,
}

impl ChatMessage {
    pub fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
            sent_at: chrono::Local::now().format("%H:%M").to_string(),
        }
    }
}

fn endpoint(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into());

    format!("{origin}{path}")
}

fn session_token() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(SESSION_KEY).ok().flatten())
        .filter(|t| !t.is_empty())
}

async fn send_json<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T> {
    let response = request
        .send()
        .await
        .map_err(|e| SiteError::Http(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        response.json().await.map_err(|e| SiteError::Http(e.to_string()))
    } else {
        let data: serde_json::Value = response.json().await.unwrap_or_default();
        Err(SiteError::Status {
            status: status.as_u16(),
            message: data["error"].as_str().unwrap_or("Request failed").to_string(),
        })
    }
}

/// Fetch and validate a page's content bundle
pub async fn fetch_content(slug: &str) -> Result<PageContent> {
    let response = reqwest::Client::new()
        .get(endpoint(&PageContent::bundle_path(slug)))
        .send()
        .await
        .map_err(|e| SiteError::Http(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SiteError::Status {
            status: status.as_u16(),
            message: format!("content bundle '{slug}' unavailable"),
        });
    }

    let body = response.text().await.map_err(|e| SiteError::Http(e.to_string()))?;
    PageContent::from_json(&body)
}

/// Send a chat message to the demo receptionist
pub async fn send_chat(message: &str, conversation_id: Option<String>) -> Result<ChatReply> {
    let body = ChatRequest {
        message: message.to_string(),
        conversation_id,
    };

    send_json(reqwest::Client::new().post(endpoint("/api/chat")).json(&body)).await
}

/// Look up the dashboard session
pub async fn fetch_session() -> Result<SessionInfo> {
    let mut request = reqwest::Client::new().get(endpoint("/api/session"));
    if let Some(token) = session_token() {
        request = request.bearer_auth(token);
    }

    send_json(request).await
}
