//! API payloads shared by the server and the web client

use serde::{Deserialize, Serialize};

use crate::receptionist::Intent;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_id: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatReply {
    pub message: String,
    pub intent: Intent,
    pub conversation_id: String,
}

/// Who is looking at the dashboard
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    /// False when no auth provider is configured (demo mode)
    pub auth_enabled: bool,
    pub authenticated: bool,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl SessionInfo {
    /// Session served when auth is disabled
    pub fn demo() -> Self {
        Self {
            auth_enabled: false,
            authenticated: false,
            user_id: None,
            display_name: Some("Demo".into()),
        }
    }

    /// Auth is enabled but the caller has no valid session
    pub fn anonymous() -> Self {
        Self {
            auth_enabled: true,
            ..Self::default()
        }
    }

    /// Whether the dashboard should be shown
    pub const fn can_view_dashboard(&self) -> bool {
        !self.auth_enabled || self.authenticated
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub version: String,
    pub auth_enabled: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_access() {
        assert!(SessionInfo::demo().can_view_dashboard());
        assert!(!SessionInfo::anonymous().can_view_dashboard());

        let signed_in = SessionInfo {
            authenticated: true,
            ..SessionInfo::anonymous()
        };
        assert!(signed_in.can_view_dashboard());
    }

    #[test]
    fn test_chat_request_defaults() {
        let req: ChatRequest = serde_json::from_str(r#"{"message": "hi"}"#).unwrap();
        assert!(req.conversation_id.is_none());
    }
}
