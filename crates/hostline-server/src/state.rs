//! Application State

use std::sync::Arc;

use hostline_core::DemoReceptionist;

use crate::auth::AuthProvider;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Scripted receptionist behind the chat demo
    pub receptionist: Arc<DemoReceptionist>,

    /// Auth wrapper (a no-op when credentials are not configured)
    pub auth: Arc<dyn AuthProvider>,
}
