//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::controllers::Notifier;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Where the practice API lives
    config: StoredValue<ApiConfig>,
    /// Transient status message for the current screen
    pub notifier: Notifier,
}

impl AppContext {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            notifier: Notifier::new(),
        }
    }

    /// Client for the configured API
    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.config.get_value())
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
