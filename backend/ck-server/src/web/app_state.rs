use crate::{Renderer, ServerErrorResult, SubmissionRegistry};

use ck_client::BackendClient;
use ck_config::{Config, SessionConfig, UiConfig};

use std::sync::Arc;

/// Shared application state for page handlers and the session gate
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<BackendClient>,
    pub session: SessionConfig,
    pub ui: UiConfig,
    pub renderer: Arc<Renderer>,
    pub submissions: SubmissionRegistry,
}

impl AppState {
    /// Build state from validated configuration
    pub fn new(config: &Config) -> ServerErrorResult<Self> {
        let client = BackendClient::new(&config.api.base_url, config.api.timeout())?;
        Self::with_client(client, config)
    }

    /// Build state around an existing backend client
    pub fn with_client(client: BackendClient, config: &Config) -> ServerErrorResult<Self> {
        Ok(Self {
            client: Arc::new(client),
            session: config.session.clone(),
            ui: config.ui.clone(),
            renderer: Arc::new(Renderer::new()?),
            submissions: SubmissionRegistry::new(),
        })
    }
}
