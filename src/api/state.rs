//! Application state for the InHand API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::advisor::Advisor;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded regime configuration and, when one is configured, the
/// advisory service.
#[derive(Clone)]
pub struct AppState {
    /// The loaded engine configuration.
    config: Arc<ConfigLoader>,
    /// The advisory service, if any.
    advisor: Option<Arc<dyn Advisor>>,
}

impl AppState {
    /// Creates a new application state with no advisory service.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            advisor: None,
        }
    }

    /// Attaches an advisory service.
    pub fn with_advisor(mut self, advisor: Arc<dyn Advisor>) -> Self {
        self.advisor = Some(advisor);
        self
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the advisory service, if one is configured.
    pub fn advisor(&self) -> Option<&dyn Advisor> {
        self.advisor.as_deref()
    }
}
