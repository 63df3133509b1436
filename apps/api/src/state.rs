use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionBackend;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// No per-request state lives here: every generation request is independent
/// and safe to run concurrently with others.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Default: `OllamaClient`; tests swap in
    /// a canned backend.
    pub llm: Arc<dyn CompletionBackend>,
    /// Runtime settings, kept available to handlers that need them.
    #[allow(dead_code)]
    pub config: Config,
}
