use std::sync::Arc;

use crate::characteristics::store::CharacteristicsStore;
use crate::config::Config;
use crate::llm_client::ChatModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Chat-completion backend. Production: `LlmClient`.
    pub llm: Arc<dyn ChatModel>,
    /// Characteristics persistence. Production: `PgCharacteristicsStore`.
    pub store: Arc<dyn CharacteristicsStore>,
    pub config: Config,
}
