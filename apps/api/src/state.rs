use std::sync::Arc;

use crate::config::Config;
use crate::matching::compatibility::{CompatibilityScorer, HeuristicScorer};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable compatibility scorer. Default: HeuristicScorer.
    pub scorer: Arc<dyn CompatibilityScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            scorer: Arc::new(HeuristicScorer),
        }
    }
}
