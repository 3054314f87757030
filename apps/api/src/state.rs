use std::sync::Arc;

use crate::ats::ResumeAnalyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; scanning keeps no state between requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable analyzer. Default: AtsScanner.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
}
