use std::sync::Arc;

use crate::analysis::enrichment::SkillEnricher;
use crate::analysis::scoring::ScoringWeights;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::session::SessionSlot;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
    /// Pluggable skill enricher. Default: LlmEnricher; tests swap in
    /// extraction-only backends.
    pub enricher: Arc<dyn SkillEnricher>,
    /// Scoring constants, named and overridable rather than buried as
    /// literals.
    pub weights: ScoringWeights,
    /// The single "current resume" slot. Upload, delete and score all
    /// serialize their slot access through this lock; the analysis core
    /// itself only ever sees plain parameters.
    pub session: SessionSlot,
}
