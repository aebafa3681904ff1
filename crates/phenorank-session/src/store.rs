use chrono::{DateTime, Utc};
use phenorank_common::{AnalysisResult, Locale};
use phenorank_config::{AppSettings, Config};
use phenorank_ranker::rank_result;
use tracing::info;

/// Explicit state container. Reads go through accessors; every mutation is
/// one of the named actions below.
#[derive(Debug, Clone, Default)]
pub struct AppStore {
    settings: AppSettings,
    locale: Locale,
    analysis_result: Option<AnalysisResult>,
    result_received_at: Option<DateTime<Utc>>,
    /// Data URL of the uploaded image.
    uploaded_image: Option<String>,
}

impl AppStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            settings: AppSettings::from(&config.server),
            locale: config.ui.locale,
            ..Self::default()
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn analysis_result(&self) -> Option<&AnalysisResult> {
        self.analysis_result.as_ref()
    }

    pub fn result_received_at(&self) -> Option<DateTime<Utc>> {
        self.result_received_at
    }

    pub fn uploaded_image(&self) -> Option<&str> {
        self.uploaded_image.as_deref()
    }

    pub fn predict_api_uri(&self) -> String {
        self.settings.predict_api_uri()
    }

    // ── Actions ──────────────────────────────────────────────────────────────

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn set_uploaded_image(&mut self, image_data_url: impl Into<String>) {
        self.uploaded_image = Some(image_data_url.into());
    }

    /// Rank the incoming result and make it the current one, replacing any
    /// previous result.
    pub fn set_analysis_result(&mut self, result: AnalysisResult) -> &AnalysisResult {
        let ranked = rank_result(result);
        info!(
            candidates = ranked.candidate_count(),
            replaced = self.analysis_result.is_some(),
            "analysis result stored"
        );
        self.result_received_at = Some(Utc::now());
        self.analysis_result.insert(ranked)
    }

    /// Drop the current result together with the uploaded image.
    pub fn clear_analysis_result(&mut self) {
        self.analysis_result = None;
        self.result_received_at = None;
        self.uploaded_image = None;
        info!("analysis result cleared");
    }

    pub fn update_settings(&mut self, new_settings: AppSettings) {
        self.settings = new_settings;
        info!(uri = %self.predict_api_uri(), "settings updated");
    }
}
