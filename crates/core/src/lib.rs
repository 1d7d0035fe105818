pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use errors::CoreError;
use models::chart::{ChartData, ChartRequest};
use models::dataset::TabularDataset;
use models::settings::Settings;
use services::chart_service::ChartService;
use storage::manager::StorageManager;

/// Main entry point for the Energy Analyzer core library.
///
/// Holds the one piece of mutable state — the currently loaded dataset —
/// plus the settings and services that operate on it. The lifecycle a
/// frontend drives is: no file loaded → file loaded → plot available;
/// all calls are plain synchronous functions.
#[must_use]
pub struct EnergyAnalyzer {
    dataset: Option<TabularDataset>,
    settings: Settings,
    chart_service: ChartService,
}

impl std::fmt::Debug for EnergyAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnergyAnalyzer")
            .field("rows", &self.dataset.as_ref().map(TabularDataset::row_count))
            .field(
                "columns",
                &self.dataset.as_ref().map(TabularDataset::column_count),
            )
            .field("settings", &self.settings)
            .finish()
    }
}

impl EnergyAnalyzer {
    /// Create an analyzer with no dataset loaded and default settings.
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create an analyzer with custom column settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            dataset: None,
            settings,
            chart_service: ChartService::new(),
        }
    }

    // ── Load / Save ─────────────────────────────────────────────────

    /// Load a CSV file from disk, replacing any previously loaded dataset.
    ///
    /// The load is atomic: on failure the previously loaded dataset (if
    /// any) is left untouched, and a partial parse is never exposed.
    pub fn load_file(&mut self, path: &str) -> Result<(), CoreError> {
        let dataset = StorageManager::load_from_path(path)?;
        self.dataset = Some(dataset);
        Ok(())
    }

    /// Load a dataset from CSV bytes (for frontends that own file I/O).
    /// Same atomicity as `load_file`.
    pub fn load_bytes(&mut self, data: &[u8]) -> Result<(), CoreError> {
        let dataset = StorageManager::load_from_bytes(data)?;
        self.dataset = Some(dataset);
        Ok(())
    }

    /// Save the current dataset back to a CSV file.
    /// Fails with `NoData` if nothing has been loaded.
    pub fn save_file(&self, path: &str) -> Result<(), CoreError> {
        StorageManager::save_to_path(self.current()?, path)
    }

    /// Serialize the current dataset to CSV bytes.
    /// Fails with `NoData` if nothing has been loaded.
    pub fn save_bytes(&self) -> Result<Vec<u8>, CoreError> {
        StorageManager::save_to_bytes(self.current()?)
    }

    // ── Dataset Access ──────────────────────────────────────────────

    /// Returns `true` once a dataset has been loaded.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.dataset.is_some()
    }

    /// The currently loaded dataset, if any.
    #[must_use]
    pub fn dataset(&self) -> Option<&TabularDataset> {
        self.dataset.as_ref()
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// Derive chart data for an arbitrary request.
    /// Fails with `NoData` if nothing has been loaded.
    pub fn build_chart(&self, request: &ChartRequest) -> Result<ChartData, CoreError> {
        self.chart_service.build(self.current()?, request)
    }

    /// Consumption and production over time, using the settings' columns.
    pub fn line_chart(&self) -> Result<ChartData, CoreError> {
        self.build_chart(&self.settings.line_request())
    }

    /// Consumption vs production, using the settings' columns.
    pub fn scatter_chart(&self) -> Result<ChartData, CoreError> {
        self.build_chart(&self.settings.scatter_request())
    }

    /// Per-source variability, using the settings' category columns.
    pub fn box_chart(&self) -> Result<ChartData, CoreError> {
        self.build_chart(&self.settings.box_request())
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mutable access for frontends that let the user remap columns.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export the current dataset as pretty-printed JSON (for debugging
    /// or display). Fails with `NoData` if nothing has been loaded.
    pub fn dataset_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self.current()?)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize dataset: {e}")))
    }

    // ── Internal ────────────────────────────────────────────────────

    fn current(&self) -> Result<&TabularDataset, CoreError> {
        self.dataset.as_ref().ok_or(CoreError::NoData)
    }
}

impl Default for EnergyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
