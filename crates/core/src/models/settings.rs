use serde::{Deserialize, Serialize};

use super::chart::ChartRequest;

/// User-configurable column names for the standard charts.
///
/// Defaults match the column layout of the electricity consumption and
/// production CSV exports the tool was built around. A frontend can
/// override any of these for files with different headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Column holding the record timestamp.
    pub timestamp_column: String,

    /// Total consumption column (megawatts in the original exports).
    pub consumption_column: String,

    /// Total production column.
    pub production_column: String,

    /// One column per energy-source category, used by the box chart.
    pub category_columns: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timestamp_column: "DateTime".to_string(),
            consumption_column: "Consumption".to_string(),
            production_column: "Production".to_string(),
            category_columns: vec![
                "Nuclear".to_string(),
                "Wind".to_string(),
                "Hydroelectric".to_string(),
                "Oil and Gas".to_string(),
                "Coal".to_string(),
                "Solar".to_string(),
                "Biomass".to_string(),
            ],
        }
    }
}

impl Settings {
    /// Default line chart request: consumption and production over time.
    #[must_use]
    pub fn line_request(&self) -> ChartRequest {
        ChartRequest::line(
            &self.timestamp_column,
            &self.consumption_column,
            &self.production_column,
        )
    }

    /// Default scatter request: consumption vs production.
    #[must_use]
    pub fn scatter_request(&self) -> ChartRequest {
        ChartRequest::scatter(&self.consumption_column, &self.production_column)
    }

    /// Default box request: one category per energy source.
    #[must_use]
    pub fn box_request(&self) -> ChartRequest {
        ChartRequest::box_plot(self.category_columns.clone())
    }
}
