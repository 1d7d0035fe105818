use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Which of the three chart types to derive data for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Line,
    Scatter,
    Box,
}

/// A single chart request: the chart kind plus the dataset columns it
/// needs. Constructed fresh per user request and consumed immediately by
/// `ChartService::build`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartRequest {
    /// Two numeric series over a timestamp column.
    Line {
        timestamp_column: String,
        value_columns: [String; 2],
    },
    /// Two numeric columns plotted against each other.
    Scatter { x_column: String, y_column: String },
    /// One numeric value sequence per named category column.
    Box { category_columns: Vec<String> },
}

impl ChartRequest {
    pub fn line(
        timestamp_column: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::Line {
            timestamp_column: timestamp_column.into(),
            value_columns: [first.into(), second.into()],
        }
    }

    pub fn scatter(x_column: impl Into<String>, y_column: impl Into<String>) -> Self {
        Self::Scatter {
            x_column: x_column.into(),
            y_column: y_column.into(),
        }
    }

    pub fn box_plot(category_columns: Vec<String>) -> Self {
        Self::Box { category_columns }
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Line { .. } => ChartKind::Line,
            Self::Scatter { .. } => ChartKind::Scatter,
            Self::Box { .. } => ChartKind::Box,
        }
    }

    /// Every column this request needs, in request order.
    #[must_use]
    pub fn required_columns(&self) -> Vec<&str> {
        match self {
            Self::Line {
                timestamp_column,
                value_columns,
            } => {
                let mut cols = vec![timestamp_column.as_str()];
                cols.extend(value_columns.iter().map(String::as_str));
                cols
            }
            Self::Scatter { x_column, y_column } => {
                vec![x_column.as_str(), y_column.as_str()]
            }
            Self::Box { category_columns } => {
                category_columns.iter().map(String::as_str).collect()
            }
        }
    }
}

/// One point of a time-series line chart: a timestamp and the two
/// requested series values at that timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub timestamp: NaiveDateTime,
    pub first: f64,
    pub second: f64,
}

/// Line chart payload. Points are in file row order — meter exports are
/// already time-ordered, and the core never re-sorts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub title: String,
    /// Labels for `LinePoint::first` / `LinePoint::second`, in order.
    pub series_labels: [String; 2],
    pub points: Vec<LinePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

/// Scatter chart payload: one point per row where both values converted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
}

/// One box-plot category: the column name and its full numeric sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySeries {
    pub name: String,
    pub values: Vec<f64>,
}

/// Box chart payload: per-category value sequences, in request order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxChart {
    pub title: String,
    pub categories: Vec<CategorySeries>,
}

/// Chart-ready data derived from the dataset.
///
/// The core computes these — the frontend just renders them, including
/// the titles and labels, so the renderer needs no column knowledge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartData {
    Line(LineChart),
    Scatter(ScatterChart),
    Box(BoxChart),
}

impl ChartData {
    #[must_use]
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Line(_) => ChartKind::Line,
            Self::Scatter(_) => ChartKind::Scatter,
            Self::Box(_) => ChartKind::Box,
        }
    }
}
