use chrono::{NaiveDate, NaiveDateTime};

use crate::errors::CoreError;
use crate::models::chart::{
    BoxChart, CategorySeries, ChartData, ChartRequest, LineChart, LinePoint, ScatterChart,
    ScatterPoint,
};
use crate::models::dataset::{Column, TabularDataset};

/// Timestamp layouts accepted in the timestamp column, tried in order.
/// Covers the common meter-export shapes: ISO `T`-separated and
/// space-separated, with and without seconds.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Derives chart-ready data sets from a loaded dataset.
///
/// Stateless: one `build` call maps a `ChartRequest` to `ChartData`.
/// The core computes all the numbers and labels — the frontend only
/// renders.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Derive the data for one chart request.
    ///
    /// Every column named in the request must exist in the dataset;
    /// otherwise fails with `MissingColumn` listing all absent columns.
    /// Conversion rules differ per kind: line charts are strict
    /// (`TypeMismatch` on the first bad cell), scatter and box skip
    /// rows/values that don't convert.
    pub fn build(
        &self,
        dataset: &TabularDataset,
        request: &ChartRequest,
    ) -> Result<ChartData, CoreError> {
        let missing: Vec<&str> = request
            .required_columns()
            .into_iter()
            .filter(|name| dataset.column(name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(CoreError::MissingColumn(missing.join(", ")));
        }

        match request {
            ChartRequest::Line {
                timestamp_column,
                value_columns,
            } => self.build_line(dataset, timestamp_column, value_columns),
            ChartRequest::Scatter { x_column, y_column } => {
                self.build_scatter(dataset, x_column, y_column)
            }
            ChartRequest::Box { category_columns } => {
                self.build_box(dataset, category_columns)
            }
        }
    }

    /// Line chart: (timestamp, value1, value2) triples in file row order.
    /// The timestamp column must parse as a date/time for every row, and
    /// both value columns must parse numerically for every row.
    fn build_line(
        &self,
        dataset: &TabularDataset,
        timestamp_column: &str,
        value_columns: &[String; 2],
    ) -> Result<ChartData, CoreError> {
        let timestamps = column(dataset, timestamp_column)?;
        let first = column(dataset, &value_columns[0])?;
        let second = column(dataset, &value_columns[1])?;

        let mut points = Vec::with_capacity(dataset.row_count());
        for row in 0..dataset.row_count() {
            let timestamp = parse_timestamp(&timestamps.values[row]).ok_or_else(|| {
                type_mismatch(timestamp_column, row, &timestamps.values[row], "timestamp")
            })?;
            let first_value = parse_numeric(&first.values[row]).ok_or_else(|| {
                type_mismatch(&first.name, row, &first.values[row], "number")
            })?;
            let second_value = parse_numeric(&second.values[row]).ok_or_else(|| {
                type_mismatch(&second.name, row, &second.values[row], "number")
            })?;

            points.push(LinePoint {
                timestamp,
                first: first_value,
                second: second_value,
            });
        }

        Ok(ChartData::Line(LineChart {
            title: format!("{} and {} Over Time", first.name, second.name),
            series_labels: [first.name.clone(), second.name.clone()],
            points,
        }))
    }

    /// Scatter chart: one (x, y) pair per row. Rows where either value
    /// fails numeric conversion are skipped, not fatal.
    fn build_scatter(
        &self,
        dataset: &TabularDataset,
        x_column: &str,
        y_column: &str,
    ) -> Result<ChartData, CoreError> {
        let xs = column(dataset, x_column)?;
        let ys = column(dataset, y_column)?;

        let points = xs
            .values
            .iter()
            .zip(&ys.values)
            .filter_map(|(x, y)| {
                Some(ScatterPoint {
                    x: parse_numeric(x)?,
                    y: parse_numeric(y)?,
                })
            })
            .collect();

        Ok(ChartData::Scatter(ScatterChart {
            title: format!("{} vs {}", xs.name, ys.name),
            x_label: xs.name.clone(),
            y_label: ys.name.clone(),
            points,
        }))
    }

    /// Box chart: the full numeric sequence of each category column.
    /// Values failing conversion are skipped for that category only.
    fn build_box(
        &self,
        dataset: &TabularDataset,
        category_columns: &[String],
    ) -> Result<ChartData, CoreError> {
        let mut categories = Vec::with_capacity(category_columns.len());
        for name in category_columns {
            let col = column(dataset, name)?;
            categories.push(CategorySeries {
                name: col.name.clone(),
                values: col.values.iter().filter_map(|v| parse_numeric(v)).collect(),
            });
        }

        Ok(ChartData::Box(BoxChart {
            title: "Variability by Category".to_string(),
            categories,
        }))
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}

fn column<'a>(dataset: &'a TabularDataset, name: &str) -> Result<&'a Column, CoreError> {
    dataset
        .column(name)
        .ok_or_else(|| CoreError::MissingColumn(name.to_string()))
}

fn type_mismatch(column: &str, row: usize, value: &str, expected: &str) -> CoreError {
    CoreError::TypeMismatch {
        column: column.to_string(),
        row,
        value: value.to_string(),
        expected: expected.to_string(),
    }
}

/// Interpret a raw cell as a finite number.
#[must_use]
pub fn parse_numeric(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Interpret a raw cell as a date/time. Bare dates resolve to midnight.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    for format in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(ts);
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
