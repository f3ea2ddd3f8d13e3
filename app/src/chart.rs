//! FILENAME: app/src/chart.rs
//! Chart option builder.
//!
//! The embedded charting library receives one JSON option object per render:
//! a category axis of bucket labels and a single "Sales" series. Clicks on a
//! bar or point come back as the bucket label, which feeds the drill-down.

use rust_decimal::Decimal;
use sales_engine::{format_decimal, Dimension, SummaryBucket};
use serde::{Deserialize, Serialize};
use serde_json::{json, Number, Value};

/// Series type. A rendering hint only; the summary does not depend on it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Bar,
    Line,
}

impl ChartType {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
        }
    }
}

pub const SERIES_NAME: &str = "Sales";

pub fn chart_title(dimension: Dimension) -> String {
    format!("Sales by {}", dimension.field_name())
}

/// Builds the option object for the charting collaborator.
pub fn build_chart_option(
    dimension: Dimension,
    chart_type: ChartType,
    buckets: &[SummaryBucket],
) -> Value {
    let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
    let values: Vec<Value> = buckets.iter().map(|b| total_to_json(b.total)).collect();

    json!({
        "title": { "text": chart_title(dimension) },
        "tooltip": { "trigger": "axis" },
        "dataZoom": [
            { "type": "inside", "start": 0, "end": 100 },
            { "type": "slider" }
        ],
        "xAxis": { "type": "category", "data": labels },
        "yAxis": { "type": "value" },
        "series": [{
            "name": SERIES_NAME,
            "type": chart_type.as_str(),
            "data": values
        }]
    })
}

/// Totals go to the chart as plain JSON numbers, parsed from their decimal
/// text so `15.01` lands on the nearest double.
fn total_to_json(total: Decimal) -> Value {
    format_decimal(&total)
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}
