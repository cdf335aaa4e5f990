use serde::Serialize;

use crate::enums::TraceType;
use crate::structs::ScoredVulnerability;

pub const CHART_TITLE: &str = "Wyniki scoringu dla podatności";
pub const SERIES_NAME: &str = "Combined Score";

/// Declarative figure in the shape Plotly.js expects: `{data: [...], layout: {...}}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSpec {
    pub data: Vec<BarTrace>,
    pub layout: Layout,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarTrace {
    pub x: Vec<String>,
    pub y: Vec<f64>,
    #[serde(rename = "type")]
    pub trace_type: TraceType,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
}

pub fn build_chart_spec(records: &[ScoredVulnerability]) -> ChartSpec {
    let (x, y): (Vec<String>, Vec<f64>) =
        records.iter().map(|r| (r.id.clone(), r.combined_score)).unzip();
    ChartSpec {
        data: vec![BarTrace {
            x,
            y,
            trace_type: TraceType::Bar,
            name: SERIES_NAME.to_string(),
        }],
        layout: Layout { title: CHART_TITLE.to_string() },
    }
}

impl ChartSpec {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
