use anyhow::Result;
use askama::Template;

use crate::chart::ChartSpec;

pub const DASHBOARD_HEADING: &str = "Scoring podatności CVSS + AI";
pub const PLOTLY_JS_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardPage<'a> {
    heading: &'a str,
    plotly_src: &'a str,
    figure_json: String,
}

/// Renders the full dashboard document with `spec` embedded for client-side drawing.
pub fn render_dashboard_page(spec: &ChartSpec) -> Result<String> {
    let page = DashboardPage {
        heading: DASHBOARD_HEADING,
        plotly_src: PLOTLY_JS_URL,
        figure_json: escape_script_json(&spec.to_json()?),
    };
    Ok(page.render()?)
}

// `<` only ever appears inside JSON strings, where `\u003c` decodes to the same text.
fn escape_script_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}
