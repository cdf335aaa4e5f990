use colored::Colorize;

use crate::dataset::find_duplicate_ids;
use crate::structs::{DashboardConfig, ScoredVulnerability};
use crate::utils::table::print_table;
use crate::{console_note, console_url, print_dbg, print_header, print_warn};

pub fn print_dataset_summary(config: &DashboardConfig, records: &[ScoredVulnerability]) {
    print_header!("Vulnerability Scores");
    if records.is_empty() {
        println!("No records found in {}.", config.data_path.display());
    } else {
        print_table(vec!["ID", "Combined Score"], get_score_table_rows(records));
        println!("Loaded {} record(s) from {}.", records.len(), config.data_path.display());
    }

    let duplicates = find_duplicate_ids(records);
    if !duplicates.is_empty() {
        print_warn!("Duplicate ids are drawn as separate entries in the chart:");
        for (id, count) in duplicates {
            print_warn!("  {id} (x{count})");
        }
    }
    println!();
}

pub fn print_serving_banner(config: &DashboardConfig, chart_json_len: usize, etag: &str) {
    print_dbg!(config.debug, "{}", format_render_stats(chart_json_len, etag));
    println!(
        "Dashboard started on {}",
        chrono::offset::Local::now().format("%Y-%m-%d %I:%M:%S %p")
    );
    println!("Dashboard is running on {}", console_url!(config.url()));
    println!("{}", console_note!("Press CTRL+C to quit"));
}

fn format_render_stats(chart_json_len: usize, etag: &str) -> String {
    format!("Chart JSON: {} bytes, page ETag {}", chart_json_len, etag)
}

fn get_score_table_rows(records: &[ScoredVulnerability]) -> Vec<Vec<String>> {
    records.iter().map(|r| vec![r.id.clone(), r.combined_score.to_string()]).collect()
}
