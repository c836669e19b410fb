use climatiq_api::types::SearchResult;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct ResultRow {
    #[tabled(rename = "Activity ID")]
    activity_id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Region")]
    region: String,
    #[tabled(rename = "Year")]
    year: i32,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Factor")]
    factor: String,
    #[tabled(rename = "Unit")]
    unit: String,
}

// -- Row builders --

fn build_result_rows(results: &[SearchResult]) -> Vec<ResultRow> {
    results
        .iter()
        .map(|r| ResultRow {
            activity_id: r.activity_id.clone(),
            name: r.name.clone(),
            region: r.region.clone(),
            year: r.year,
            source: r.source.clone(),
            factor: format_factor(r.factor),
            unit: r.unit.clone(),
        })
        .collect()
}

// -- Table output --

pub fn print_results_table(results: &[SearchResult]) {
    println!("{}", Table::new(build_result_rows(results)));
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Withheld factors show as a dash rather than a misleading zero.
fn format_factor(factor: Option<f64>) -> String {
    match factor {
        Some(value) => format!("{}", value),
        None => "-".to_string(),
    }
}
