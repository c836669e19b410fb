use anyhow::{Context, Result};
use clap::Args;
use climatiq_api::{Client, Query, SearchQuery};

use crate::output::{print_json, print_results_table, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    /// Dataset version to search (e.g. ^5)
    #[arg(long)]
    pub data_version: String,

    /// Free-text search
    #[arg(long)]
    pub query: Option<String>,

    /// Filter by activity ID
    #[arg(long)]
    pub activity_id: Option<String>,

    /// Filter by category (e.g. "cloud computing - cpu")
    #[arg(long)]
    pub category: Option<String>,

    /// Filter by sector
    #[arg(long)]
    pub sector: Option<String>,

    /// Filter by data source (e.g. BEIS, EPA)
    #[arg(long)]
    pub source: Option<String>,

    /// Filter by source dataset
    #[arg(long)]
    pub source_dataset: Option<String>,

    /// Filter by year the factor applies to
    #[arg(long)]
    pub year: Option<i32>,

    /// Filter by region code (e.g. US, GB, ZA)
    #[arg(long)]
    pub region: Option<String>,

    /// Filter by unit type (e.g. Energy, Weight)
    #[arg(long)]
    pub unit_type: Option<String>,

    /// Filter by source LCA activity
    #[arg(long)]
    pub source_lca_activity: Option<String>,

    /// Filter by calculation method: ar4, ar5
    #[arg(long)]
    pub calculation_method: Option<String>,

    /// Allow factors carrying this data quality flag (repeatable)
    #[arg(long = "allow-quality-flag")]
    pub allowed_data_quality_flags: Vec<String>,

    /// Filter by access type: public, premium, private
    #[arg(long)]
    pub access_type: Option<String>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Results per page (max 100)
    #[arg(long, default_value = "20")]
    pub results_per_page: u32,
}

pub fn build_query(args: &SearchArgs) -> SearchQuery {
    let mut query = SearchQuery::new(&args.data_version)
        .with_allowed_data_quality_flags(&args.allowed_data_quality_flags)
        .with_page(args.page)
        .with_results_per_page(args.results_per_page);

    if let Some(text) = &args.query {
        query = query.with_query(text);
    }
    if let Some(activity_id) = &args.activity_id {
        query = query.with_activity_id(activity_id);
    }
    if let Some(category) = &args.category {
        query = query.with_category(category);
    }
    if let Some(sector) = &args.sector {
        query = query.with_sector(sector);
    }
    if let Some(source) = &args.source {
        query = query.with_source(source);
    }
    if let Some(source_dataset) = &args.source_dataset {
        query = query.with_source_dataset(source_dataset);
    }
    if let Some(year) = args.year {
        query = query.with_year(year);
    }
    if let Some(region) = &args.region {
        query = query.with_region(region);
    }
    if let Some(unit_type) = &args.unit_type {
        query = query.with_unit_type(unit_type);
    }
    if let Some(source_lca_activity) = &args.source_lca_activity {
        query = query.with_source_lca_activity(source_lca_activity);
    }
    if let Some(calculation_method) = &args.calculation_method {
        query = query.with_calculation_method(calculation_method);
    }
    if let Some(access_type) = &args.access_type {
        query = query.with_access_type(access_type);
    }

    query
}

pub async fn run(args: &SearchArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = build_query(args);

    // Ctrl-C aborts the in-flight request instead of waiting on the timeout.
    let interrupted = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    let resp = client
        .search_until(&query, interrupted)
        .await
        .context("search failed")?;

    match format {
        OutputFormat::Table => {
            print_results_table(&resp.results);
            println!(
                "Page {} of {} ({} results)",
                resp.current_page, resp.last_page, resp.total_results
            );
        }
        OutputFormat::Json => print_json(&resp),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: SearchArgs,
    }

    fn parse(argv: &[&str]) -> SearchArgs {
        TestCli::parse_from(std::iter::once("climatiq").chain(argv.iter().copied())).args
    }

    #[test]
    fn build_query_from_flags() {
        let args = parse(&[
            "--data-version",
            "^5",
            "--category",
            "cloud computing - cpu",
            "--results-per-page",
            "1",
        ]);
        let encoded = build_query(&args).encode().unwrap();
        assert_eq!(
            encoded.as_str(),
            "category=cloud+computing+-+cpu&data_version=%5E5&page=1&results_per_page=1"
        );
    }

    #[test]
    fn build_query_repeats_quality_flags() {
        let args = parse(&[
            "--data-version",
            "^5",
            "--allow-quality-flag",
            "partial_factor",
            "--allow-quality-flag",
            "suspicious_homogeneity",
            "--year",
            "2021",
        ]);
        let query = build_query(&args);
        assert_eq!(
            query.allowed_data_quality_flags,
            vec!["partial_factor", "suspicious_homogeneity"]
        );
        assert_eq!(query.year, Some(2021));
    }

    #[test]
    fn build_query_keeps_out_of_range_page_size_for_the_library_to_reject() {
        let args = parse(&["--data-version", "^5", "--results-per-page", "500"]);
        assert!(build_query(&args).encode().is_err());
    }
}
