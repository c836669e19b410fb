use climatiq_api::types::{SearchResponse, SearchResult};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_search_full() {
    let json = load_fixture("cloud_computing_cpu.json");
    let resp: SearchResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.results.len(), 1);
    assert_eq!(resp.current_page, 1);
    assert_eq!(resp.last_page, 3);
    assert_eq!(resp.total_results, 3);

    let result = &resp.results[0];
    assert_eq!(result.id, "8d2d5b11-4e6d-4bd5-ae08-3f5e1c8c8f1e");
    assert_eq!(result.activity_id, "cloud_computing-cpu-aws_af_south_1");
    assert_eq!(result.access_type, "public");
    assert_eq!(result.name, "AWS (af-south-1) CPU");
    assert_eq!(result.category, "Cloud Computing - CPU");
    assert_eq!(result.sector, "Information and Communication");
    assert_eq!(result.source, "CCF");
    assert_eq!(result.uncertainty, None);
    assert_eq!(result.year, 2021);
    assert_eq!(result.year_released, 2021);
    assert_eq!(result.region, "ZA");
    assert_eq!(result.region_name, "South Africa");
    assert_eq!(result.unit, "kg/CPU-hour");
    assert_eq!(result.source_lca_activity, "electricity_generation");
    assert_eq!(result.supported_calculation_methods, vec!["ar4", "ar5"]);
    assert_eq!(result.factor, Some(0.002196));
    assert_eq!(result.factor_calculation_origin, "climatiq");
}

#[test]
fn deserialize_null_factor_is_distinct_from_zero() {
    let json = load_fixture("electricity_withheld.json");
    let resp: SearchResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.results.len(), 2);

    let withheld = &resp.results[0];
    assert_eq!(withheld.factor, None);
    assert_eq!(withheld.uncertainty, Some(12.5));
    assert_eq!(withheld.access_type, "premium");

    let zero = &resp.results[1];
    assert_eq!(zero.factor, Some(0.0));
}

#[test]
fn deserialize_missing_keys_default() {
    let json = load_fixture("electricity_withheld.json");
    let resp: SearchResponse = serde_json::from_str(&json).unwrap();

    let sparse = &resp.results[1];
    assert_eq!(sparse.name, "Electricity supplied from grid - supplier mix");
    assert_eq!(sparse.source, "");
    assert_eq!(sparse.uncertainty, None);
    assert_eq!(sparse.year_released, 0);
    assert!(sparse.supported_calculation_methods.is_empty());
}

#[test]
fn deserialize_null_fields_default() {
    let json = load_fixture("null_fields.json");
    let resp: SearchResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.results.len(), 1);

    let result = &resp.results[0];
    assert_eq!(result.name, "Diesel - stationary combustion");
    assert_eq!(result.source_link, "");
    assert_eq!(result.year, 2022);
    assert_eq!(result.year_released, 0);
    assert_eq!(result.region_name, "");
    assert_eq!(result.description, "");
    assert_eq!(result.source_lca_activity, "");
    assert!(result.supported_calculation_methods.is_empty());
    assert_eq!(result.factor_calculation_origin, "");
    assert_eq!(result.factor, Some(2.68));
    assert_eq!(result.uncertainty, None);
}

#[test]
fn deserialize_single_null_key_keeps_the_page() {
    let json = r#"{"results": [{"id": "x", "year_released": null}], "current_page": 1, "last_page": 1, "total_results": 1}"#;
    let resp: SearchResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.results[0].id, "x");
    assert_eq!(resp.results[0].year_released, 0);

    let json = r#"{"results": [{"id": "x", "description": null}], "current_page": 1, "last_page": 1, "total_results": 1}"#;
    let resp: SearchResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.results[0].description, "");
}

#[test]
fn deserialize_empty_page() {
    let json = load_fixture("empty_page.json");
    let resp: SearchResponse = serde_json::from_str(&json).unwrap();
    assert!(resp.results.is_empty());
    assert_eq!(resp.total_results, 0);
    assert_eq!(resp.next_page(), None);
}

#[test]
fn deserialize_pagination_meta() {
    let json = load_fixture("electricity_withheld.json");
    let resp: SearchResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.current_page, 2);
    assert_eq!(resp.last_page, 2);
    assert_eq!(resp.total_results, 42);
    assert!(!resp.has_next_page());
}

#[test]
fn serialize_result_keeps_api_field_names() {
    let result = SearchResult {
        activity_id: "fuel-type_diesel".to_string(),
        factor: Some(2.68),
        ..Default::default()
    };
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["activity_id"], "fuel-type_diesel");
    assert_eq!(value["factor"], 2.68);
    assert!(value["uncertainty"].is_null());
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let bad_json = r#"{"results": not valid json}"#;
    let result = serde_json::from_str::<SearchResponse>(bad_json);
    assert!(result.is_err());
}

#[test]
fn deserialize_type_mismatch_returns_error() {
    let json = r#"{"results": [{"factor": "high"}], "current_page": 1, "last_page": 1, "total_results": 1}"#;
    let result = serde_json::from_str::<SearchResponse>(json);
    assert!(result.is_err());
}

#[test]
fn deserialize_missing_pagination_returns_error() {
    let json = r#"{"results": []}"#;
    let result = serde_json::from_str::<SearchResponse>(json);
    assert!(result.is_err());
}
