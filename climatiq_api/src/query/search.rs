use std::borrow::Cow;

use crate::errors::EncodingError;

use super::{
    common::{EncodedQuery, Pagination},
    Query,
};

/// Upper bound the API places on `results_per_page`.
pub const MAX_RESULTS_PER_PAGE: u32 = 100;

/// Parameters of an emission factor search.
///
/// `data_version` is required by the API; every other field is optional and
/// left out of the query string when unset or empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchQuery {
    pub data_version: String,
    pub query: Option<String>,
    pub activity_id: Option<String>,
    pub category: Option<String>,
    pub sector: Option<String>,
    pub source: Option<String>,
    pub source_dataset: Option<String>,
    pub year: Option<i32>,
    pub region: Option<String>,
    pub unit_type: Option<String>,
    pub source_lca_activity: Option<String>,
    pub calculation_method: Option<String>,
    pub allowed_data_quality_flags: Vec<String>,
    pub access_type: Option<String>,
    pub pagination: Pagination,
}

/// A field value as seen by the encoder.
#[derive(Debug, PartialEq)]
pub(crate) enum ParamValue<'a> {
    Text(Option<&'a str>),
    Number(Option<i64>),
    List(&'a [String]),
}

impl Query for SearchQuery {
    fn get_pagination(&mut self) -> &mut Pagination {
        &mut self.pagination
    }

    fn encode(&self) -> Result<EncodedQuery, EncodingError> {
        if self.data_version.is_empty() {
            return Err(EncodingError::MissingRequiredField {
                field: "data_version",
            });
        }
        if let Some(results_per_page) = self.pagination.results_per_page {
            if results_per_page > MAX_RESULTS_PER_PAGE {
                return Err(EncodingError::ValueOutOfRange {
                    field: "results_per_page",
                    value: results_per_page,
                    max: MAX_RESULTS_PER_PAGE,
                });
            }
        }

        let mut pairs: Vec<(&'static str, Cow<'_, str>)> = Vec::new();
        for (name, value) in self.params() {
            match value {
                ParamValue::Text(Some(text)) if !text.is_empty() => {
                    pairs.push((name, Cow::Borrowed(text)));
                }
                ParamValue::Number(Some(number)) if number != 0 => {
                    pairs.push((name, Cow::Owned(number.to_string())));
                }
                ParamValue::List(items) => {
                    pairs.extend(items.iter().map(|item| (name, Cow::Borrowed(item.as_str()))));
                }
                _ => {}
            }
        }
        Ok(EncodedQuery::from_pairs(pairs))
    }
}

impl SearchQuery {
    /// Starts a query against the given data version (e.g. `"^5"`).
    pub fn new(data_version: &str) -> Self {
        Self {
            data_version: data_version.to_string(),
            ..Default::default()
        }
    }

    /// Fixed mapping from each field to its external parameter name.
    pub(crate) fn params(&self) -> [(&'static str, ParamValue<'_>); 16] {
        [
            ("data_version", ParamValue::Text(Some(&self.data_version))),
            ("query", ParamValue::Text(self.query.as_deref())),
            ("activity_id", ParamValue::Text(self.activity_id.as_deref())),
            ("category", ParamValue::Text(self.category.as_deref())),
            ("sector", ParamValue::Text(self.sector.as_deref())),
            ("source", ParamValue::Text(self.source.as_deref())),
            ("source_dataset", ParamValue::Text(self.source_dataset.as_deref())),
            ("year", ParamValue::Number(self.year.map(i64::from))),
            ("region", ParamValue::Text(self.region.as_deref())),
            ("unit_type", ParamValue::Text(self.unit_type.as_deref())),
            (
                "source_lca_activity",
                ParamValue::Text(self.source_lca_activity.as_deref()),
            ),
            (
                "calculation_method",
                ParamValue::Text(self.calculation_method.as_deref()),
            ),
            (
                "allowed_data_quality_flags",
                ParamValue::List(&self.allowed_data_quality_flags),
            ),
            ("access_type", ParamValue::Text(self.access_type.as_deref())),
            (
                "page",
                ParamValue::Number(self.pagination.page.map(i64::from)),
            ),
            (
                "results_per_page",
                ParamValue::Number(self.pagination.results_per_page.map(i64::from)),
            ),
        ]
    }

    pub fn with_data_version(mut self, data_version: &str) -> Self {
        self.data_version = data_version.to_string();
        self
    }

    /// Free-text search over names and descriptions.
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = Some(query.to_string());
        self
    }

    pub fn with_activity_id(mut self, activity_id: &str) -> Self {
        self.activity_id = Some(activity_id.to_string());
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_sector(mut self, sector: &str) -> Self {
        self.sector = Some(sector.to_string());
        self
    }

    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }

    pub fn with_source_dataset(mut self, source_dataset: &str) -> Self {
        self.source_dataset = Some(source_dataset.to_string());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Region code, e.g. `"US"` or `"GB"`.
    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    pub fn with_unit_type(mut self, unit_type: &str) -> Self {
        self.unit_type = Some(unit_type.to_string());
        self
    }

    pub fn with_source_lca_activity(mut self, source_lca_activity: &str) -> Self {
        self.source_lca_activity = Some(source_lca_activity.to_string());
        self
    }

    pub fn with_calculation_method(mut self, calculation_method: &str) -> Self {
        self.calculation_method = Some(calculation_method.to_string());
        self
    }

    pub fn with_allowed_data_quality_flag(mut self, flag: &str) -> Self {
        self.allowed_data_quality_flags.push(flag.to_string());
        self
    }
    pub fn with_allowed_data_quality_flags(mut self, flags: &[String]) -> Self {
        self.allowed_data_quality_flags.extend_from_slice(flags);
        self
    }

    pub fn with_access_type(mut self, access_type: &str) -> Self {
        self.access_type = Some(access_type.to_string());
        self
    }
}
