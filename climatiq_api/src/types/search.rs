//! Emission factor records returned by the `/search` endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// A single emission factor matched by a search.
///
/// Keys missing from the payload, or present as `null`, decode to their empty
/// value. The two numeric measurements stay `None` on `null` rather than
/// collapsing to zero.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SearchResult {
    /// Unique identifier of this factor.
    #[serde(deserialize_with = "null_default")]
    pub id: String,

    /// Activity the factor applies to, e.g. `cloud_computing-cpu-aws_af_south_1`.
    #[serde(deserialize_with = "null_default")]
    pub activity_id: String,

    /// `public`, `premium` or `private`.
    #[serde(deserialize_with = "null_default")]
    pub access_type: String,

    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub category: String,
    #[serde(deserialize_with = "null_default")]
    pub sector: String,

    /// Publisher of the underlying data.
    #[serde(deserialize_with = "null_default")]
    pub source: String,
    #[serde(deserialize_with = "null_default")]
    pub source_link: String,

    /// Uncertainty as a percentage, when the source publishes one.
    pub uncertainty: Option<f64>,

    /// Year the factor is valid for.
    #[serde(deserialize_with = "null_default")]
    pub year: i32,
    #[serde(deserialize_with = "null_default")]
    pub year_released: i32,

    /// Region code, e.g. `ZA`.
    #[serde(deserialize_with = "null_default")]
    pub region: String,
    #[serde(deserialize_with = "null_default")]
    pub region_name: String,

    #[serde(deserialize_with = "null_default")]
    pub description: String,

    /// Unit the factor is expressed in, e.g. `kg/CPU-hour`.
    #[serde(deserialize_with = "null_default")]
    pub unit: String,

    #[serde(deserialize_with = "null_default")]
    pub source_lca_activity: String,
    #[serde(deserialize_with = "null_default")]
    pub supported_calculation_methods: Vec<String>,

    /// CO2e per unit of activity. `None` when the API withholds the value.
    pub factor: Option<f64>,

    /// `climatiq` when derived by Climatiq, `source` when published as-is.
    #[serde(deserialize_with = "null_default")]
    pub factor_calculation_origin: String,
}

/// Treats an explicit `null` like a missing key.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
