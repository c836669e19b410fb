//! Shared query infrastructure: the [`Query`] trait, [`Pagination`] fields, and [`EncodedQuery`].

use std::borrow::Cow;
use std::fmt;

use url::form_urlencoded;

use crate::errors::EncodingError;

/// Trait implemented by all query builders. Provides query string encoding
/// and shared builder methods for pagination.
pub trait Query {
    /// Validates the query and renders it as a canonical query string.
    fn encode(&self) -> Result<EncodedQuery, EncodingError>;

    /// Returns a mutable reference to the pagination fields.
    fn get_pagination(&mut self) -> &mut Pagination;

    /// Sets the page number (1-indexed). Zero leaves the parameter out.
    fn with_page(mut self, page: u32) -> Self
    where
        Self: Sized,
    {
        self.get_pagination().page = Some(page);
        self
    }

    /// Sets the number of results per page. The API accepts at most 100.
    fn with_results_per_page(mut self, results_per_page: u32) -> Self
    where
        Self: Sized,
    {
        self.get_pagination().results_per_page = Some(results_per_page);
        self
    }
}

/// Pagination fields. `None` (or zero) uses the API default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    pub page: Option<u32>,
    pub results_per_page: Option<u32>,
}

/// A validated, form-urlencoded query string with its parameters sorted by key.
///
/// Values use `application/x-www-form-urlencoded` escaping: spaces become `+`,
/// `*` stays literal and `~` becomes `%7E`. Servers decode either spelling to
/// the same value, but URLs from encoders that escape `*` and keep `~` differ
/// byte for byte on those two characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EncodedQuery(String);

impl EncodedQuery {
    /// Sorts the pairs by key and serializes them. The sort is stable, so
    /// repeated keys keep the order they were pushed in.
    pub(crate) fn from_pairs(mut pairs: Vec<(&'static str, Cow<'_, str>)>) -> Self {
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish();
        EncodedQuery(encoded)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for EncodedQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EncodedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
