//! Async client for the Climatiq emission factor search API.

mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use self::errors::{EncodingError, Error, TransportError};
pub use self::query::{EncodedQuery, Pagination, Query, SearchQuery, MAX_RESULTS_PER_PAGE};
