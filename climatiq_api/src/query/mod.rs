mod common;
pub use self::common::{EncodedQuery, Pagination, Query};

mod search;
pub use self::search::{SearchQuery, MAX_RESULTS_PER_PAGE};
