mod meta;
pub use self::meta::SearchResponse;

mod search;
pub use self::search::SearchResult;
