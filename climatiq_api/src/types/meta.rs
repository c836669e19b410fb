use serde::{Deserialize, Serialize};

use super::SearchResult;

/// One page of search results plus its position in the full result set.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub current_page: i64,
    pub last_page: i64,
    pub total_results: i64,
}

impl SearchResponse {
    pub fn has_next_page(&self) -> bool {
        self.current_page < self.last_page
    }

    /// Page number to request next, if there is one.
    pub fn next_page(&self) -> Option<i64> {
        if self.has_next_page() {
            self.current_page.checked_add(1)
        } else {
            None
        }
    }
}
