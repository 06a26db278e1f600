//! Common traits and envelopes for Foreman resources

use serde::Deserialize;

/// Common trait for Foreman resources addressed by a numeric id
pub trait ForemanResource {
    /// Get the server-assigned id (0 before creation)
    fn id(&self) -> i64;

    /// Get the human-readable name
    fn name(&self) -> &str;
}

/// Search response envelope returned by Foreman index endpoints
///
/// Generic over the record type so results decode straight into typed values.
#[derive(Deserialize, Debug, Clone)]
pub struct QueryResponse<T> {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub subtotal: u64,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub per_page: Option<u64>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Default for QueryResponse<T> {
    fn default() -> Self {
        Self {
            total: None,
            subtotal: 0,
            page: None,
            per_page: None,
            search: None,
            results: Vec::new(),
        }
    }
}

impl<T> QueryResponse<T> {
    /// Consume self and return the result records
    pub fn into_results(self) -> Vec<T> {
        self.results
    }
}
