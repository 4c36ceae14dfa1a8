//! Request, response and aggregate types for the search endpoints.

pub mod frequency;
pub mod search;

pub use frequency::FrequencyTable;
pub use search::{ErrorResponse, SearchRequest, SearchResponse};
