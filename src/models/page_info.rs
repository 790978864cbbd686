//! Page info record
//!
//! The endpoint's payload is kept as an opaque JSON value; only the request
//! parameters around it are typed.

use serde::{Deserialize, Serialize};

/// Result of a page info lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInfoRecord {
    /// Project identifier as requested
    pub project: String,
    /// Page title as requested, before encoding
    pub title: String,
    /// Payload returned by the endpoint, unmodified
    pub info: serde_json::Value,
}
