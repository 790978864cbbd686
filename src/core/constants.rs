//! Constants for the page info endpoint
//!
//! Header names and default paths shared by the client and configuration.

/// Default path of the page info function, relative to the site origin
pub const PAGE_INFO_PATH: &str = "/.netlify/functions/pageInfo";

/// Request header constants
pub mod header {
    /// Project identifier, sent as-is
    pub const PROJECT: &str = "project";

    /// Page title, percent-encoded
    pub const TITLE: &str = "title";
}

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";
