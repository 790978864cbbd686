//! Data models
//!
//! This module contains the records returned by the page info client.

pub mod page_info;
