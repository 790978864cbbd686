//! Core application modules
//!
//! This module contains configuration, constants, logging, the project
//! catalog and the page info client.

pub mod client;
pub mod config;
pub mod constants;
pub mod logging;
pub mod project;
