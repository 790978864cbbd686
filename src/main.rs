//! Page info client
//!
//! Command-line front end for the wiki page info function: lists the known
//! projects and fetches metadata about a page within a project.

mod core;
mod models;

use crate::core::client::PageInfoClient;
use crate::core::config::Config;
use crate::core::logging::init_logging;
use crate::core::project::{Project, get_projects};
use anyhow::{Context, Result};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None | Some("--help") | Some("-h") | Some("help") => print_help(),
        Some("projects") => {
            for project in get_projects() {
                println!("{}", project);
            }
        }
        Some("fetch") => {
            let (Some(project), Some(title)) = (args.get(1), args.get(2)) else {
                eprintln!("Usage: page-info fetch <project> <title>");
                std::process::exit(2);
            };
            if let Err(e) = fetch(project, title).await {
                error!("{:#}", e);
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            print_help();
            std::process::exit(2);
        }
    }
}

/// Fetch page info and print it as JSON on stdout
async fn fetch(project: &str, title: &str) -> Result<()> {
    let config = Config::from_env()?;

    init_logging(&config.log_level);

    if Project::from_str(project).is_none() {
        warn!(
            "Project '{}' is not one of the known projects ({}); sending it anyway",
            project,
            get_projects().join(", ")
        );
    }

    let client = PageInfoClient::from_config(&config)?;
    info!("Fetching '{}' from project '{}' via {}", title, project, client.endpoint());

    let record = client.fetch_page_info(project, title).await?;

    let output =
        serde_json::to_string_pretty(&record).context("Failed to serialize page info")?;
    println!("{}", output);
    Ok(())
}

/// Print help message
fn print_help() {
    println!("Page info client v0.1.0");
    println!();
    println!("Usage: page-info <COMMAND>");
    println!();
    println!("Commands:");
    println!("  projects                 List the known project identifiers");
    println!("  fetch <project> <title>  Fetch metadata for a page and print it as JSON");
    println!("  --help                   Display this help message");
    println!();
    println!("Environment variables:");
    println!("  CONFIG_PATH - Path to the TOML configuration (default: config.toml)");
    println!("  RUST_LOG    - Overrides the configured log level");
    println!();
    println!("Configuration (config.toml):");
    println!("  [endpoint]");
    println!("  base_url        - Site origin, e.g. https://example.netlify.app (required)");
    println!("  path            - Function path (default: /.netlify/functions/pageInfo)");
    println!("  request_timeout - Timeout in seconds (default: none)");
    println!("  [logging]");
    println!("  level           - debug, info, warn, error (default: info)");
}
