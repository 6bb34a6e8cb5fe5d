//! Role Registry Dump
//!
//! Loads the configured role registry and prints it as JSON.

use anyhow::{Context, Result};
use tracing::info;

use rbac_access::{config, RoleRegistry};

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rbac_access=info".into()),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    dotenvy::dotenv().ok();
    let config = config::Config::from_env()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        roles_file = ?config.roles_file,
        builtin_roles = config.builtin_roles,
        "Loading role registry"
    );

    let registry = RoleRegistry::from_config(&config).context("Failed to build role registry")?;
    let json = serde_json::to_string_pretty(&registry)?;
    println!("{json}");

    Ok(())
}
