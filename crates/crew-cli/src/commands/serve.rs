use std::path::Path;

use anyhow::{Context, Result};
use crew_server::{MissionServer, ServerConfig};

/// Resolves server configuration, applying a `--bind` override.
pub fn load_config(path: Option<&Path>, bind: Option<String>) -> Result<ServerConfig> {
    let mut config =
        ServerConfig::resolve(path).context("Failed to load server configuration")?;
    if let Some(bind) = bind {
        config.server.bind = bind;
    }
    Ok(config)
}

pub async fn run(config: ServerConfig) -> Result<()> {
    let server = MissionServer::bind(config.server, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("[Serve] Failed to listen for Ctrl-C: {}", e);
        }
    })
    .await?;
    println!("🚀 CREW listening on http://{}", server.local_addr());

    server.run().await;
    Ok(())
}
