use std::env;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub assets: AssetsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Location of the static frontend served on the fallback route.
#[derive(Debug, Clone)]
pub struct AssetsConfig {
    pub dir: String,
}

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_ASSETS_DIR: &str = "public";

impl AppConfig {
    pub fn new() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };
        let dir = env::var("ASSETS_DIR").unwrap_or_else(|_| DEFAULT_ASSETS_DIR.to_string());

        Ok(Self {
            server: ServerConfig { port },
            assets: AssetsConfig { dir },
        })
    }
}
