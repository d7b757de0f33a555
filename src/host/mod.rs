//! Host Openers
//!
//! The host environment decides whether and how a `tel:`/`sms:` URL is
//! opened. Each host implements [`UrlOpener`]; one is picked at startup.

use crate::config::Config;
use crate::error::DialError;
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

pub mod native;
pub mod web;

/// Kind of host environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostKind {
    #[default]
    Native,
    Web,
}

impl FromStr for HostKind {
    type Err = DialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "native" => Ok(HostKind::Native),
            "web" | "browser" => Ok(HostKind::Web),
            other => Err(DialError::UnknownHost(other.to_string())),
        }
    }
}

/// Trait for host URL openers
#[async_trait]
pub trait UrlOpener: Send + Sync + std::fmt::Debug {
    /// Whether the host can answer [`UrlOpener::can_open`].
    ///
    /// Browser hosts cannot; their URLs are navigated to blindly.
    fn supports_capability_query(&self) -> bool {
        true
    }

    /// Ask the host if it has a handler for this URL
    async fn can_open(&self, url: &str) -> Result<bool>;

    /// Ask the host to open the URL
    async fn open(&self, url: &str) -> Result<()>;

    /// Get the host name
    fn name(&self) -> &str;
}

/// Factory to create the configured host opener
pub fn create_opener(config: &Config) -> Arc<dyn UrlOpener> {
    let opener: Arc<dyn UrlOpener> = match config.host {
        HostKind::Native => {
            info!(
                "  - Using native intents ({} / {})",
                config.open_command, config.query_command
            );
            Arc::new(native::NativeOpener::new(
                &config.open_command,
                &config.query_command,
            ))
        }
        HostKind::Web => {
            info!("  - Using web navigation");
            Arc::new(web::WebNavigator::new())
        }
    };
    info!("✅ Host '{}' initialized", opener.name());
    opener
}
