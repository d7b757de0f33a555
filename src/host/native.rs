//! Native desktop host
//!
//! Uses the freedesktop intent layer: `xdg-mime` to look up a scheme
//! handler and `xdg-open` to hand the URL over.

use super::UrlOpener;
use crate::error::DialError;
use anyhow::Result;
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct NativeOpener {
    open_command: String,
    query_command: String,
}

impl NativeOpener {
    pub fn new(open_command: &str, query_command: &str) -> Self {
        Self {
            open_command: open_command.to_string(),
            query_command: query_command.to_string(),
        }
    }
}

/// Scheme of a URL, e.g. `tel` for `tel:555`
fn scheme_of(url: &str) -> Option<&str> {
    let (scheme, _) = url.split_once(':')?;
    if scheme.is_empty() {
        None
    } else {
        Some(scheme)
    }
}

#[async_trait]
impl UrlOpener for NativeOpener {
    async fn can_open(&self, url: &str) -> Result<bool> {
        let Some(scheme) = scheme_of(url) else {
            return Ok(false);
        };
        let mime = format!("x-scheme-handler/{}", scheme);
        debug!("Querying handler: {} query default {}", self.query_command, mime);

        let output = Command::new(&self.query_command)
            .args(["query", "default", mime.as_str()])
            .output()
            .await
            .map_err(|e| DialError::Host(format!("{}: {}", self.query_command, e)))?;

        if !output.status.success() {
            return Ok(false);
        }
        let handler = String::from_utf8_lossy(&output.stdout);
        debug!("Handler for {}: '{}'", mime, handler.trim());
        Ok(!handler.trim().is_empty())
    }

    async fn open(&self, url: &str) -> Result<()> {
        debug!("Opening: {} {}", self.open_command, url);

        let status = Command::new(&self.open_command)
            .arg(url)
            .status()
            .await
            .map_err(|e| DialError::Host(format!("{}: {}", self.open_command, e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(DialError::Host(format!("{} exited with {}", self.open_command, status)).into())
        }
    }

    fn name(&self) -> &str {
        "native"
    }
}
