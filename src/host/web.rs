//! Browser host
//!
//! Assigns the target to the page location. Browsers expose no way to ask
//! whether a `tel:` or `sms:` handler exists, so nothing is probed.

use super::UrlOpener;
use crate::error::DialError;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
pub struct WebNavigator {
    location: RwLock<Option<String>>,
}

impl WebNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last location navigated to, if any
    pub fn location(&self) -> Option<String> {
        self.location
            .read()
            .map(|loc| loc.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

#[async_trait]
impl UrlOpener for WebNavigator {
    fn supports_capability_query(&self) -> bool {
        false
    }

    async fn can_open(&self, _url: &str) -> Result<bool> {
        Ok(true)
    }

    async fn open(&self, url: &str) -> Result<()> {
        debug!("Navigating page to {}", url);
        let mut location = self.location.write().map_err(DialError::from)?;
        *location = Some(url.to_string());
        Ok(())
    }

    fn name(&self) -> &str {
        "web"
    }
}
