//! Mock Host for Testing
//!
//! Records capability queries and open requests, with switchable failures.

use anyhow::Result;
use async_trait::async_trait;
use dialkit::host::UrlOpener;
use std::sync::{Arc, Mutex};

/// Mock host that records every URL it is asked about
#[derive(Debug)]
pub struct MockHost {
    /// Behave like a browser (no capability query)
    pub web: bool,
    /// Answer for `can_open`
    pub can_open: Arc<Mutex<bool>>,
    /// Make `can_open` fail
    pub fail_query: Arc<Mutex<bool>>,
    /// Make `open` fail
    pub fail_open: Arc<Mutex<bool>>,
    /// URLs passed to `can_open`
    pub queried: Arc<Mutex<Vec<String>>>,
    /// URLs passed to `open`
    pub opened: Arc<Mutex<Vec<String>>>,
}

impl MockHost {
    pub fn native() -> Self {
        Self {
            web: false,
            can_open: Arc::new(Mutex::new(true)),
            fail_query: Arc::new(Mutex::new(false)),
            fail_open: Arc::new(Mutex::new(false)),
            queried: Arc::new(Mutex::new(Vec::new())),
            opened: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn web() -> Self {
        Self {
            web: true,
            ..Self::native()
        }
    }

    pub fn refusing() -> Self {
        let host = Self::native();
        *host.can_open.lock().unwrap() = false;
        host
    }

    pub fn get_queried(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }

    pub fn get_opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

#[async_trait]
impl UrlOpener for MockHost {
    fn supports_capability_query(&self) -> bool {
        !self.web
    }

    async fn can_open(&self, url: &str) -> Result<bool> {
        self.queried.lock().unwrap().push(url.to_string());
        if *self.fail_query.lock().unwrap() {
            return Err(anyhow::anyhow!("Mock capability query failure"));
        }
        Ok(*self.can_open.lock().unwrap())
    }

    async fn open(&self, url: &str) -> Result<()> {
        if *self.fail_open.lock().unwrap() {
            return Err(anyhow::anyhow!("Mock open failure"));
        }
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
