//! Mock Alert Presenter for Testing
//!
//! Records every alert shown.

use dialkit::alert::AlertPresenter;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
pub struct MockAlerts {
    pub shown: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockAlerts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_shown(&self) -> Vec<(String, String)> {
        self.shown.lock().unwrap().clone()
    }
}

impl AlertPresenter for MockAlerts {
    fn present(&self, title: &str, body: &str) {
        self.shown
            .lock()
            .unwrap()
            .push((title.to_string(), body.to_string()));
    }

    fn name(&self) -> &str {
        "mock"
    }
}
