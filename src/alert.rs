//! Alert Presenters
//!
//! Fire-and-forget notifications shown to the user after a dispatch.

use std::io;
use std::process::{Command, ExitStatus};
use std::sync::Arc;
use std::thread;
use tracing::{debug, warn};

/// Trait for alert presenters
pub trait AlertPresenter: Send + Sync + std::fmt::Debug {
    /// Show an alert. Nothing is returned; presentation problems are logged.
    fn present(&self, title: &str, body: &str);

    /// Get the presenter name
    fn name(&self) -> &str;
}

/// Writes alerts to stderr
#[derive(Debug, Default)]
pub struct ConsoleAlerts;

impl ConsoleAlerts {
    pub fn new() -> Self {
        Self
    }
}

impl AlertPresenter for ConsoleAlerts {
    fn present(&self, title: &str, body: &str) {
        eprintln!("{}: {}", title, body);
    }

    fn name(&self) -> &str {
        "console"
    }
}

/// Desktop notifications via `notify-send`, falling back to stderr
#[derive(Debug)]
pub struct NotifyAlerts {
    command: String,
}

impl Default for NotifyAlerts {
    fn default() -> Self {
        Self::new("notify-send")
    }
}

impl NotifyAlerts {
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
        }
    }
}

impl NotifyAlerts {
    /// Spawn the notifier and reap it on a background thread
    fn spawn(&self, title: &str, body: &str) -> io::Result<thread::JoinHandle<Option<ExitStatus>>> {
        let mut child = Command::new(&self.command).arg(title).arg(body).spawn()?;
        let command = self.command.clone();
        Ok(thread::spawn(move || match child.wait() {
            Ok(status) => {
                debug!("{} exited with {}", command, status);
                Some(status)
            }
            Err(e) => {
                warn!("⚠️ Could not wait for {}: {}", command, e);
                None
            }
        }))
    }
}

impl AlertPresenter for NotifyAlerts {
    fn present(&self, title: &str, body: &str) {
        debug!("Notifying: {} - {}", title, body);
        if let Err(e) = self.spawn(title, body) {
            warn!("⚠️ {} unavailable ({}), printing alert instead", self.command, e);
            ConsoleAlerts.present(title, body);
        }
    }

    fn name(&self) -> &str {
        "notify"
    }
}

/// Factory for the configured presenter; unknown names fall back to console
pub fn create_presenter(kind: &str) -> Arc<dyn AlertPresenter> {
    match kind.to_lowercase().as_str() {
        "notify" | "desktop" => Arc::new(NotifyAlerts::default()),
        "console" => Arc::new(ConsoleAlerts::new()),
        other => {
            warn!("  - Unknown alert presenter '{}', falling back to console", other);
            Arc::new(ConsoleAlerts::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_names() {
        assert_eq!(create_presenter("notify").name(), "notify");
        assert_eq!(create_presenter("Console").name(), "console");
        assert_eq!(create_presenter("smoke-signals").name(), "console");
    }

    #[cfg(unix)]
    #[test]
    fn test_notifier_child_is_reaped() {
        let alerts = NotifyAlerts::new("true");
        let reaper = alerts.spawn("Error", "body").expect("Failed to spawn");
        let status = reaper.join().expect("reaper thread panicked");
        assert!(status.is_some_and(|s| s.success()));
    }

    #[test]
    fn test_missing_notifier_does_not_panic() {
        let alerts = NotifyAlerts::new("/nonexistent/dialkit-notify");
        alerts.present("Error", "still shown on stderr");
    }
}
