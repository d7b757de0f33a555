//! dialkit Library
//!
//! Turns a typed phone number and message into `tel:`/`sms:` intents and
//! hands them to the host environment.

pub mod alert;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod host;
pub mod i18n;
pub mod intent;
pub mod sanitize;
pub mod session;

pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use error::{DialError, DialResult, DispatchError};
pub use intent::{Action, IntentTarget, PlatformFamily};
pub use sanitize::sanitize;
pub use session::InputSession;
