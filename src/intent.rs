//! Intent targets
//!
//! Builds the `tel:` and `sms:` URLs handed to the host.

use crate::error::DialError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the user asked the host to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Call,
    Sms,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Call => write!(f, "call"),
            Action::Sms => write!(f, "sms"),
        }
    }
}

/// Host platform family, which decides how the SMS body is attached.
///
/// iOS's `sms:` parser wants `&body=`; everything else takes `?body=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformFamily {
    #[default]
    Default,
    Ios,
}

impl PlatformFamily {
    /// Family of the platform this binary was built for
    pub fn current() -> Self {
        if cfg!(target_os = "ios") {
            PlatformFamily::Ios
        } else {
            PlatformFamily::Default
        }
    }

    fn body_separator(self) -> char {
        match self {
            PlatformFamily::Ios => '&',
            PlatformFamily::Default => '?',
        }
    }
}

impl FromStr for PlatformFamily {
    type Err = DialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" | "android" | "web" => Ok(PlatformFamily::Default),
            "ios" => Ok(PlatformFamily::Ios),
            other => Err(DialError::UnknownPlatform(other.to_string())),
        }
    }
}

/// A constructed intent, ready to be opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentTarget {
    Call(String),
    Sms(String),
}

impl IntentTarget {
    /// `tel:<number>`
    pub fn call(number: &str) -> Self {
        IntentTarget::Call(format!("tel:{}", number))
    }

    /// `sms:<number>` with an optional body parameter.
    ///
    /// The message is trimmed first; a blank message adds no parameter.
    pub fn sms(number: &str, message: &str, platform: PlatformFamily) -> Self {
        let trimmed = message.trim();
        let url = if trimmed.is_empty() {
            format!("sms:{}", number)
        } else {
            format!(
                "sms:{}{}body={}",
                number,
                platform.body_separator(),
                encode_component(trimmed)
            )
        };
        IntentTarget::Sms(url)
    }

    pub fn action(&self) -> Action {
        match self {
            IntentTarget::Call(_) => Action::Call,
            IntentTarget::Sms(_) => Action::Sms,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            IntentTarget::Call(url) | IntentTarget::Sms(url) => url,
        }
    }
}

/// Percent-encode a URL component the way browsers' `encodeURIComponent` does.
///
/// `urlencoding` leaves only `A-Za-z0-9-_.~` alone; the marks `!'()*` are
/// unreserved here as well, so they are put back after encoding.
pub fn encode_component(text: &str) -> String {
    const MARKS: [(&str, &str); 5] = [
        ("%21", "!"),
        ("%27", "'"),
        ("%28", "("),
        ("%29", ")"),
        ("%2A", "*"),
    ];

    let mut encoded = urlencoding::encode(text).into_owned();
    for (escaped, mark) in MARKS {
        encoded = encoded.replace(escaped, mark);
    }
    encoded
}
