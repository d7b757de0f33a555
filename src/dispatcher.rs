//! Intent Dispatcher
//!
//! Validates the number, builds the target URL and asks the host to open
//! it. Every failure ends as a user alert; nothing propagates to the caller.

use crate::alert::AlertPresenter;
use crate::error::DispatchError;
use crate::host::UrlOpener;
use crate::i18n::Catalog;
use crate::intent::{Action, IntentTarget, PlatformFamily};
use crate::sanitize::sanitize;
use std::sync::Arc;
use tracing::debug;

/// Terminal state of one dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Browser host: the page was pointed at the URL, nothing was probed
    WebNavigated(IntentTarget),
    /// Native host accepted the URL
    Opened(IntentTarget),
    /// Stopped early; the user has been alerted
    Aborted(DispatchError),
}

impl DispatchOutcome {
    pub fn is_dispatched(&self) -> bool {
        !matches!(self, DispatchOutcome::Aborted(_))
    }

    pub fn error(&self) -> Option<&DispatchError> {
        match self {
            DispatchOutcome::Aborted(err) => Some(err),
            _ => None,
        }
    }
}

/// Build the intent for `action` without dispatching it.
///
/// `message` is only used for SMS.
pub fn build_target(
    action: Action,
    number: &str,
    message: &str,
    platform: PlatformFamily,
) -> Result<IntentTarget, DispatchError> {
    let number = sanitize(number);
    if number.is_empty() {
        return Err(DispatchError::EmptyNumber);
    }
    Ok(match action {
        Action::Call => IntentTarget::call(&number),
        Action::Sms => IntentTarget::sms(&number, message, platform),
    })
}

/// Turns user input into host intents
#[derive(Debug, Clone)]
pub struct Dispatcher {
    opener: Arc<dyn UrlOpener>,
    alerts: Arc<dyn AlertPresenter>,
    catalog: Catalog,
    platform: PlatformFamily,
}

impl Dispatcher {
    pub fn new(
        opener: Arc<dyn UrlOpener>,
        alerts: Arc<dyn AlertPresenter>,
        catalog: Catalog,
        platform: PlatformFamily,
    ) -> Self {
        Self {
            opener,
            alerts,
            catalog,
            platform,
        }
    }

    /// Ask the host to place a call to `number`
    pub async fn dispatch_call(&self, number: &str) -> DispatchOutcome {
        self.dispatch(Action::Call, number, "").await
    }

    /// Ask the host to compose an SMS to `number`, prefilled with `message`
    pub async fn dispatch_sms(&self, number: &str, message: &str) -> DispatchOutcome {
        self.dispatch(Action::Sms, number, message).await
    }

    async fn dispatch(&self, action: Action, number: &str, message: &str) -> DispatchOutcome {
        let result = match build_target(action, number, message, self.platform) {
            Ok(target) => self.open(target).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(outcome) => {
                debug!("{} dispatched via {}: {:?}", action, self.opener.name(), outcome);
                outcome
            }
            Err(err) => {
                debug!("{} aborted: {}", action, err);
                self.alert(&err);
                DispatchOutcome::Aborted(err)
            }
        }
    }

    async fn open(&self, target: IntentTarget) -> Result<DispatchOutcome, DispatchError> {
        let action = target.action();
        let url = target.url();
        let failure = |e: anyhow::Error| DispatchError::DispatchFailure(action, format!("{:#}", e));

        if !self.opener.supports_capability_query() {
            self.opener.open(url).await.map_err(failure)?;
            return Ok(DispatchOutcome::WebNavigated(target));
        }

        if !self.opener.can_open(url).await.map_err(failure)? {
            return Err(DispatchError::UnsupportedAction(action));
        }

        self.opener.open(url).await.map_err(failure)?;
        Ok(DispatchOutcome::Opened(target))
    }

    fn alert(&self, err: &DispatchError) {
        let (title, body) = err.alert_keys();
        self.alerts
            .present(&self.catalog.tr(title), &self.catalog.tr(body));
    }
}
