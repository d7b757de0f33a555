pub mod mock_alerts;
pub mod mock_host;

use std::sync::Arc;

use dialkit::i18n::Catalog;
use dialkit::{Dispatcher, PlatformFamily};
use mock_alerts::MockAlerts;
use mock_host::MockHost;

pub struct TestContext {
    pub host: Arc<MockHost>,
    pub alerts: Arc<MockAlerts>,
    pub dispatcher: Dispatcher,
}

impl TestContext {
    pub fn new(host: MockHost, platform: PlatformFamily) -> Self {
        let host = Arc::new(host);
        let alerts = Arc::new(MockAlerts::new());
        let dispatcher = Dispatcher::new(
            host.clone(),
            alerts.clone(),
            Catalog::builtin("es"),
            platform,
        );
        Self {
            host,
            alerts,
            dispatcher,
        }
    }

    /// Native host that accepts everything, default platform family
    pub fn native() -> Self {
        Self::new(MockHost::native(), PlatformFamily::Default)
    }
}
