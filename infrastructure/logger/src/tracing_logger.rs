use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` adapter emitting `tracing` events tagged with the component
/// that produced them.
pub struct TracingLogger {
    scope: &'static str,
}

impl TracingLogger {
    pub fn scoped(scope: &'static str) -> Self {
        Self { scope }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::scoped("storefront")
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "storefront", scope = self.scope, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "storefront", scope = self.scope, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "storefront", scope = self.scope, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "storefront", scope = self.scope, "{}", message);
    }
}
