use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` adapter that forwards business-layer messages to `tracing`.
///
/// Every event carries the `Catalog -- ` target plus a `component` field so
/// the catalog and quote flows can be told apart in the output.
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }

    pub fn component(&self) -> &'static str {
        self.component
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("catalog")
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Catalog -- ", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Catalog -- ", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Catalog -- ", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Catalog -- ", component = self.component, "{}", message);
    }
}
