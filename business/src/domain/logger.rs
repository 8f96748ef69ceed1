/// Logging port used by every use case.
///
/// Messages are plain text; adapters decide on formatting and sinks.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}

/// Logger that discards everything. Handy for wiring tests and tools.
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}
