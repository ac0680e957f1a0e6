//! Inert logger

use crate::fields::Fields;
use crate::severity::Severity;
use crate::traits::Logger;

/// A logger that discards every record
///
/// The trait-level inert variant: callers holding a
/// [`BoxedLogger`](crate::BoxedLogger) or [`SharedLogger`](crate::SharedLogger)
/// can substitute this to silence logging entirely, e.g. in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl NoopLogger {
    /// Create a new no-op logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoopLogger {
    fn log(&self, _severity: Severity, _fields: Fields) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields;

    #[test]
    fn test_noop_logger() {
        let logger = NoopLogger::new();

        // These should all do nothing without panicking
        logger.log(Severity::Info, fields! { "x" => 1 });
        logger.info(fields! {});
        logger.warning(fields! { "msg" => "ignored" });
        logger.error(fields! { "code" => 500 });
    }
}
