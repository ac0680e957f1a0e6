//! Logger capability trait

use std::sync::Arc;

use crate::fields::Fields;
use crate::severity::Severity;

/// Capability interface: anything accepting a severity and a field map
///
/// Implementations:
/// - [`JsonLogger`](crate::JsonLogger): encodes each record as a JSON line
/// - [`NoopLogger`](crate::NoopLogger): discards everything
///
/// Logging is fire-and-forget; no method returns a value or surfaces an
/// error to the caller.
pub trait Logger: Send + Sync {
    /// Emit one record at the given severity.
    fn log(&self, severity: Severity, fields: Fields);

    /// Emit an informational record.
    fn info(&self, fields: Fields) {
        self.log(Severity::Info, fields);
    }

    /// Emit a warning record.
    fn warning(&self, fields: Fields) {
        self.log(Severity::Warning, fields);
    }

    /// Emit an error record.
    fn error(&self, fields: Fields) {
        self.log(Severity::Error, fields);
    }
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Logger>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Convenience macros for logging
#[macro_export]
macro_rules! log_info {
    ($logger:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $logger.info($crate::fields! { $($key => $value),* })
    };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $logger.warning($crate::fields! { $($key => $value),* })
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $logger.error($crate::fields! { $($key => $value),* })
    };
}
