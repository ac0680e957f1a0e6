//! KvLog Core
//!
//! Minimal leveled key-value logging. Each record is a string-keyed field
//! map, encoded with `serde_json` and written as one level-tagged line to
//! a pluggable sink:
//!
//! ```text
//! {"error": {"code":500,"msg":"boom"}}
//! ```
//!
//! Records below the configured threshold, and every record on an inert
//! logger, are discarded. Logging is fire-and-forget: encode and I/O
//! failures are swallowed, and no call ever surfaces an error.
//!
//! ```
//! use kvlog_core::{fields, JsonLogger, Logger, Severity};
//!
//! let logger = JsonLogger::new(Severity::Info);
//! logger.error(fields! { "code" => 500, "msg" => "boom" });
//! ```

pub mod fields;
pub mod global;
pub mod json;
pub mod noop;
pub mod severity;
pub mod sink;
pub mod traits;

// Re-export commonly used types
pub use fields::Fields;
pub use global::{install, logger, InstallError};
pub use json::{JsonLogger, LEVEL_ENV};
pub use noop::NoopLogger;
pub use severity::{ParseSeverityError, Severity};
pub use sink::Sink;
pub use traits::{BoxedLogger, Logger, SharedLogger};

// Pulled in by the `fields!` expansion; not public API.
#[doc(hidden)]
pub use serde_json::json as __json;
