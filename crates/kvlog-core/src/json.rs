//! JSON line logger

use std::env;
use std::io;

use crate::fields::Fields;
use crate::severity::Severity;
use crate::sink::Sink;
use crate::traits::Logger;

/// Environment variable read by [`JsonLogger::from_env`]
pub const LEVEL_ENV: &str = "KVLOG_LEVEL";

/// Logger encoding each record as one level-tagged JSON line
///
/// Holds a minimum severity and an optional sink; a logger without a sink
/// discards every record. Both are fixed at construction.
///
/// The output shape is `{"<level>": <fields-as-json>}`, e.g.
/// `{"error": {"code":500,"msg":"boom"}}`. The closing brace is appended
/// after whatever the encoder produced, so a failed encode yields a line
/// that is not valid JSON. Treat the output as best-effort structured
/// text, not a strict JSON contract.
pub struct JsonLogger {
    sink: Option<Box<dyn Sink>>,
    threshold: Severity,
}

impl JsonLogger {
    /// Active logger writing to standard error at the given threshold.
    pub fn new(threshold: Severity) -> Self {
        Self::with_sink(io::stderr(), threshold)
    }

    /// Active logger writing to a caller-chosen sink.
    pub fn with_sink(sink: impl Sink + 'static, threshold: Severity) -> Self {
        JsonLogger {
            sink: Some(Box::new(sink)),
            threshold,
        }
    }

    /// Inert logger: no sink, every call is a guaranteed no-op.
    pub fn inert() -> Self {
        JsonLogger {
            sink: None,
            threshold: Severity::Info,
        }
    }

    /// Logger configured from the `KVLOG_LEVEL` environment variable.
    ///
    /// `info`, `warning` and `error` select a stderr logger at that
    /// threshold; `off` and `none` select the inert logger. Unset or
    /// unrecognized values fall back to `info`.
    pub fn from_env() -> Self {
        Self::from_level_str(env::var(LEVEL_ENV).ok().as_deref())
    }

    fn from_level_str(value: Option<&str>) -> Self {
        let value = match value.map(str::trim) {
            Some(value) => value,
            None => return Self::new(Severity::Info),
        };
        if value.eq_ignore_ascii_case("off") || value.eq_ignore_ascii_case("none") {
            return Self::inert();
        }
        Self::new(value.parse().unwrap_or(Severity::Info))
    }
}

impl Logger for JsonLogger {
    fn log(&self, severity: Severity, fields: Fields) {
        let sink = match &self.sink {
            Some(sink) => sink,
            None => return,
        };
        if severity < self.threshold {
            return;
        }

        // Best effort: a failed encode leaves the body empty rather than
        // surfacing an error.
        let body = serde_json::to_string(&fields).unwrap_or_default();

        let mut line = String::with_capacity(body.len() + 16);
        line.push_str("{\"");
        line.push_str(severity.as_str());
        line.push_str("\": ");
        line.push_str(&body);
        line.push('}');

        let _ = sink.write_line(&line);
    }
}
