//! Process-global logger

use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::noop::NoopLogger;
use crate::traits::{Logger, SharedLogger};

static GLOBAL: OnceCell<SharedLogger> = OnceCell::new();
static FALLBACK: NoopLogger = NoopLogger;

/// Error returned when a global logger is already installed
#[derive(Debug, Clone, Error)]
#[error("a global logger is already installed")]
pub struct InstallError(());

/// Install the process-wide logger.
///
/// The first call wins and the logger is held for the rest of the
/// process; later calls fail and leave the installed logger untouched.
pub fn install(logger: SharedLogger) -> Result<(), InstallError> {
    GLOBAL.set(logger).map_err(|_| InstallError(()))
}

/// The installed logger, or an inert fallback if none was installed.
pub fn logger() -> &'static dyn Logger {
    match GLOBAL.get() {
        Some(logger) => &**logger,
        None => &FALLBACK,
    }
}
