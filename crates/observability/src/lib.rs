//! Tracing and logging (shared setup).

pub use crate::tracing::{LOG_FORMAT_VAR, LogFormat};

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    crate::tracing::init(LogFormat::from_env());
}

/// Subscriber construction (filter, output format).
pub mod tracing;
