//! Tracing utilities for relationship lifecycle observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level tracing event when a related type's hook is dispatched.
///
/// ```ignore
/// relatable_trace_hook!("populate", name);
/// ```
#[macro_export]
macro_rules! relatable_trace_hook {
    ($hook:literal, $name:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(hook = $hook, relationship = %$name, "relatable.hook");
    };
}

/// Emit a debug-level tracing event when a lazy relationship is loaded on read.
///
/// ```ignore
/// relatable_trace_load!(name);
/// ```
#[macro_export]
macro_rules! relatable_trace_load {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(relationship = %$name, "relatable.lazy_load");
    };
}
