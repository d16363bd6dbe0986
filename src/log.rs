//! Diagnostics for degenerate-input fallbacks.
//!
//! With the `tracing` feature these are the `tracing` macros. Without it
//! they expand to nothing, so the geometry routines carry no logging cost.
//! Either way they stay private to the crate.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, warn};

/// Discards its arguments; `tracing::debug!` with the `tracing` feature.
#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

/// Discards its arguments; `tracing::warn!` with the `tracing` feature.
#[cfg(not(feature = "tracing"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use debug;
#[cfg(not(feature = "tracing"))]
pub(crate) use log_warn as warn;
