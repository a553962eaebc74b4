//! Log output for hosts embedding the pharmacy domain.
//!
//! The domain crates only emit `tracing` events; a host calls [`init`] once at
//! startup to get JSON lines on stdout, filtered by `RUST_LOG` (default
//! [`DEFAULT_FILTER`](crate::tracing::DEFAULT_FILTER)).

/// Install the JSON subscriber. Repeated calls keep the first one.
pub fn init() {
    tracing::init();
}

/// Subscriber and filter construction.
pub mod tracing;
