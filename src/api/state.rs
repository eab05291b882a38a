//! Application state for the rollover engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::FixedOffset;

use crate::store::DocumentStore;

/// Shared application state.
///
/// Contains the document store handle and the civil timezone offset used to
/// derive periods when a trigger carries no explicit `as_of`. The store is
/// initialized once per process and reused across invocations.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn DocumentStore>,
    timezone: FixedOffset,
}

impl AppState {
    /// Creates a new application state around a store and a civil offset.
    pub fn new(store: Arc<dyn DocumentStore>, timezone: FixedOffset) -> Self {
        Self { store, timezone }
    }

    /// Returns the document store.
    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }

    /// Returns the civil timezone offset for period derivation.
    pub fn timezone(&self) -> FixedOffset {
        self.timezone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
