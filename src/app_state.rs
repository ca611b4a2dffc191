//! Shared application state injected into all Axum handlers.

use crate::config::EnquiryVariant;
use crate::persistence::store::EnquiryStore;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
///
/// Cloned per request; the store clones share one connection pool.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database-backed store for enquiry rows.
    pub store: EnquiryStore,
    /// Form variant this deployment accepts.
    pub variant: EnquiryVariant,
}

impl AppState {
    /// Builds the state handed to the router.
    #[must_use]
    pub const fn new(store: EnquiryStore, variant: EnquiryVariant) -> Self {
        Self { store, variant }
    }
}
