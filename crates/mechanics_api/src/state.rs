use mechanics_core::MemoryStore;
use std::sync::Arc;

/// Shared handler state; cloned per request.
#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<MemoryStore>,
}

impl AppState {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}
