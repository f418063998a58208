#![allow(dead_code)]

use std::sync::Arc;

use shortlink::application::services::LinkService;
use shortlink::infrastructure::memory::MemoryLinkRepository;
use shortlink::state::AppState;

pub const TEST_BASE_URL: &str = "http://localhost:5000";

/// Builds application state over a freshly seeded in-memory store, exactly
/// as server startup does. The repository handle is returned alongside so
/// tests can inspect the store directly.
pub fn create_test_state() -> (AppState, Arc<MemoryLinkRepository>) {
    let repository = Arc::new(MemoryLinkRepository::with_example_entry());
    let link_service = Arc::new(LinkService::new(repository.clone()));

    let state = AppState::new(link_service, TEST_BASE_URL.to_string());

    (state, repository)
}
