//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::memory::MemoryLinkRepository;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<MemoryLinkRepository>>,
    pub base_url: String,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService<MemoryLinkRepository>>, base_url: String) -> Self {
        Self {
            link_service,
            base_url,
        }
    }
}
