//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on the domain port and remain testable without I/O. The repository handle
//! is constructed once at startup and passed in; nothing here is global.

use std::sync::Arc;

use crate::domain::ports::ContactRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub contacts: Arc<dyn ContactRepository>,
}

impl HttpState {
    /// Bundle the repository handle for injection into the app.
    pub fn new(contacts: Arc<dyn ContactRepository>) -> Self {
        Self { contacts }
    }
}
