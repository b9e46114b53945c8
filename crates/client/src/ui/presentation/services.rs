//! Service providers for the presentation layer
//!
//! This module provides Dioxus context providers for application services.
//! Components use `use_context` to access services without depending on
//! infrastructure implementations.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::api::Api;
use crate::application::services::ContactService;
use crate::ports::outbound::ApiPort;

/// Concrete service bundle type used by the UI.
pub type UiServices = Services<Api>;

/// All services wrapped for context provision
///
/// Services stay generic over `A: ApiPort` so tests can assemble the
/// bundle over a recording port; the UI always sees `UiServices`.
#[derive(Clone)]
pub struct Services<A: ApiPort> {
    pub contacts: Arc<ContactService<A>>,
}

impl<A: ApiPort + Clone> Services<A> {
    /// Create all services with the given API port
    pub fn new(api: A) -> Self {
        Self {
            contacts: Arc::new(ContactService::new(api)),
        }
    }
}

/// Hook to access the ContactService from context
pub fn use_contact_service() -> Arc<ContactService<Api>> {
    let services = use_context::<UiServices>();
    services.contacts.clone()
}
