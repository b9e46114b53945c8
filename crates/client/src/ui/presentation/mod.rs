//! Presentation layer - components, views, state, and service providers.
//!
//! Components depend on application-level services and port traits through
//! the context providers in [`services`]; they never see adapter types.

pub mod components;
pub mod services;
pub mod state;
pub mod views;

pub use services::{use_contact_service, Services, UiServices};
