//! Application services - use case implementations for the UI.

pub mod contact_service;

pub use contact_service::ContactService;
