//! Wirebook domain layer.
//!
//! Core types for the phonebook: the [`Contact`] entity, its opaque
//! store-assigned [`ContactId`], and the [`ContactBook`] that mirrors
//! server state on the client. No I/O lives here; adapters and the UI
//! depend on this crate, never the other way around.

pub mod book;
pub mod contact;
pub mod error;
pub mod ids;

pub use book::ContactBook;
pub use contact::Contact;
pub use error::DomainError;
pub use ids::ContactId;
