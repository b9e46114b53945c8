//! Wire payloads for the phonebook API.
//!
//! The full contact record is the domain [`Contact`](wirebook_domain::Contact)
//! itself; only the create payload differs, because the id is assigned by
//! the backing store.

use serde::{Deserialize, Serialize};

/// Payload for creating a contact. No id: the store assigns one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContactData {
    pub name: String,
    pub number: String,
}

impl NewContactData {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }
}
