use serde::{Deserialize, Serialize};

use crate::ids::ContactId;

/// A phonebook entry: a name/number pair identified by an opaque id.
///
/// The id is assigned by the backing store when the contact is created.
/// `number` is human-entered text and deliberately not format-validated.
/// Doubles as the wire record for the phonebook API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub number: String,
}

impl Contact {
    pub fn new(id: impl Into<ContactId>, name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            number: number.into(),
        }
    }

    /// A copy of this contact with a replacement number.
    ///
    /// Used to build the payload for the confirm-then-update flow; the id
    /// and name are kept as-is.
    pub fn with_number(&self, number: impl Into<String>) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            number: number.into(),
        }
    }

    /// Case-insensitive substring match on the contact name.
    ///
    /// An empty filter matches everything.
    pub fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(&filter.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_number_keeps_identity() {
        let contact = Contact::new("1", "Arto Hellas", "040-123456");
        let updated = contact.with_number("044-999999");

        assert_eq!(updated.id, contact.id);
        assert_eq!(updated.name, contact.name);
        assert_eq!(updated.number, "044-999999");
        // original untouched
        assert_eq!(contact.number, "040-123456");
    }

    #[test]
    fn filter_match_is_case_insensitive() {
        let contact = Contact::new("1", "Ada Lovelace", "39-44-5323523");

        assert!(contact.matches_filter("ada"));
        assert!(contact.matches_filter("LOVE"));
        assert!(contact.matches_filter(""));
        assert!(!contact.matches_filter("hellas"));
    }

    #[test]
    fn wire_shape_is_flat() {
        let contact = Contact::new("3", "Dan Abramov", "12-43-234345");
        let json = serde_json::to_value(&contact).expect("serialize");

        assert_eq!(
            json,
            serde_json::json!({
                "id": "3",
                "name": "Dan Abramov",
                "number": "12-43-234345",
            })
        );
    }
}
