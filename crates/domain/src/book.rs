//! Client-local contact collection.
//!
//! [`ContactBook`] is the cached, eventually-consistent mirror of server
//! state: refreshed wholesale at startup and patched after each mutation.
//! It enforces the one invariant the client owns - contact ids are unique
//! within the collection.

use crate::contact::Contact;
use crate::error::DomainError;
use crate::ids::ContactId;

/// The locally held collection of contacts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection with a fresh server snapshot.
    ///
    /// Last write wins on duplicate ids in the snapshot; the server is the
    /// source of truth here, so the book does not reject its payload.
    pub fn replace_all(&mut self, contacts: Vec<Contact>) {
        self.contacts = contacts;
    }

    /// Append a newly created contact.
    ///
    /// Rejects an id already present in the book; id uniqueness is the
    /// collection invariant.
    pub fn insert(&mut self, contact: Contact) -> Result<(), DomainError> {
        if self.contains(&contact.id) {
            return Err(DomainError::constraint(format!(
                "duplicate contact id {}",
                contact.id
            )));
        }
        self.contacts.push(contact);
        Ok(())
    }

    /// Replace the entry carrying the same id as `contact`.
    pub fn apply_update(&mut self, contact: Contact) -> Result<(), DomainError> {
        match self.contacts.iter_mut().find(|c| c.id == contact.id) {
            Some(slot) => {
                *slot = contact;
                Ok(())
            }
            None => Err(DomainError::not_found("Contact", contact.id.to_string())),
        }
    }

    /// Drop the entry with the given id.
    ///
    /// Removing an absent id is a no-op: the record may already have been
    /// dropped by an earlier patch (e.g. the stale-record path after a
    /// failed update). Returns whether anything was removed.
    pub fn remove(&mut self, id: &ContactId) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|c| &c.id != id);
        before != self.contacts.len()
    }

    /// Exact, case-sensitive name lookup; first match wins.
    ///
    /// Drives the update-or-insert prompt: names are not unique, so this
    /// deliberately returns the earliest entry like the submit flow expects.
    pub fn find_by_name(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.name == name)
    }

    /// Contacts whose name matches the filter, case-insensitively.
    pub fn filtered(&self, filter: &str) -> Vec<Contact> {
        self.contacts
            .iter()
            .filter(|c| c.matches_filter(filter))
            .cloned()
            .collect()
    }

    /// Look up a contact by id.
    pub fn get(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| &c.id == id)
    }

    pub fn contains(&self, id: &ContactId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> ContactBook {
        let mut book = ContactBook::new();
        book.replace_all(vec![
            Contact::new("1", "Arto Hellas", "040-123456"),
            Contact::new("2", "Ada Lovelace", "39-44-5323523"),
            Contact::new("3", "Dan Abramov", "12-43-234345"),
        ]);
        book
    }

    #[test]
    fn insert_rejects_duplicate_id() {
        let mut book = sample_book();
        let err = book
            .insert(Contact::new("2", "Someone Else", "000"))
            .expect_err("duplicate id must be rejected");

        assert!(matches!(err, DomainError::Constraint(_)));
        assert_eq!(book.len(), 3);
    }

    #[test]
    fn insert_appends_new_contact() {
        let mut book = sample_book();
        book.insert(Contact::new("4", "Mary Poppendieck", "39-23-6423122"))
            .expect("insert");

        assert_eq!(book.len(), 4);
        assert!(book.contains(&ContactId::new("4")));
    }

    #[test]
    fn apply_update_replaces_matching_entry() {
        let mut book = sample_book();
        book.apply_update(Contact::new("2", "Ada Lovelace", "044-999999"))
            .expect("update");

        let ada = book.find_by_name("Ada Lovelace").expect("still present");
        assert_eq!(ada.number, "044-999999");
        assert_eq!(book.len(), 3);
    }

    #[test]
    fn apply_update_on_missing_id_is_not_found() {
        let mut book = sample_book();
        let err = book
            .apply_update(Contact::new("99", "Ghost", "000"))
            .expect_err("missing id");

        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[test]
    fn get_looks_up_by_id() {
        let book = sample_book();

        let dan = book.get(&ContactId::new("3")).expect("present");
        assert_eq!(dan.name, "Dan Abramov");
        assert!(book.get(&ContactId::new("99")).is_none());
    }

    #[test]
    fn remove_is_idempotent() {
        let mut book = sample_book();
        let id = ContactId::new("1");

        assert!(book.remove(&id));
        assert!(!book.remove(&id));
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn find_by_name_is_exact_and_first_match_wins() {
        let mut book = sample_book();
        // Names are not unique; a second "Ada Lovelace" can exist under a new id.
        book.insert(Contact::new("4", "Ada Lovelace", "111"))
            .expect("insert");

        let found = book.find_by_name("Ada Lovelace").expect("found");
        assert_eq!(found.id, ContactId::new("2"));
        assert!(book.find_by_name("ada lovelace").is_none());
    }

    #[test]
    fn filtered_matches_substring_case_insensitively() {
        let book = sample_book();

        let hits = book.filtered("aD");
        let names: Vec<&str> = hits.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ada Lovelace"]);

        assert_eq!(book.filtered("").len(), 3);
        assert!(book.filtered("zzz").is_empty());
    }
}
