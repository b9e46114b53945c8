//! Phonebook state management using Dioxus signals
//!
//! Central client state: the cached contact book, the name filter, the
//! transient notification, and the confirmation the user still has to
//! answer before a mutation proceeds.

use dioxus::prelude::*;

use wirebook_domain::{Contact, ContactBook, ContactId};

/// How long a transient notification stays on screen before auto-dismissal
pub const NOTIFICATION_DISMISS_MS: u64 = 3_000;

/// Severity of a transient notification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// CSS class used by the stylesheet to color the banner
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

/// A transient on-page notification
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationData {
    pub message: String,
    pub kind: NotificationKind,
}

/// A mutation awaiting user confirmation
#[derive(Clone, Debug, PartialEq)]
pub enum PendingConfirm {
    /// The submitted name already exists; overwrite its number?
    UpdateNumber {
        existing: Contact,
        new_number: String,
    },
    /// Remove this contact locally and remotely?
    Delete { contact: Contact },
}

/// Central phonebook state for the client
#[derive(Clone)]
pub struct ContactsState {
    /// Cached mirror of server state, refreshed at startup and patched
    /// after each mutation
    pub book: Signal<ContactBook>,
    /// Case-insensitive name filter for the list view
    pub filter: Signal<String>,
    /// Currently shown transient notification
    pub notification: Signal<Option<NotificationData>>,
    /// Confirmation dialog the user has not answered yet
    pub pending: Signal<Option<PendingConfirm>>,
}

impl ContactsState {
    /// Create a new ContactsState with empty signals
    pub fn new() -> Self {
        Self {
            book: Signal::new(ContactBook::new()),
            filter: Signal::new(String::new()),
            notification: Signal::new(None),
            pending: Signal::new(None),
        }
    }

    /// Replace the book with a fresh server snapshot
    pub fn set_contacts(&mut self, contacts: Vec<Contact>) {
        self.book.with_mut(|book| book.replace_all(contacts));
    }

    /// Append a newly created contact to the book
    pub fn insert_contact(&mut self, contact: Contact) {
        if let Err(e) = self.book.with_mut(|book| book.insert(contact)) {
            tracing::warn!("Ignoring contact insert: {}", e);
        }
    }

    /// Patch the book entry that shares the contact's id
    pub fn apply_update(&mut self, contact: Contact) {
        if let Err(e) = self.book.with_mut(|book| book.apply_update(contact)) {
            tracing::warn!("Ignoring contact update: {}", e);
        }
    }

    /// Drop a contact from the book; absent ids are a no-op
    pub fn remove_contact(&mut self, id: &ContactId) {
        self.book.with_mut(|book| book.remove(id));
    }

    /// Show a success notification
    pub fn show_success(&mut self, message: impl Into<String>) {
        self.notification.set(Some(NotificationData {
            message: message.into(),
            kind: NotificationKind::Success,
        }));
    }

    /// Show an error notification
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.notification.set(Some(NotificationData {
            message: message.into(),
            kind: NotificationKind::Error,
        }));
    }

    /// Dismiss the current notification
    pub fn clear_notification(&mut self) {
        self.notification.set(None);
    }

    /// Ask the user to confirm a mutation before it runs
    pub fn request_confirm(&mut self, action: PendingConfirm) {
        self.pending.set(Some(action));
    }

    /// Drop the pending confirmation without acting on it
    pub fn clear_pending(&mut self) {
        self.pending.set(None);
    }
}

impl Default for ContactsState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the ContactsState from Dioxus context
pub fn use_contacts_state() -> ContactsState {
    use_context::<ContactsState>()
}
