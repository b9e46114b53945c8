//! Signal-backed state shared across the presentation layer.

pub mod contacts_state;

pub use contacts_state::{
    use_contacts_state, ContactsState, NotificationData, NotificationKind, PendingConfirm,
    NOTIFICATION_DISMISS_MS,
};
