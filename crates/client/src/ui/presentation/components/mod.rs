//! Reusable presentation components for the phonebook page.

pub mod confirm_dialog;
pub mod contact_form;
pub mod contact_list;
pub mod filter_bar;
pub mod notification_toast;

pub use confirm_dialog::ConfirmDialog;
pub use contact_form::ContactForm;
pub use contact_list::ContactList;
pub use filter_bar::FilterBar;
pub use notification_toast::NotificationToast;
