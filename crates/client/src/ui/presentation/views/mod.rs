//! Page-level views.

pub mod phonebook_view;

pub use phonebook_view::PhonebookView;
