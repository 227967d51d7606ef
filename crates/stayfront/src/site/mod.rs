//! Server-rendered site chrome.

pub mod footer;

pub use footer::{render_footer, ContactEntry, FooterContent, FooterError};
