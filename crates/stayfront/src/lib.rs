//! Form validation schemas and site chrome for the stayfront rental-listing
//! backend.
//!
//! The `forms` module owns the declarative schemas guarding every public form
//! on the site (profile, property listing, career application, review, image
//! upload) and the axum router that exposes them. The `site` module renders
//! the static footer block. Everything else is service plumbing shared with
//! the API binary.

pub mod config;
pub mod error;
pub mod forms;
pub mod site;
pub mod telemetry;
