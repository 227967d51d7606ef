//! Declarative validation schemas for every public form on the site.
//!
//! Each schema is a declared-order set of per-field constraints over a flat
//! untrusted record. Validation is pure and stateless: the same input always
//! produces the same pass/fail result and the same ordered error messages.

pub mod career;
pub mod profile;
pub mod property;
pub mod review;
pub mod router;
pub mod schema;
pub mod upload;

#[cfg(test)]
mod tests;

pub use career::{career_schema, CareerApplication};
pub use profile::{profile_schema, Profile};
pub use property::{property_schema, PropertyListing};
pub use review::{review_schema, Review};
pub use router::{forms_router, FormCatalog};
pub use schema::{validate_form, Constraint, FieldRule, FormSchema, FormValidationError, RawRecord};
pub use upload::{
    FileSupport, ImageUpload, ImageUploadSchema, UploadReference, UploadedFile, MAX_IMAGE_BYTES,
};
