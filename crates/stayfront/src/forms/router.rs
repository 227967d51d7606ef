use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};

use crate::error::AppError;

use super::career::{career_schema, CareerApplication};
use super::profile::{profile_schema, Profile};
use super::property::{property_schema, PropertyListing};
use super::review::{review_schema, Review};
use super::schema::{validate_form, FormSchema, FormValidationError, RawRecord};
use super::upload::{FileSupport, ImageUpload, ImageUploadSchema, UploadReference, UploadedFile};

/// The full set of schemas guarding the site's public forms.
///
/// Built once at startup and shared; schemas are immutable rule sets, so
/// concurrent validation needs no coordination.
#[derive(Debug, Clone)]
pub struct FormCatalog {
    profile: FormSchema,
    property: FormSchema,
    career: FormSchema,
    review: FormSchema,
    image: ImageUploadSchema,
}

impl FormCatalog {
    pub fn new(support: FileSupport) -> Self {
        Self {
            profile: profile_schema(),
            property: property_schema(),
            career: career_schema(),
            review: review_schema(),
            image: ImageUploadSchema::new(support),
        }
    }

    pub fn validate_profile(&self, record: RawRecord) -> Result<Profile, FormValidationError> {
        validate_form(&self.profile, record)
    }

    pub fn validate_property(
        &self,
        record: RawRecord,
    ) -> Result<PropertyListing, FormValidationError> {
        validate_form(&self.property, record)
    }

    pub fn validate_career(
        &self,
        record: RawRecord,
    ) -> Result<CareerApplication, FormValidationError> {
        validate_form(&self.career, record)
    }

    pub fn validate_review(&self, record: RawRecord) -> Result<Review, FormValidationError> {
        validate_form(&self.review, record)
    }

    pub fn validate_image(&self, file: &UploadedFile) -> Result<ImageUpload, FormValidationError> {
        self.image.validate(file)
    }
}

impl Default for FormCatalog {
    fn default() -> Self {
        Self::new(FileSupport::Available)
    }
}

/// Router builder exposing the form validation endpoints.
pub fn forms_router(catalog: Arc<FormCatalog>) -> Router {
    Router::new()
        .route("/api/v1/forms/profile", post(profile_handler))
        .route("/api/v1/forms/properties", post(property_handler))
        .route("/api/v1/forms/careers", post(career_handler))
        .route("/api/v1/forms/reviews", post(review_handler))
        .route("/api/v1/uploads/image", post(image_handler))
        .with_state(catalog)
}

async fn profile_handler(
    State(catalog): State<Arc<FormCatalog>>,
    Json(record): Json<RawRecord>,
) -> Result<Json<Profile>, AppError> {
    Ok(Json(catalog.validate_profile(record)?))
}

async fn property_handler(
    State(catalog): State<Arc<FormCatalog>>,
    Json(record): Json<RawRecord>,
) -> Result<Json<PropertyListing>, AppError> {
    Ok(Json(catalog.validate_property(record)?))
}

async fn career_handler(
    State(catalog): State<Arc<FormCatalog>>,
    Json(record): Json<RawRecord>,
) -> Result<Json<CareerApplication>, AppError> {
    Ok(Json(catalog.validate_career(record)?))
}

async fn review_handler(
    State(catalog): State<Arc<FormCatalog>>,
    Json(record): Json<RawRecord>,
) -> Result<Json<Review>, AppError> {
    Ok(Json(catalog.validate_review(record)?))
}

async fn image_handler(
    State(catalog): State<Arc<FormCatalog>>,
    Json(reference): Json<UploadReference>,
) -> Result<Json<ImageUpload>, AppError> {
    let file = UploadedFile::from(reference);
    Ok(Json(catalog.validate_image(&file)?))
}
