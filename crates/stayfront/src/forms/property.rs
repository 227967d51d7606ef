use serde::{Deserialize, Serialize};

use super::schema::{Constraint, FieldRule, FormSchema};

/// Validated property listing submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListing {
    pub name: String,
    pub tagline: String,
    pub price: i64,
    pub category: String,
    pub description: String,
    pub country: String,
    pub guests: i64,
    pub amenities: String,
}

pub fn property_schema() -> FormSchema {
    FormSchema::new(
        "property",
        vec![
            FieldRule::new(
                "name",
                Constraint::MinChars(2),
                "name must be at least 2 characters.",
            ),
            FieldRule::new(
                "name",
                Constraint::MaxChars(100),
                "name must be less than 100 characters.",
            ),
            FieldRule::new(
                "tagline",
                Constraint::MinChars(2),
                "tagline must be at least 2 characters.",
            ),
            FieldRule::new(
                "tagline",
                Constraint::MaxChars(100),
                "tagline must be less than 100 characters.",
            ),
            FieldRule::new(
                "price",
                Constraint::IntAtLeast(0),
                "price must be a positive number.",
            ),
            FieldRule::new("category", Constraint::Text, "category is required."),
            FieldRule::new(
                "description",
                Constraint::WordCountBetween(10, 1000),
                "description must be between 10 and 1000 words.",
            ),
            FieldRule::new("country", Constraint::Text, "country is required."),
            FieldRule::new(
                "guests",
                Constraint::IntAtLeast(0),
                "guest amount must be a positive number.",
            ),
            FieldRule::new("amenities", Constraint::Text, "amenities is required."),
        ],
    )
}
