use serde::{Deserialize, Serialize};

use super::schema::{Constraint, FieldRule, FormSchema};

/// Validated guest review submission.
///
/// `property_id` is a reference only; whether the property exists is checked
/// elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub property_id: String,
    pub rating: i64,
    pub comment: String,
}

pub fn review_schema() -> FormSchema {
    FormSchema::new(
        "review",
        vec![
            FieldRule::new("propertyId", Constraint::Text, "propertyId is required."),
            FieldRule::new(
                "rating",
                Constraint::IntBetween(1, 5),
                "rating must be between 1 and 5.",
            ),
            FieldRule::new(
                "comment",
                Constraint::MinChars(10),
                "comment must be at least 10 characters.",
            ),
            FieldRule::new(
                "comment",
                Constraint::MaxChars(1000),
                "comment must be less than 1000 characters.",
            ),
        ],
    )
}
