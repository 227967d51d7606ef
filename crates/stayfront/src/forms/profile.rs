use serde::{Deserialize, Serialize};

use super::schema::{Constraint, FieldRule, FormSchema};

/// Validated account profile fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

pub fn profile_schema() -> FormSchema {
    FormSchema::new(
        "profile",
        vec![
            FieldRule::new(
                "firstName",
                Constraint::MinChars(2),
                "first name must be at least 2 characters",
            ),
            FieldRule::new(
                "lastName",
                Constraint::MinChars(2),
                "last name must be at least 2 characters",
            ),
            FieldRule::new(
                "username",
                Constraint::MinChars(2),
                "username must be at least 2 characters",
            ),
        ],
    )
}
