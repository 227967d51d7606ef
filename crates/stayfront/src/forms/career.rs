use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::schema::{Constraint, FieldRule, FormSchema};

/// Validated career application submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerApplication {
    pub name: String,
    pub phone: String,
    pub description: String,
}

/// Vietnamese mobile numbers: `+84` or `0`, a carrier prefix, seven digits.
const VIETNAM_MOBILE_PATTERN: &str =
    r"^(?:\+84|0)(?:3[2-9]|5[689]|7[06-9]|8[1-9]|9[0-9])[0-9]{7}$";

fn vietnam_mobile() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(VIETNAM_MOBILE_PATTERN).expect("static pattern compiles"))
}

pub fn career_schema() -> FormSchema {
    FormSchema::new(
        "career",
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
                "phone",
                Constraint::Matches(vietnam_mobile().clone()),
                "phone number must be a valid Vietnamese phone number.",
            ),
            FieldRule::new(
                "description",
                Constraint::WordCountBetween(10, 1000),
                "description must be between 10 and 1000 words.",
            ),
        ],
    )
}
