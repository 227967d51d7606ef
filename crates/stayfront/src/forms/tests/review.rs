use serde_json::Value;

use super::common::review_record;
use crate::forms::review::{review_schema, Review};
use crate::forms::schema::validate_form;

#[test]
fn valid_review_deserializes() {
    let review: Review = validate_form(&review_schema(), review_record()).expect("review validates");
    assert_eq!(review.property_id, "prop-0042");
    assert_eq!(review.rating, 5);
}

#[test]
fn rating_boundaries() {
    let schema = review_schema();

    for (rating, passes) in [(0, false), (1, true), (5, true), (6, false)] {
        let mut input = review_record();
        input.insert("rating".to_string(), Value::from(rating));
        let outcome = schema.check(&input);
        assert_eq!(outcome.is_ok(), passes, "rating {rating}");
        if let Err(error) = outcome {
            assert_eq!(error.message(), "rating must be between 1 and 5.");
        }
    }
}

#[test]
fn numeric_string_rating_coerces() {
    let mut input = review_record();
    input.insert("rating".to_string(), Value::from("3"));

    let review: Review = validate_form(&review_schema(), input).expect("review validates");
    assert_eq!(review.rating, 3);
}

#[test]
fn comment_length_bounds() {
    let schema = review_schema();

    let mut short = review_record();
    short.insert("comment".to_string(), Value::from("too short"));
    let error = schema.check(&short).expect_err("short comment fails");
    assert_eq!(error.message(), "comment must be at least 10 characters.");

    let mut long = review_record();
    long.insert("comment".to_string(), Value::from("x".repeat(1001)));
    let error = schema.check(&long).expect_err("long comment fails");
    assert_eq!(error.message(), "comment must be less than 1000 characters.");
}

#[test]
fn property_existence_is_not_checked_here() {
    let mut input = review_record();
    input.insert("propertyId".to_string(), Value::from("no-such-property"));
    assert!(review_schema().check(&input).is_ok());
}

#[test]
fn missing_property_id_and_bad_rating_aggregate_in_order() {
    let mut input = review_record();
    input.remove("propertyId");
    input.insert("rating".to_string(), Value::from(9));

    let error = review_schema().check(&input).expect_err("fails");
    assert_eq!(
        error.message(),
        "propertyId is required.,rating must be between 1 and 5."
    );
}
