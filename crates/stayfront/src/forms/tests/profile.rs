use super::common::profile_record;
use crate::forms::profile::{profile_schema, Profile};
use crate::forms::schema::validate_form;
use serde_json::Value;

#[test]
fn valid_profile_deserializes() {
    let profile: Profile =
        validate_form(&profile_schema(), profile_record()).expect("profile validates");
    assert_eq!(profile.first_name, "Linh");
    assert_eq!(profile.last_name, "Tran");
    assert_eq!(profile.username, "linhtran");
}

#[test]
fn short_first_name_fails_with_its_message() {
    let mut input = profile_record();
    input.insert("firstName".to_string(), Value::from("L"));

    let error = profile_schema().check(&input).expect_err("fails");
    assert_eq!(error.message(), "first name must be at least 2 characters");
}

#[test]
fn every_short_field_contributes_in_order() {
    let mut input = profile_record();
    input.insert("firstName".to_string(), Value::from("L"));
    input.insert("lastName".to_string(), Value::from("T"));
    input.insert("username".to_string(), Value::from("l"));

    let error = profile_schema().check(&input).expect_err("fails");
    assert_eq!(
        error.message(),
        "first name must be at least 2 characters,\
         last name must be at least 2 characters,\
         username must be at least 2 characters"
    );
}

#[test]
fn two_character_fields_are_accepted() {
    let mut input = profile_record();
    input.insert("firstName".to_string(), Value::from("An"));
    assert!(profile_schema().check(&input).is_ok());
}
