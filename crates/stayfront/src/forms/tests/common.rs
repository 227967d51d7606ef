use serde_json::Value;

use crate::forms::schema::RawRecord;

pub(super) fn record(value: Value) -> RawRecord {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture must be a JSON object, got {other:?}"),
    }
}

/// A description with exactly `count` words under the single-space counter.
pub(super) fn words(count: usize) -> String {
    vec!["stay"; count].join(" ")
}

pub(super) fn profile_record() -> RawRecord {
    record(serde_json::json!({
        "firstName": "Linh",
        "lastName": "Tran",
        "username": "linhtran",
    }))
}

pub(super) fn property_record() -> RawRecord {
    record(serde_json::json!({
        "name": "Riverside Homestay",
        "tagline": "Quiet rooms five minutes from the Han river",
        "price": "10",
        "category": "homestay",
        "description": words(12),
        "country": "Vietnam",
        "guests": 4,
        "amenities": "wifi, breakfast, bicycle rental",
    }))
}

pub(super) fn career_record() -> RawRecord {
    record(serde_json::json!({
        "name": "Nguyen Van An",
        "phone": "0912345678",
        "description": words(20),
    }))
}

pub(super) fn review_record() -> RawRecord {
    record(serde_json::json!({
        "propertyId": "prop-0042",
        "rating": 5,
        "comment": "Spotless rooms and a generous breakfast.",
    }))
}
