//! Mapping from the draft record to the JSON body the prediction service
//! expects.
//!
//! The service uses its own key names (some containing spaces), so the
//! mapping is kept as a single table rather than spread across serde
//! attributes.

use serde_json::{Map, Number, Value};

use super::{DraftRecord, FormField};

/// Form field → wire key, in the order keys are written to the payload.
pub const WIRE_FIELDS: [(FormField, &str); 9] = [
    (FormField::Quality1, "Quality1"),
    (FormField::Quality2, "Quality2"),
    (FormField::Quality3, "Quality3"),
    (FormField::SmallBags, "Small Bags"),
    (FormField::LargeBags, "Large Bags"),
    (FormField::XLargeBags, "XLarge Bags"),
    (FormField::ProductType, "type"),
    (FormField::Year, "year"),
    (FormField::Region, "region"),
];

/// Largest integer an `f64` holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Builds the request body for `record`.
pub fn to_wire_payload(record: &DraftRecord) -> Map<String, Value> {
    WIRE_FIELDS
        .iter()
        .map(|(field, key)| (key.to_string(), field_value(record, *field)))
        .collect()
}

/// Encodes a form number the way a JSON serializer in the browser would:
/// integral values without a fraction, other finite values as floats, and
/// `NaN` or infinities as `null`.
pub fn wire_number(value: f64) -> Value {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        // Normalizes -0.0 to 0 as well.
        Value::from(value as i64)
    } else {
        Number::from_f64(value).map_or(Value::Null, Value::Number)
    }
}

fn field_value(
    record: &DraftRecord,
    field: FormField,
) -> Value {
    match field {
        FormField::Quality1 => wire_number(record.quality1),
        FormField::Quality2 => wire_number(record.quality2),
        FormField::Quality3 => wire_number(record.quality3),
        FormField::SmallBags => wire_number(record.small_bags),
        FormField::LargeBags => wire_number(record.large_bags),
        FormField::XLargeBags => wire_number(record.xlarge_bags),
        FormField::ProductType => Value::from(record.product_type.as_str()),
        FormField::Year => wire_number(record.year),
        FormField::Region => Value::from(record.region.as_str()),
    }
}
