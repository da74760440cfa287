use serde::de::DeserializeOwned;

use crate::collection::Errors;
use crate::error::Error;
use crate::named::NamedError;

/// Decodes `object[key]` into `T`, recording a failure under `key` instead of
/// returning it so the caller can keep decoding the remaining fields.
pub fn decode_field<T: DeserializeOwned>(
    errors: &mut Errors,
    object: &serde_json::Value,
    key: &str,
) -> Option<T> {
    let Some(value) = object.get(key) else {
        errors.add(crate::named_error!(key, "missing field"));
        return None;
    };

    match <T as serde::Deserialize>::deserialize(value) {
        Ok(decoded) => Some(decoded),
        Err(err) => {
            errors.add(NamedError::from_error(key, err));
            None
        }
    }
}

/// Requires `value` to be a JSON object, the shape every field decode starts
/// from.
pub fn expect_object(value: &serde_json::Value) -> Result<&serde_json::Value, Error> {
    if value.is_object() {
        return Ok(value);
    }
    Err(Error::Decode {
        reason: format!("expected an object, got {value}"),
    })
}
