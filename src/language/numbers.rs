//! Number decoding that keeps integer literals exact.
//!
//! Python integers have no size limit, so numbers are read with
//! serde_json's arbitrary precision: each one arrives as the text it was
//! written with. Inside internally tagged enums that text is buffered as a
//! map rather than a primitive, so the small bookkeeping fields (flags,
//! levels, conversion codes) go through `small()` instead of deserializing
//! straight into an integer type.

use serde::de::{Deserialize, Deserializer, Error};
use serde_json::Number;

/// Decode a small integer field, whatever shape the number was buffered in.
pub(crate) fn small<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let number = Number::deserialize(deserializer)?;
    number
        .as_i64()
        .and_then(|value| T::try_from(value).ok())
        .ok_or_else(|| D::Error::custom(format!("integer {} out of range", number)))
}
