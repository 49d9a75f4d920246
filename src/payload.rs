//! Postback payload encoders.
//!
//! A postback carries opaque application data that Messenger echoes back in
//! the `messaging_postbacks` webhook. The encoding is the application's own
//! convention, so it is a strategy the builder is parameterised over.

use std::fmt::Display;

use serde::Serialize;

use crate::error::{ValidationError, ValidationResult};

/// Turns an application value into postback payload text.
///
/// Implementations must be deterministic: the same value always encodes to
/// the same string.
pub trait PayloadEncoder<T: ?Sized> {
    fn encode(&self, value: &T) -> ValidationResult<String>;
}

/// Encodes any `Serialize` value as compact JSON. This is the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPayload;

impl<T: Serialize + ?Sized> PayloadEncoder<T> for JsonPayload {
    fn encode(&self, value: &T) -> ValidationResult<String> {
        serde_json::to_string(value).map_err(|err| ValidationError::Encoding {
            field: "payload",
            reason: err.to_string(),
        })
    }
}

/// Uses the value's `Display` output verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayPayload;

impl<T: Display + ?Sized> PayloadEncoder<T> for DisplayPayload {
    fn encode(&self, value: &T) -> ValidationResult<String> {
        Ok(value.to_string())
    }
}
