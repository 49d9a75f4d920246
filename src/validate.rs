//! Sanitization primitives shared by every button constructor.
//!
//! Each function returns the accepted value (owned, possibly parsed) or the
//! `ValidationError` describing which field failed.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use url::Url;

use crate::button::ButtonKind;
use crate::config::ButtonLimits;
use crate::error::{ValidationError, ValidationResult};

/// `+` followed by 6 to 15 digits, nothing else.
static PHONE_NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A\+[0-9]{6,15}\z").unwrap());

/// Fail if `value` has more than `max` characters.
///
/// Characters, not bytes: a 20-emoji title is 20 characters long.
pub fn max_length(value: &str, max: usize, field: &'static str) -> ValidationResult<()> {
    let actual = value.chars().count();
    if actual > max {
        debug!("Rejected {}: {} characters, max {}", field, actual, max);
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(())
}

/// Validate a button title.
pub fn sanitize_title(value: impl Into<String>, limits: &ButtonLimits) -> ValidationResult<String> {
    let value = value.into();
    max_length(&value, limits.max_title_chars, "title")?;
    Ok(value)
}

/// Validate an already encoded postback payload. Messenger requires one.
pub fn sanitize_payload(value: impl Into<String>, limits: &ButtonLimits) -> ValidationResult<String> {
    let value = value.into();
    if value.is_empty() {
        debug!("Rejected payload: empty");
        return Err(ValidationError::InvalidValue {
            field: "payload",
            reason: "must not be empty".to_string(),
        });
    }
    max_length(&value, limits.max_payload_chars, "payload")?;
    Ok(value)
}

/// Check that `value` is an absolute http(s) URL with a host.
///
/// The value is returned as given, not in `Url`'s normalized form.
pub fn sanitize_url(value: impl Into<String>, field: &'static str) -> ValidationResult<String> {
    let value = value.into();
    let url = Url::parse(&value).map_err(|err| {
        debug!("Rejected {} {:?}: {}", field, value, err);
        ValidationError::InvalidUrl {
            field,
            reason: err.to_string(),
        }
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        debug!("Rejected {} {:?}: scheme {}", field, value, url.scheme());
        return Err(ValidationError::InvalidUrl {
            field,
            reason: "scheme must be http or https".to_string(),
        });
    }

    if !url.has_host() {
        debug!("Rejected {} {:?}: no host", field, value);
        return Err(ValidationError::InvalidUrl {
            field,
            reason: "missing host".to_string(),
        });
    }

    Ok(value)
}

/// Validate a dialable phone number such as `+15551234567`.
pub fn sanitize_phone_number(value: impl Into<String>) -> ValidationResult<String> {
    let value = value.into();
    if !PHONE_NUMBER_REGEX.is_match(&value) {
        debug!("Rejected phoneNumber {:?}", value);
        return Err(ValidationError::InvalidPhoneNumber { value });
    }
    Ok(value)
}

/// Map a wire type string to a known button kind.
pub fn sanitize_type(value: &str) -> ValidationResult<ButtonKind> {
    ButtonKind::from_str(value).ok_or_else(|| {
        debug!("Rejected type {:?}", value);
        ValidationError::UnknownType {
            value: value.to_string(),
        }
    })
}
