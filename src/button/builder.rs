//! Button construction with configurable limits and payload encoding.

use tracing::trace;

use super::{Button, Variant, WebView, WebviewHeight};
use crate::config::ButtonLimits;
use crate::error::ValidationResult;
use crate::payload::{JsonPayload, PayloadEncoder};
use crate::validate::{sanitize_payload, sanitize_phone_number, sanitize_title, sanitize_url};

/// Builds validated buttons.
///
/// Every constructor either returns a complete `Button` or the first
/// `ValidationError` it hits; nothing is partially built.
///
/// ```rust
/// use messenger_buttons::{ButtonBuilder, ButtonLimits, DisplayPayload};
///
/// let builder = ButtonBuilder::new()
///     .with_limits(ButtonLimits::default().max_payload_chars(64))
///     .with_encoder(DisplayPayload);
///
/// let button = builder.postback("Start", "GET_STARTED")?;
/// assert_eq!(button.payload(), Some("GET_STARTED"));
/// # Ok::<(), messenger_buttons::ValidationError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ButtonBuilder<E = JsonPayload> {
    limits: ButtonLimits,
    encoder: E,
}

impl ButtonBuilder {
    /// Builder with Messenger's limits and JSON payloads.
    pub fn new() -> Self {
        Self {
            limits: ButtonLimits::default(),
            encoder: JsonPayload,
        }
    }
}

impl<E> ButtonBuilder<E> {
    /// Replace the field limits (builder pattern).
    #[must_use]
    pub fn with_limits(mut self, limits: ButtonLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Replace the postback payload encoder.
    #[must_use]
    pub fn with_encoder<F>(self, encoder: F) -> ButtonBuilder<F> {
        ButtonBuilder {
            limits: self.limits,
            encoder,
        }
    }

    pub fn limits(&self) -> &ButtonLimits {
        &self.limits
    }

    pub fn web_url(
        &self,
        title: impl Into<String>,
        url: &str,
        messenger_extensions: Option<bool>,
        fallback_url: Option<&str>,
    ) -> ValidationResult<Button> {
        self.web_view(title, url, messenger_extensions, fallback_url, None)
    }

    pub fn full(
        &self,
        title: impl Into<String>,
        url: &str,
        messenger_extensions: Option<bool>,
        fallback_url: Option<&str>,
    ) -> ValidationResult<Button> {
        self.web_view(
            title,
            url,
            messenger_extensions,
            fallback_url,
            Some(WebviewHeight::Full),
        )
    }

    pub fn tall(
        &self,
        title: impl Into<String>,
        url: &str,
        messenger_extensions: Option<bool>,
        fallback_url: Option<&str>,
    ) -> ValidationResult<Button> {
        self.web_view(
            title,
            url,
            messenger_extensions,
            fallback_url,
            Some(WebviewHeight::Tall),
        )
    }

    pub fn compact(
        &self,
        title: impl Into<String>,
        url: &str,
        messenger_extensions: Option<bool>,
        fallback_url: Option<&str>,
    ) -> ValidationResult<Button> {
        self.web_view(
            title,
            url,
            messenger_extensions,
            fallback_url,
            Some(WebviewHeight::Compact),
        )
    }

    /// Encode `payload` with this builder's encoder and build a postback.
    pub fn postback<T: ?Sized>(
        &self,
        title: impl Into<String>,
        payload: &T,
    ) -> ValidationResult<Button>
    where
        E: PayloadEncoder<T>,
    {
        let title = sanitize_title(title, &self.limits)?;
        let encoded = self.encoder.encode(payload)?;
        self.postback_parts(title, encoded)
    }

    pub fn phone(
        &self,
        title: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> ValidationResult<Button> {
        let title = sanitize_title(title, &self.limits)?;
        let phone_number = sanitize_phone_number(phone_number)?;
        Ok(built(Variant::PhoneNumber {
            title,
            phone_number,
        }))
    }

    pub fn share(&self) -> Button {
        built(Variant::Share)
    }

    pub fn account_link(&self, title: impl Into<String>, url: &str) -> ValidationResult<Button> {
        let title = sanitize_title(title, &self.limits)?;
        let url = sanitize_url(url, "url")?;
        Ok(built(Variant::AccountLink { title, url }))
    }

    pub fn account_unlink(&self, title: impl Into<String>) -> ValidationResult<Button> {
        let title = sanitize_title(title, &self.limits)?;
        Ok(built(Variant::AccountUnlink { title }))
    }

    pub(crate) fn web_view(
        &self,
        title: impl Into<String>,
        url: &str,
        messenger_extensions: Option<bool>,
        fallback_url: Option<&str>,
        height: Option<WebviewHeight>,
    ) -> ValidationResult<Button> {
        let title = sanitize_title(title, &self.limits)?;
        let url = sanitize_url(url, "url")?;
        let fallback_url = fallback_url
            .map(|fallback| sanitize_url(fallback, "fallback_url"))
            .transpose()?;

        Ok(built(Variant::WebUrl(WebView {
            title,
            url,
            height,
            messenger_extensions,
            fallback_url,
        })))
    }

    /// Postback from payload text that is already encoded.
    pub(crate) fn postback_encoded(
        &self,
        title: impl Into<String>,
        payload: String,
    ) -> ValidationResult<Button> {
        let title = sanitize_title(title, &self.limits)?;
        self.postback_parts(title, payload)
    }

    /// `title` must already have passed `sanitize_title`.
    fn postback_parts(&self, title: String, payload: String) -> ValidationResult<Button> {
        let payload = sanitize_payload(payload, &self.limits)?;
        Ok(built(Variant::Postback { title, payload }))
    }
}

fn built(variant: Variant) -> Button {
    let button = Button(variant);
    trace!("Built {} button", button.kind());
    button
}
