//! Message buttons.
//!
//! A `Button` is one of six Messenger button types. Each type carries only
//! the fields Messenger reads for it, and every field is validated when the
//! button is built. Buttons are immutable afterwards.
//!
//! ```rust
//! use messenger_buttons::{Button, ButtonKind};
//!
//! let call = Button::phone("Call us", "+15551234567")?;
//! assert_eq!(call.kind(), ButtonKind::PhoneNumber);
//! # Ok::<(), messenger_buttons::ValidationError>(())
//! ```

mod builder;
pub mod schema;

use std::fmt;

use serde::Serialize;

use crate::error::ValidationResult;

pub use builder::ButtonBuilder;
pub use schema::{ButtonSchema, to_schema_list};

/// Button type, as sent in the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    WebUrl,
    Postback,
    PhoneNumber,
    AccountLink,
    AccountUnlink,
    Share,
}

impl ButtonKind {
    pub const ALL: [ButtonKind; 6] = [
        Self::WebUrl,
        Self::Postback,
        Self::PhoneNumber,
        Self::AccountLink,
        Self::AccountUnlink,
        Self::Share,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "web_url" => Some(Self::WebUrl),
            "postback" => Some(Self::Postback),
            "phone_number" => Some(Self::PhoneNumber),
            "account_link" => Some(Self::AccountLink),
            "account_unlink" => Some(Self::AccountUnlink),
            "element_share" => Some(Self::Share),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WebUrl => "web_url",
            Self::Postback => "postback",
            Self::PhoneNumber => "phone_number",
            Self::AccountLink => "account_link",
            Self::AccountUnlink => "account_unlink",
            Self::Share => "element_share",
        }
    }

    /// Whether buttons of this kind carry a title.
    pub fn has_title(&self) -> bool {
        !matches!(self, Self::Share)
    }
}

impl fmt::Display for ButtonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Webview size for `web_url` buttons (`webview_height_ratio`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WebviewHeight {
    Full,
    Tall,
    Compact,
}

impl WebviewHeight {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "full" => Some(Self::Full),
            "tall" => Some(Self::Tall),
            "compact" => Some(Self::Compact),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Tall => "tall",
            Self::Compact => "compact",
        }
    }
}

/// A validated message button.
///
/// Only obtainable through the constructors below, a [`ButtonBuilder`], or
/// [`Button::from_schema`], so the fields always match the button type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button(Variant);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Variant {
    WebUrl(WebView),
    Postback { title: String, payload: String },
    PhoneNumber { title: String, phone_number: String },
    AccountLink { title: String, url: String },
    AccountUnlink { title: String },
    Share,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct WebView {
    title: String,
    url: String,
    height: Option<WebviewHeight>,
    messenger_extensions: Option<bool>,
    fallback_url: Option<String>,
}

// Shorthands over the default builder (platform limits, JSON payloads).
impl Button {
    /// Button that opens `url` in the in-app browser.
    pub fn web_url(
        title: impl Into<String>,
        url: &str,
        messenger_extensions: Option<bool>,
        fallback_url: Option<&str>,
    ) -> ValidationResult<Self> {
        ButtonBuilder::new().web_url(title, url, messenger_extensions, fallback_url)
    }

    /// `web_url` button with a full-height webview.
    pub fn full(
        title: impl Into<String>,
        url: &str,
        messenger_extensions: Option<bool>,
        fallback_url: Option<&str>,
    ) -> ValidationResult<Self> {
        ButtonBuilder::new().full(title, url, messenger_extensions, fallback_url)
    }

    /// `web_url` button with a tall webview.
    pub fn tall(
        title: impl Into<String>,
        url: &str,
        messenger_extensions: Option<bool>,
        fallback_url: Option<&str>,
    ) -> ValidationResult<Self> {
        ButtonBuilder::new().tall(title, url, messenger_extensions, fallback_url)
    }

    /// `web_url` button with a compact webview.
    pub fn compact(
        title: impl Into<String>,
        url: &str,
        messenger_extensions: Option<bool>,
        fallback_url: Option<&str>,
    ) -> ValidationResult<Self> {
        ButtonBuilder::new().compact(title, url, messenger_extensions, fallback_url)
    }

    /// Button that sends `payload`, JSON encoded, back to the webhook.
    pub fn postback<T: Serialize + ?Sized>(
        title: impl Into<String>,
        payload: &T,
    ) -> ValidationResult<Self> {
        ButtonBuilder::new().postback(title, payload)
    }

    /// Button that dials `phone_number`.
    pub fn phone(
        title: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> ValidationResult<Self> {
        ButtonBuilder::new().phone(title, phone_number)
    }

    /// Share button. Has no title.
    pub fn share() -> Self {
        ButtonBuilder::new().share()
    }

    /// Account linking button pointing at the login `url`.
    pub fn account_link(title: impl Into<String>, url: &str) -> ValidationResult<Self> {
        ButtonBuilder::new().account_link(title, url)
    }

    pub fn account_unlink(title: impl Into<String>) -> ValidationResult<Self> {
        ButtonBuilder::new().account_unlink(title)
    }
}

// Accessors
impl Button {
    pub fn kind(&self) -> ButtonKind {
        match &self.0 {
            Variant::WebUrl(_) => ButtonKind::WebUrl,
            Variant::Postback { .. } => ButtonKind::Postback,
            Variant::PhoneNumber { .. } => ButtonKind::PhoneNumber,
            Variant::AccountLink { .. } => ButtonKind::AccountLink,
            Variant::AccountUnlink { .. } => ButtonKind::AccountUnlink,
            Variant::Share => ButtonKind::Share,
        }
    }

    /// Title, for every type except share.
    pub fn title(&self) -> Option<&str> {
        match &self.0 {
            Variant::WebUrl(web) => Some(&web.title),
            Variant::Postback { title, .. }
            | Variant::PhoneNumber { title, .. }
            | Variant::AccountLink { title, .. }
            | Variant::AccountUnlink { title } => Some(title),
            Variant::Share => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match &self.0 {
            Variant::WebUrl(web) => Some(&web.url),
            Variant::AccountLink { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Encoded postback payload.
    pub fn payload(&self) -> Option<&str> {
        match &self.0 {
            Variant::Postback { payload, .. } => Some(payload),
            _ => None,
        }
    }

    pub fn phone_number(&self) -> Option<&str> {
        match &self.0 {
            Variant::PhoneNumber { phone_number, .. } => Some(phone_number),
            _ => None,
        }
    }

    pub fn height(&self) -> Option<WebviewHeight> {
        match &self.0 {
            Variant::WebUrl(web) => web.height,
            _ => None,
        }
    }

    /// `None` when unset, which is not the same as `Some(false)`.
    pub fn messenger_extensions(&self) -> Option<bool> {
        match &self.0 {
            Variant::WebUrl(web) => web.messenger_extensions,
            _ => None,
        }
    }

    pub fn fallback_url(&self) -> Option<&str> {
        match &self.0 {
            Variant::WebUrl(web) => web.fallback_url.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_kind_wire_strings() {
        for kind in ButtonKind::ALL {
            assert_eq!(ButtonKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(ButtonKind::Share.as_str(), "element_share");
        assert_eq!(ButtonKind::from_str("share"), None);
        assert_eq!(ButtonKind::from_str("WEB_URL"), None);
        assert!(ButtonKind::Postback.has_title());
        assert!(!ButtonKind::Share.has_title());
    }

    #[test]
    fn test_height_wire_strings() {
        assert_eq!(WebviewHeight::Full.as_str(), "full");
        assert_eq!(WebviewHeight::Tall.as_str(), "tall");
        assert_eq!(WebviewHeight::Compact.as_str(), "compact");
        assert_eq!(WebviewHeight::from_str("medium"), None);
    }

    #[test]
    fn test_web_url_fields() {
        let button = Button::web_url(
            "Open",
            "https://example.com",
            Some(false),
            Some("https://example.com/fallback"),
        )
        .unwrap();

        assert_eq!(button.kind(), ButtonKind::WebUrl);
        assert_eq!(button.title(), Some("Open"));
        assert_eq!(button.url(), Some("https://example.com"));
        assert_eq!(button.height(), None);
        assert_eq!(button.messenger_extensions(), Some(false));
        assert_eq!(button.fallback_url(), Some("https://example.com/fallback"));
        assert_eq!(button.payload(), None);
        assert_eq!(button.phone_number(), None);
    }

    #[test]
    fn test_height_variants() {
        let full = Button::full("A", "https://example.com", None, None).unwrap();
        let tall = Button::tall("A", "https://example.com", None, None).unwrap();
        let compact = Button::compact("A", "https://example.com", None, None).unwrap();

        assert_eq!(full.height(), Some(WebviewHeight::Full));
        assert_eq!(tall.height(), Some(WebviewHeight::Tall));
        assert_eq!(compact.height(), Some(WebviewHeight::Compact));
        assert_eq!(full.kind(), ButtonKind::WebUrl);
    }

    #[test]
    fn test_height_variants_validate_like_web_url() {
        assert!(Button::tall("A", "not a url", None, None).is_err());
        assert!(Button::compact("A".repeat(21), "https://example.com", None, None).is_err());
        assert!(Button::full("A", "https://example.com", None, Some("nope")).is_err());
    }

    #[test]
    fn test_title_boundary() {
        assert!(Button::account_unlink("a".repeat(20)).is_ok());

        let err = Button::account_unlink("a".repeat(21)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLong {
                field: "title",
                max: 20,
                actual: 21
            }
        );
    }

    #[test]
    fn test_invalid_url() {
        let err = Button::account_link("Log in", "example.com/login").unwrap_err();
        assert_eq!(err.field(), "url");

        let err = Button::web_url("Open", "https://example.com", None, Some("fallback")).unwrap_err();
        assert_eq!(err.field(), "fallback_url");
    }

    #[test]
    fn test_phone_pattern() {
        assert!(Button::phone("Call", "+123456").is_ok());
        assert!(Button::phone("Call", "+12345").is_err());
        assert!(Button::phone("Call", "+1234567890123456").is_err());
        assert!(matches!(
            Button::phone("Call", "123456"),
            Err(ValidationError::InvalidPhoneNumber { .. })
        ));
    }

    #[test]
    fn test_postback_payload() {
        let button = Button::postback("Buy", &serde_json::json!({ "sku": "A-1" })).unwrap();
        assert_eq!(button.kind(), ButtonKind::Postback);
        assert_eq!(button.payload(), Some(r#"{"sku":"A-1"}"#));
        assert_eq!(button.url(), None);
    }

    #[test]
    fn test_share_has_no_fields() {
        let button = Button::share();
        assert_eq!(button.kind(), ButtonKind::Share);
        assert_eq!(button.title(), None);
        assert_eq!(button.url(), None);
    }

    #[test]
    fn test_value_equality() {
        let a = Button::phone("Call", "+15551234567").unwrap();
        let b = Button::phone("Call", "+15551234567").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Button::phone("Call", "+15551234568").unwrap());
    }
}
