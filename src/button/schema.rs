//! Wire schema for buttons.
//!
//! `to_schema` projects a `Button` into the mapping Messenger expects inside a
//! template's `buttons` list. `from_schema` goes the other way for data that
//! arrives from outside (stored templates, webhook echoes) and re-validates
//! everything, starting with the `type` tag.
//!
//! Field rules:
//! - `type` always
//! - `title`, `url`, `fallback_url`, `webview_height_ratio` when set and non-empty
//! - `payload` for postbacks (encoded payload) and phone buttons (the number)
//! - `messenger_extensions` whenever it was set, `false` included

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::trace;

use super::{Button, ButtonBuilder, ButtonKind, Variant, WebviewHeight};
use crate::error::{ValidationError, ValidationResult};
use crate::validate::sanitize_type;

/// The wire form of a button, one optional field per Messenger key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonSchema {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webview_height_ratio: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messenger_extensions: Option<bool>,
}

impl ButtonSchema {
    /// Convert into a JSON object, keeping only the fields that are present.
    pub fn into_map(self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::String(self.kind));

        let text_fields = [
            ("title", self.title),
            ("url", self.url),
            ("payload", self.payload),
            ("fallback_url", self.fallback_url),
            ("webview_height_ratio", self.webview_height_ratio),
        ];
        for (key, value) in text_fields {
            if let Some(value) = value {
                map.insert(key.to_string(), Value::String(value));
            }
        }

        if let Some(extensions) = self.messenger_extensions {
            map.insert("messenger_extensions".to_string(), Value::Bool(extensions));
        }

        map
    }
}

impl Button {
    /// Typed projection into the wire schema.
    pub fn schema(&self) -> ButtonSchema {
        let mut schema = ButtonSchema {
            kind: self.kind().as_str().to_string(),
            ..Default::default()
        };

        match &self.0 {
            Variant::WebUrl(web) => {
                schema.title = non_empty(&web.title);
                schema.url = non_empty(&web.url);
                schema.fallback_url = web.fallback_url.as_deref().and_then(non_empty);
                schema.webview_height_ratio = web.height.map(|h| h.as_str().to_string());
                schema.messenger_extensions = web.messenger_extensions;
            }
            Variant::Postback { title, payload } => {
                schema.title = non_empty(title);
                schema.payload = non_empty(payload);
            }
            // Messenger reads the number to dial from `payload`.
            Variant::PhoneNumber {
                title,
                phone_number,
            } => {
                schema.title = non_empty(title);
                schema.payload = non_empty(phone_number);
            }
            Variant::AccountLink { title, url } => {
                schema.title = non_empty(title);
                schema.url = non_empty(url);
            }
            Variant::AccountUnlink { title } => {
                schema.title = non_empty(title);
            }
            Variant::Share => {}
        }

        schema
    }

    /// Project into the JSON object sent to Messenger.
    ///
    /// Pure: calling it repeatedly yields the same value.
    pub fn to_schema(&self) -> Value {
        trace!("Projecting {} button", self.kind());
        Value::Object(self.schema().into_map())
    }

    /// Rebuild a button from an untrusted wire object.
    pub fn from_schema(value: &Value) -> ValidationResult<Self> {
        if value.get("type").is_none() {
            return Err(ValidationError::MissingField { field: "type" });
        }

        let schema = ButtonSchema::deserialize(value).map_err(|err| {
            ValidationError::InvalidValue {
                field: "schema",
                reason: err.to_string(),
            }
        })?;

        Self::try_from(schema)
    }
}

impl TryFrom<ButtonSchema> for Button {
    type Error = ValidationError;

    fn try_from(schema: ButtonSchema) -> ValidationResult<Self> {
        let kind = sanitize_type(&schema.kind)?;
        reject_foreign_fields(&schema, kind)?;

        let builder = ButtonBuilder::new();
        let title = schema.title.unwrap_or_default();

        match kind {
            ButtonKind::WebUrl => {
                let url = required(schema.url, "url")?;
                let height = schema
                    .webview_height_ratio
                    .as_deref()
                    .map(parse_height)
                    .transpose()?;
                builder.web_view(
                    title,
                    &url,
                    schema.messenger_extensions,
                    schema.fallback_url.as_deref(),
                    height,
                )
            }
            ButtonKind::Postback => {
                builder.postback_encoded(title, required(schema.payload, "payload")?)
            }
            ButtonKind::PhoneNumber => builder.phone(title, required(schema.payload, "payload")?),
            ButtonKind::AccountLink => builder.account_link(title, &required(schema.url, "url")?),
            ButtonKind::AccountUnlink => builder.account_unlink(title),
            ButtonKind::Share => Ok(builder.share()),
        }
    }
}

impl Serialize for Button {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.schema().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Button {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let schema = ButtonSchema::deserialize(deserializer)?;
        Button::try_from(schema).map_err(serde::de::Error::custom)
    }
}

/// Project a row of buttons for a template's `buttons` list.
pub fn to_schema_list(buttons: &[Button]) -> Vec<Value> {
    buttons.iter().map(Button::to_schema).collect()
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn required(value: Option<String>, field: &'static str) -> ValidationResult<String> {
    value.ok_or(ValidationError::MissingField { field })
}

fn parse_height(value: &str) -> ValidationResult<WebviewHeight> {
    WebviewHeight::from_str(value).ok_or_else(|| ValidationError::InvalidValue {
        field: "webview_height_ratio",
        reason: format!("{value:?} is not one of full, tall, compact"),
    })
}

/// Fail if `schema` carries a field that `kind` buttons never have.
fn reject_foreign_fields(schema: &ButtonSchema, kind: ButtonKind) -> ValidationResult<()> {
    let web = kind == ButtonKind::WebUrl;
    let present = [
        ("title", schema.title.is_some(), kind.has_title()),
        (
            "url",
            schema.url.is_some(),
            web || kind == ButtonKind::AccountLink,
        ),
        (
            "payload",
            schema.payload.is_some(),
            matches!(kind, ButtonKind::Postback | ButtonKind::PhoneNumber),
        ),
        ("fallback_url", schema.fallback_url.is_some(), web),
        ("webview_height_ratio", schema.webview_height_ratio.is_some(), web),
        ("messenger_extensions", schema.messenger_extensions.is_some(), web),
    ];

    for (field, is_set, allowed) in present {
        if is_set && !allowed {
            return Err(ValidationError::InvalidValue {
                field,
                reason: format!("not allowed on {kind} buttons"),
            });
        }
    }
    Ok(())
}
