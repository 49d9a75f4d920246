//! Messenger Buttons - validated buttons for structured messages.
//!
//! Builds the button objects attached to Messenger template messages and
//! projects them into the JSON mapping the Send API expects.
//!
//! ## Architecture
//!
//! - `config` - Field limits (title / payload caps)
//! - `error` - `ValidationError`, the only error this crate returns
//! - `validate` - Shared sanitization primitives
//! - `payload` - Pluggable postback payload encoders
//! - `button` - The `Button` value, its constructors and wire schema
//!
//! ## Usage
//!
//! ```rust
//! use messenger_buttons::Button;
//!
//! let button = Button::full("Open", "https://example.com", None, None)?;
//! let schema = button.to_schema();
//! assert_eq!(schema["webview_height_ratio"], "full");
//! # Ok::<(), messenger_buttons::ValidationError>(())
//! ```

pub mod button;
pub mod config;
pub mod error;
pub mod payload;
pub mod validate;

pub use button::{Button, ButtonBuilder, ButtonKind, ButtonSchema, WebviewHeight, to_schema_list};
pub use config::ButtonLimits;
pub use error::{ValidationError, ValidationResult};
pub use payload::{DisplayPayload, JsonPayload, PayloadEncoder};
