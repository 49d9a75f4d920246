//! Button field limits.

/// Length caps applied while constructing buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonLimits {
    /// Maximum number of characters in a button title.
    pub max_title_chars: usize,

    /// Maximum number of characters in an encoded postback payload.
    pub max_payload_chars: usize,
}

impl Default for ButtonLimits {
    fn default() -> Self {
        Self::MESSENGER
    }
}

impl ButtonLimits {
    /// Limits enforced by the Messenger Send API.
    pub const MESSENGER: Self = Self {
        max_title_chars: 20,
        max_payload_chars: 1000,
    };

    /// Set max title length (builder pattern).
    #[must_use]
    pub fn max_title_chars(mut self, max: usize) -> Self {
        self.max_title_chars = max;
        self
    }

    /// Set max encoded payload length (builder pattern).
    #[must_use]
    pub fn max_payload_chars(mut self, max: usize) -> Self {
        self.max_payload_chars = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_platform_limits() {
        let limits = ButtonLimits::default();
        assert_eq!(limits.max_title_chars, 20);
        assert_eq!(limits.max_payload_chars, 1000);
    }

    #[test]
    fn test_builder_setters() {
        let limits = ButtonLimits::default()
            .max_title_chars(5)
            .max_payload_chars(64);
        assert_eq!(limits.max_title_chars, 5);
        assert_eq!(limits.max_payload_chars, 64);
    }
}
