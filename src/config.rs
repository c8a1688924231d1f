//! Accessory configuration.
//!
//! All fields are optional when loaded from TOML; missing keys take their
//! defaults (zero offsets, unified keyboard channel).

use serde::Deserialize;

use crate::error::ConfigError;

/// Component-level configuration for an [`AccessoryView`](crate::pipeline::AccessoryView).
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccessoryConfig {
    /// Extra bottom padding for the scrollable content while the keyboard is hidden.
    pub content_offset_keyboard_closed: f32,
    /// Extra bottom padding for the scrollable content while the keyboard is shown.
    pub content_offset_keyboard_opened: f32,
    /// Gap between the keyboard's top edge and the panel.
    pub space_between_keyboard_and_accessory_view: f32,
    /// Use the split did-show / did-hide channel on Android.
    pub use_listeners_on_android: bool,
}

impl AccessoryConfig {
    /// Parse a TOML document.
    ///
    /// ```ignore
    /// let config = AccessoryConfig::from_toml_str(r#"
    ///     content_offset_keyboard_opened = 20
    ///     use_listeners_on_android = true
    /// "#)?;
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_content_offset_keyboard_closed(mut self, value: f32) -> Self {
        self.content_offset_keyboard_closed = value;
        self
    }

    pub fn with_content_offset_keyboard_opened(mut self, value: f32) -> Self {
        self.content_offset_keyboard_opened = value;
        self
    }

    pub fn with_space_between_keyboard_and_accessory_view(mut self, value: f32) -> Self {
        self.space_between_keyboard_and_accessory_view = value;
        self
    }

    pub fn with_listeners_on_android(mut self, enabled: bool) -> Self {
        self.use_listeners_on_android = enabled;
        self
    }

    /// Reject offsets that would poison the derived layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("content_offset_keyboard_closed", self.content_offset_keyboard_closed),
            ("content_offset_keyboard_opened", self.content_offset_keyboard_opened),
            (
                "space_between_keyboard_and_accessory_view",
                self.space_between_keyboard_and_accessory_view,
            ),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
