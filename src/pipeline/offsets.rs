//! Offsets - Derived translation, content padding and panel margins.
//!
//! Pure functions of the current keyboard state, measured panel size,
//! safe-area insets and configuration. The derived built by
//! [`create_offsets_derived`] re-runs whenever any of the input signals
//! changes, so the outputs never lag the inputs.

use spark_signals::{derived, Derived, Signal};

use crate::config::AccessoryConfig;
use crate::types::{KeyboardState, PanelSize, SafeAreaInsets};

/// Margins around the panel content container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelMargins {
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

/// Everything the render layer applies for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AccessoryOffsets {
    /// Vertical translation of the panel. Zero or negative (upwards).
    pub translate_y: f32,
    /// Bottom padding of the scrollable content sibling.
    pub content_padding_bottom: f32,
    pub panel_margins: PanelMargins,
}

/// Lift the panel clear of the keyboard plus the configured gap.
pub fn panel_translation(keyboard: KeyboardState, space_between: f32) -> f32 {
    if !keyboard.visible {
        return 0.0;
    }
    -(keyboard.height + space_between)
}

/// Panel height plus the keyboard-dependent offset. With the keyboard up the
/// bottom inset is subtracted, since the keyboard already covers it.
pub fn content_padding(
    keyboard: KeyboardState,
    panel: PanelSize,
    insets: SafeAreaInsets,
    config: &AccessoryConfig,
) -> f32 {
    let offset = if keyboard.height > 0.0 {
        config.content_offset_keyboard_opened - insets.bottom
    } else {
        config.content_offset_keyboard_closed
    };
    panel.height + offset
}

pub fn panel_margins(keyboard: KeyboardState, insets: SafeAreaInsets) -> PanelMargins {
    PanelMargins {
        bottom: if keyboard.height > 0.0 { 0.0 } else { insets.bottom },
        left: insets.left,
        right: insets.right,
    }
}

pub fn compute_offsets(
    keyboard: KeyboardState,
    panel: PanelSize,
    insets: SafeAreaInsets,
    config: &AccessoryConfig,
) -> AccessoryOffsets {
    AccessoryOffsets {
        translate_y: panel_translation(keyboard, config.space_between_keyboard_and_accessory_view),
        content_padding_bottom: content_padding(keyboard, panel, insets, config),
        panel_margins: panel_margins(keyboard, insets),
    }
}

/// Create the offsets derived.
///
/// Reads the three input signals, creating reactive dependencies on each.
pub fn create_offsets_derived(
    keyboard: Signal<KeyboardState>,
    panel: Signal<PanelSize>,
    insets: Signal<SafeAreaInsets>,
    config: AccessoryConfig,
) -> Derived<AccessoryOffsets> {
    derived(move || compute_offsets(keyboard.get(), panel.get(), insets.get(), &config))
}

// =============================================================================
// Tests
// =============================================================================
