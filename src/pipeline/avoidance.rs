//! Native keyboard avoidance layered under the explicit translation.
//!
//! iOS pads the root by the keyboard overlap, which absorbs the first
//! frame before the translation lands. Android relies on the window
//! resize and needs nothing.

use crate::types::{KeyboardState, Platform, WindowSize};

/// Vertical offset between the root frame and the window bottom the
/// avoidance layer accounts for.
pub const KEYBOARD_VERTICAL_OFFSET: f32 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvoidanceBehavior {
    /// Bottom padding equal to the keyboard overlap.
    Padding,
    Disabled,
}

impl AvoidanceBehavior {
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Ios => Self::Padding,
            Platform::Android => Self::Disabled,
        }
    }

    /// Padding for a root frame whose bottom edge sits at `frame_bottom`
    /// in window coordinates.
    pub fn padding(self, keyboard: KeyboardState, window: WindowSize, frame_bottom: f32) -> f32 {
        match self {
            Self::Disabled => 0.0,
            Self::Padding if !keyboard.visible => 0.0,
            Self::Padding => {
                let keyboard_top = window.height - keyboard.height;
                (frame_bottom - keyboard_top - KEYBOARD_VERTICAL_OFFSET).max(0.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: WindowSize = WindowSize { width: 390.0, height: 844.0 };

    #[test]
    fn test_behavior_per_platform() {
        assert_eq!(AvoidanceBehavior::for_platform(Platform::Ios), AvoidanceBehavior::Padding);
        assert_eq!(AvoidanceBehavior::for_platform(Platform::Android), AvoidanceBehavior::Disabled);
    }

    #[test]
    fn test_padding_full_height_root() {
        let padding = AvoidanceBehavior::Padding.padding(KeyboardState::shown(300.0), WINDOW, 844.0);
        assert_eq!(padding, 300.0);
    }

    #[test]
    fn test_padding_root_above_keyboard() {
        let padding = AvoidanceBehavior::Padding.padding(KeyboardState::shown(300.0), WINDOW, 500.0);
        assert_eq!(padding, 0.0);
    }

    #[test]
    fn test_padding_hidden_keyboard() {
        let padding = AvoidanceBehavior::Padding.padding(KeyboardState::hidden(), WINDOW, 844.0);
        assert_eq!(padding, 0.0);
    }

    #[test]
    fn test_disabled_is_zero() {
        let padding = AvoidanceBehavior::Disabled.padding(KeyboardState::shown(300.0), WINDOW, 844.0);
        assert_eq!(padding, 0.0);
    }
}
