//! Core Types - Value types shared by every module
//!
//! Everything here is plain data: leaf state, host event payloads and
//! the environment snapshots (window, safe area, platform) the coordinator
//! reads. None of these types own subscriptions.

use std::str::FromStr;

use crate::error::EasingParseError;

// =============================================================================
// PLATFORM
// =============================================================================

/// Host platform. Selects the keyboard event channel and the native
/// keyboard-avoidance behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    #[default]
    Ios,
    Android,
}

// =============================================================================
// LEAF STATE
// =============================================================================

/// Keyboard geometry as seen by the accessory panel.
///
/// Invariant: `visible == (height > 0.0)`. Construct through
/// [`KeyboardState::shown`] / [`KeyboardState::hidden`] to keep it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KeyboardState {
    pub height: f32,
    pub visible: bool,
}

impl KeyboardState {
    /// Keyboard fully dismissed.
    pub const fn hidden() -> Self {
        Self { height: 0.0, visible: false }
    }

    /// Keyboard occupying `height` points. Non-positive heights collapse to hidden.
    pub fn shown(height: f32) -> Self {
        if height > 0.0 {
            Self { height, visible: true }
        } else {
            Self::hidden()
        }
    }
}

/// Last measured size of the accessory panel content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelSize {
    pub width: f32,
    pub height: f32,
}

impl PanelSize {
    pub const ZERO: Self = Self { width: 0.0, height: 0.0 };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Drag gesture state for the scrollable content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    /// True between gesture grant and release/terminate.
    pub active: bool,
    /// Vertical offset from the current gesture's start point.
    pub position_y: f32,
}

/// Safe-area insets supplied by the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SafeAreaInsets {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl SafeAreaInsets {
    pub const ZERO: Self = Self { top: 0.0, bottom: 0.0, left: 0.0, right: 0.0 };

    pub fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self { top, bottom, left, right }
    }
}

/// Window dimensions reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowSize {
    pub width: f32,
    pub height: f32,
}

impl WindowSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

// =============================================================================
// HOST EVENTS
// =============================================================================

/// Keyboard frame at the end of the transition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KeyboardFrame {
    pub height: f32,
}

/// Animation curve name reported with a keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardEasing {
    EaseIn,
    EaseInEaseOut,
    EaseOut,
    Linear,
    Keyboard,
}

impl FromStr for KeyboardEasing {
    type Err = EasingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easeIn" => Ok(Self::EaseIn),
            "easeInEaseOut" => Ok(Self::EaseInEaseOut),
            "easeOut" => Ok(Self::EaseOut),
            "linear" => Ok(Self::Linear),
            "keyboard" => Ok(Self::Keyboard),
            other => Err(EasingParseError(other.to_string())),
        }
    }
}

/// Show / frame-change notification from the host keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KeyboardEvent {
    pub end_coordinates: KeyboardFrame,
    /// Transition duration in milliseconds.
    pub duration: Option<f32>,
    pub easing: Option<KeyboardEasing>,
}

impl KeyboardEvent {
    /// Event without animation metadata.
    pub fn new(height: f32) -> Self {
        Self {
            end_coordinates: KeyboardFrame { height },
            duration: None,
            easing: None,
        }
    }

    /// Event carrying the transition's duration and curve.
    pub fn animated(height: f32, duration: f32, easing: KeyboardEasing) -> Self {
        Self {
            duration: Some(duration),
            easing: Some(easing),
            ..Self::new(height)
        }
    }

    /// Parse the easing from the platform's curve name. Unknown names are
    /// dropped, so the event applies without animation.
    pub fn with_easing_name(mut self, name: &str) -> Self {
        self.easing = match name.parse() {
            Ok(easing) => Some(easing),
            Err(err) => {
                tracing::warn!(%err, "ignoring keyboard easing");
                None
            }
        };
        self
    }

    pub fn height(&self) -> f32 {
        self.end_coordinates.height
    }
}

/// Hide notification. Carries nothing but its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardHideEvent;

/// Window dimension change (rotation, split screen).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DimensionsEvent {
    pub window: WindowSize,
}

/// Layout completion for a measured view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutEvent {
    pub width: f32,
    pub height: f32,
}

/// Pointer position carried by gesture callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub page_x: f32,
    pub page_y: f32,
    /// Number of active touches. Anything but one is not a vertical drag.
    pub touches: u8,
}

impl Pointer {
    /// Single-touch pointer at `(x, y)`.
    pub fn at(page_x: f32, page_y: f32) -> Self {
        Self { page_x, page_y, touches: 1 }
    }
}

/// Gesture callbacks delivered by the host responder system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Grant(Pointer),
    Move(Pointer),
    Release(Pointer),
    Terminate(Pointer),
}

// =============================================================================
// TESTS
// =============================================================================
