//! # keyboard-accessory
//!
//! Keeps an accessory panel (a chat composer, a toolbar) glued to the top of
//! the on-screen keyboard.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! Three leaves each own one input signal and their host subscriptions.
//! The coordinator derives the panel's offsets from them and lays the view
//! out with Taffy:
//!
//! ```text
//! keyboard events ─→ KeyboardGeometryTracker ─┐
//! layout events   ─→ SizeObserver ────────────┼─→ offsets derived ─→ layout pass ─→ frames
//! safe area       ─→ SafeAreaProvider ────────┘
//! gestures        ─→ DragResponder ─→ scrollable content position
//! ```
//!
//! All handlers run on the host's UI thread and update state synchronously.
//!
//! ## Modules
//!
//! - [`types`] - Core value types and host event payloads
//! - [`host`] - Host event channels and scoped subscriptions
//! - [`state`] - Keyboard tracker, size observer, drag responder, safe area, animations
//! - [`pipeline`] - Offset derivation, keyboard avoidance, mounted view
//! - [`layout`] - Taffy layout bridge
//! - [`config`] - Component configuration

pub mod config;
pub mod error;
pub mod host;
pub mod layout;
pub mod pipeline;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::AccessoryConfig;
pub use error::{ConfigError, EasingParseError, LayoutError};

pub use host::{Channels, EventChannel, Host, Subscription};

pub use layout::{compute_accessory_layout, AccessoryFrames, Frame};

pub use pipeline::{
    compute_offsets, create_offsets_derived, AccessoryOffsets, AccessoryView, AvoidanceBehavior,
    PanelMargins,
};

pub use state::{
    AnimationType, DragResponder, KeyboardChannel, KeyboardGeometryTracker, LayoutAnimator,
    LayoutTransition, NoopAnimator, RecordingAnimator, SafeAreaProvider, SizeObserver,
    MIN_LAYOUT_ANIMATION_DURATION_MS,
};
