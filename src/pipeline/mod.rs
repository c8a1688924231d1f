//! Accessory Pipeline
//!
//! Connects the leaf signals to the render layer.
//!
//! # Pipeline Architecture
//!
//! ```text
//! keyboard / panel size / safe area → offsets derived → layout pass → frames
//! ```
//!
//! ## Data Flow
//!
//! 1. **Leaves** - keyboard tracker, size observer, drag responder own their state
//! 2. **offsets** - pure derivation of translation, content padding, margins
//! 3. **layout** - Taffy pass producing window-space frames, emitting panel measurements on the layout channel
//!
//! ## Key Design Principles
//!
//! - **Pure Deriveds**: offsets hold no state of their own
//! - **Read-only coordinator**: the view reads leaf state, never writes it
//! - **Scoped subscriptions**: unmount releases every host listener

pub mod avoidance;
pub mod mount;
pub mod offsets;

// Re-exports
pub use avoidance::{AvoidanceBehavior, KEYBOARD_VERTICAL_OFFSET};
pub use mount::AccessoryView;
pub use offsets::{
    compute_offsets, content_padding, create_offsets_derived, panel_margins, panel_translation,
    AccessoryOffsets, PanelMargins,
};
