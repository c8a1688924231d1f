//! State Module - Leaf state systems
//!
//! Each leaf owns its state and its host subscriptions:
//!
//! - **Keyboard** - Keyboard height/visibility from host keyboard events
//! - **Size** - Measured size of the accessory panel
//! - **Drag** - Single-pointer vertical drag on the scrollable content
//! - **Safe area** - Host-supplied insets (read-only for the coordinator)
//! - **Animate** - Keyboard-synchronized layout transitions

pub mod animate;
pub mod drag;
pub mod keyboard;
pub mod safe_area;
pub mod size;

pub use animate::{
    AnimationType, LayoutAnimator, LayoutTransition, NoopAnimator, RecordingAnimator,
    MIN_LAYOUT_ANIMATION_DURATION_MS,
};
pub use drag::{next_drag_state, should_become_responder, DragResponder};
pub use keyboard::{
    next_keyboard_state, KeyboardChannel, KeyboardGeometryTracker, KeyboardInput, KeyboardUpdate,
};
pub use safe_area::SafeAreaProvider;
pub use size::SizeObserver;
