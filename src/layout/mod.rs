//! Layout Module
//!
//! Frame computation for the accessory view using Taffy.
//!
//! # Architecture
//!
//! The bridge builds a small Taffy tree per pass (root, scrollable content,
//! absolutely positioned panel, panel content), applies the derived paddings
//! and margins as styles, and returns window-space frames. The panel
//! translation is applied after layout.
//!
//! # Example
//!
//! ```ignore
//! use keyboard_accessory::layout::compute_accessory_layout;
//!
//! let frames = compute_accessory_layout(window, &view.offsets(), 0.0, 80.0)?;
//! ```

mod taffy_bridge;
mod types;

pub use taffy_bridge::compute_accessory_layout;
pub use types::*;
