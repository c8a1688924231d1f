//! Taffy Bridge - Accessory view layout via Taffy
//!
//! Builds a three-node tree for one frame:
//!
//! ```text
//! root (window size, column, bottom padding = keyboard avoidance)
//! ├── scrollable (flex-grow 1, bottom padding = content padding)
//! └── panel (absolute, pinned to left/right/bottom)
//!     └── panel content (intrinsic height, safe-area margins)
//! ```
//!
//! The panel translation is a render transform, so it is applied after
//! layout and never feeds back into the flex computation.

use taffy::{
    AvailableSpace, Dimension, FlexDirection, LengthPercentage, LengthPercentageAuto, NodeId,
    Position, Rect, Size, Style, TaffyTree,
};

use super::types::{AccessoryFrames, Frame};
use crate::error::LayoutError;
use crate::pipeline::offsets::{AccessoryOffsets, PanelMargins};
use crate::types::WindowSize;

// =============================================================================
// STYLE BUILDING
// =============================================================================

fn length(value: f32) -> LengthPercentage {
    LengthPercentage::Length(value.max(0.0))
}

fn length_auto(value: f32) -> LengthPercentageAuto {
    LengthPercentageAuto::Length(value)
}

fn bottom_padding(value: f32) -> Rect<LengthPercentage> {
    Rect { left: length(0.0), right: length(0.0), top: length(0.0), bottom: length(value) }
}

fn root_style(window: WindowSize, avoidance_padding: f32) -> Style {
    Style {
        flex_direction: FlexDirection::Column,
        size: Size {
            width: Dimension::Length(window.width),
            height: Dimension::Length(window.height),
        },
        padding: bottom_padding(avoidance_padding),
        ..Default::default()
    }
}

fn scrollable_style(content_padding_bottom: f32) -> Style {
    Style {
        flex_grow: 1.0,
        flex_shrink: 1.0,
        padding: bottom_padding(content_padding_bottom),
        ..Default::default()
    }
}

fn panel_style() -> Style {
    Style {
        position: Position::Absolute,
        flex_direction: FlexDirection::Column,
        inset: Rect {
            left: length_auto(0.0),
            right: length_auto(0.0),
            top: LengthPercentageAuto::Auto,
            bottom: length_auto(0.0),
        },
        ..Default::default()
    }
}

fn panel_content_style(height: f32, margins: PanelMargins) -> Style {
    Style {
        size: Size { width: Dimension::Auto, height: Dimension::Length(height.max(0.0)) },
        margin: Rect {
            left: length_auto(margins.left),
            right: length_auto(margins.right),
            top: length_auto(0.0),
            bottom: length_auto(margins.bottom),
        },
        ..Default::default()
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

fn frame(tree: &TaffyTree, node: NodeId, origin_x: f32, origin_y: f32) -> Result<Frame, LayoutError> {
    let layout = tree.layout(node)?;
    Ok(Frame {
        x: origin_x + layout.location.x,
        y: origin_y + layout.location.y,
        width: layout.size.width,
        height: layout.size.height,
    })
}

/// Compute frames for the accessory view inside `window`.
///
/// # Arguments
///
/// * `window` - Window size
/// * `offsets` - Derived offsets for this frame
/// * `avoidance_padding` - Root bottom padding from the native avoidance layer
/// * `panel_content_height` - Intrinsic height of the panel's children
pub fn compute_accessory_layout(
    window: WindowSize,
    offsets: &AccessoryOffsets,
    avoidance_padding: f32,
    panel_content_height: f32,
) -> Result<AccessoryFrames, LayoutError> {
    let mut tree: TaffyTree<()> = TaffyTree::new();

    let scrollable_padding = offsets.content_padding_bottom.max(0.0);
    let scrollable = tree.new_leaf(scrollable_style(scrollable_padding))?;
    let content = tree.new_leaf(panel_content_style(panel_content_height, offsets.panel_margins))?;
    let panel = tree.new_with_children(panel_style(), &[content])?;
    let root = tree.new_with_children(root_style(window, avoidance_padding), &[scrollable, panel])?;

    let available = Size {
        width: AvailableSpace::Definite(window.width),
        height: AvailableSpace::Definite(window.height),
    };
    tree.compute_layout(root, available)?;

    let root_frame = frame(&tree, root, 0.0, 0.0)?;
    let scrollable_frame = frame(&tree, scrollable, root_frame.x, root_frame.y)?;
    let panel_frame = frame(&tree, panel, root_frame.x, root_frame.y + offsets.translate_y)?;
    let content_frame = frame(&tree, content, panel_frame.x, panel_frame.y)?;

    Ok(AccessoryFrames {
        root: root_frame,
        scrollable: scrollable_frame,
        scrollable_padding_bottom: scrollable_padding,
        panel: panel_frame,
        panel_content: content_frame,
        avoidance_padding,
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: WindowSize = WindowSize { width: 390.0, height: 844.0 };

    #[test]
    fn test_closed_keyboard_panel_rests_above_inset() {
        let offsets = AccessoryOffsets {
            translate_y: 0.0,
            content_padding_bottom: 100.0,
            panel_margins: PanelMargins { bottom: 34.0, left: 0.0, right: 0.0 },
        };

        let frames = compute_accessory_layout(WINDOW, &offsets, 0.0, 80.0).unwrap();

        assert_eq!(frames.root, Frame { x: 0.0, y: 0.0, width: 390.0, height: 844.0 });
        assert_eq!(frames.scrollable.height, 844.0);
        assert_eq!(frames.panel, Frame { x: 0.0, y: 730.0, width: 390.0, height: 114.0 });
        assert_eq!(frames.panel_content, Frame { x: 0.0, y: 730.0, width: 390.0, height: 80.0 });
    }

    #[test]
    fn test_open_keyboard_panel_translated_above_keyboard() {
        let offsets = AccessoryOffsets {
            translate_y: -310.0,
            content_padding_bottom: 66.0,
            panel_margins: PanelMargins { bottom: 0.0, left: 0.0, right: 0.0 },
        };

        let frames = compute_accessory_layout(WINDOW, &offsets, 300.0, 80.0).unwrap();

        // Keyboard top at 544, gap of 10
        assert_eq!(frames.panel.y, 454.0);
        assert_eq!(frames.panel.bottom(), 534.0);
        assert_eq!(frames.scrollable.height, 544.0);
        assert_eq!(frames.avoidance_padding, 300.0);
    }

    #[test]
    fn test_negative_content_padding_reported_as_applied() {
        // Keyboard open before the panel is measured: 0 - 34
        let offsets = AccessoryOffsets {
            translate_y: -300.0,
            content_padding_bottom: -34.0,
            panel_margins: PanelMargins { bottom: 0.0, left: 0.0, right: 0.0 },
        };

        let frames = compute_accessory_layout(WINDOW, &offsets, 300.0, 0.0).unwrap();

        assert_eq!(frames.scrollable.height, 544.0);
        assert_eq!(frames.scrollable_padding_bottom, 0.0);
    }

    #[test]
    fn test_side_margins_inset_content() {
        let offsets = AccessoryOffsets {
            translate_y: 0.0,
            content_padding_bottom: 0.0,
            panel_margins: PanelMargins { bottom: 21.0, left: 44.0, right: 44.0 },
        };

        let frames = compute_accessory_layout(WindowSize::new(844.0, 390.0), &offsets, 0.0, 60.0).unwrap();

        assert_eq!(frames.panel.width, 844.0);
        assert_eq!(frames.panel_content.x, 44.0);
        assert_eq!(frames.panel_content.width, 756.0);
    }
}
