//! Layout output types.

/// Rectangle in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Frames for one accessory view layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AccessoryFrames {
    pub root: Frame,
    pub scrollable: Frame,
    /// Padding applied inside `scrollable` so its last item clears the panel.
    /// Never negative; a negative derived padding is applied as 0.
    pub scrollable_padding_bottom: f32,
    /// Panel frame with the translation applied.
    pub panel: Frame,
    /// Measured content container; its size feeds the size observer.
    pub panel_content: Frame,
    /// Root bottom padding from the native avoidance layer.
    pub avoidance_padding: f32,
}
