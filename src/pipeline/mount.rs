//! Mount API - Accessory view coordinator lifecycle.
//!
//! Mounting wires the three leaves to the host:
//!
//! - the keyboard tracker subscribes to the selected keyboard channel
//! - the drag responder attaches to the gestures forwarded by the scrollable
//! - the size observer observes the view's panel layout channel
//!
//! The coordinator never writes leaf state. It reads the leaves and derives
//! the panel translation, content padding and margins from them. Its layout
//! pass reports measurements the way a host would, by emitting on the panel
//! layout channel.
//!
//! # Example
//!
//! ```ignore
//! use keyboard_accessory::pipeline::AccessoryView;
//!
//! let view = AccessoryView::mount(&host, &safe_area, config, Rc::new(NoopAnimator))?;
//!
//! // Each frame
//! let frames = view.layout(composer_height)?;
//!
//! // Clean up
//! view.unmount();
//! ```

use std::rc::Rc;

use spark_signals::Derived;

use super::avoidance::AvoidanceBehavior;
use super::offsets::{compute_offsets, create_offsets_derived, AccessoryOffsets};
use crate::config::AccessoryConfig;
use crate::error::{ConfigError, LayoutError};
use crate::host::{EventChannel, Host, Subscription};
use crate::layout::{compute_accessory_layout, AccessoryFrames};
use crate::state::{
    DragResponder, KeyboardChannel, KeyboardGeometryTracker, LayoutAnimator, SafeAreaProvider,
    SizeObserver,
};
use crate::types::{DragState, KeyboardState, LayoutEvent, PanelSize, Platform, SafeAreaInsets};

// =============================================================================
// Accessory View
// =============================================================================

/// Mounted accessory view. Dropping it releases every host subscription.
pub struct AccessoryView {
    config: AccessoryConfig,
    platform: Platform,
    keyboard: KeyboardGeometryTracker,
    size: SizeObserver,
    drag: DragResponder,
    safe_area: SafeAreaProvider,
    panel_layout: EventChannel<LayoutEvent>,
    gestures: Option<Subscription>,
    measurements: Option<Subscription>,
}

impl AccessoryView {
    /// Validate `config` and mount the view on `host`.
    ///
    /// The keyboard channel follows the host platform and
    /// `config.use_listeners_on_android`.
    pub fn mount(
        host: &Host,
        safe_area: &SafeAreaProvider,
        config: AccessoryConfig,
        animator: Rc<dyn LayoutAnimator>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let platform = host.platform();
        let channel = KeyboardChannel::select(platform, config.use_listeners_on_android);
        let keyboard = KeyboardGeometryTracker::mount(host, channel, animator);
        let drag = DragResponder::new();
        let gestures = drag.attach(host.gestures());
        let size = SizeObserver::new();
        let panel_layout = EventChannel::new("panelLayout");
        let measurements = size.observe(&panel_layout);

        tracing::debug!(?platform, ?channel, "accessory view mounted");

        Ok(Self {
            config,
            platform,
            keyboard,
            size,
            drag,
            safe_area: safe_area.clone(),
            panel_layout,
            gestures: Some(gestures),
            measurements: Some(measurements),
        })
    }

    /// Offsets for the current inputs.
    pub fn offsets(&self) -> AccessoryOffsets {
        compute_offsets(self.keyboard.state(), self.size.size(), self.safe_area.insets(), &self.config)
    }

    /// Reactive offsets. Re-runs whenever keyboard, panel size or insets change.
    pub fn offsets_derived(&self) -> Derived<AccessoryOffsets> {
        create_offsets_derived(
            self.keyboard.state_signal(),
            self.size.size_signal(),
            self.safe_area.insets_signal(),
            self.config,
        )
    }

    pub fn avoidance_behavior(&self) -> AvoidanceBehavior {
        AvoidanceBehavior::for_platform(self.platform)
    }

    /// Run one layout pass and emit the panel content's measured size on
    /// the panel layout channel, acting as the host's layout callback.
    ///
    /// The first pass after mount sees a zero panel size; the next pass
    /// picks up the measurement.
    pub fn layout(&self, panel_content_height: f32) -> Result<AccessoryFrames, LayoutError> {
        let window = self.keyboard.window();
        let avoidance = self.avoidance_behavior().padding(self.keyboard.state(), window, window.height);

        let frames = compute_accessory_layout(window, &self.offsets(), avoidance, panel_content_height)?;

        self.panel_layout.emit(&LayoutEvent {
            width: frames.panel_content.width,
            height: frames.panel_content.height,
        });
        Ok(frames)
    }

    /// Layout callback for hosts that measure the panel natively.
    pub fn on_panel_layout(&self, event: &LayoutEvent) {
        self.panel_layout.emit(event);
    }

    /// Channel the size observer listens on for panel measurements.
    pub fn panel_layout_channel(&self) -> &EventChannel<LayoutEvent> {
        &self.panel_layout
    }

    pub fn config(&self) -> &AccessoryConfig {
        &self.config
    }

    pub fn keyboard_state(&self) -> KeyboardState {
        self.keyboard.state()
    }

    pub fn panel_size(&self) -> PanelSize {
        self.size.size()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    pub fn safe_area_insets(&self) -> SafeAreaInsets {
        self.safe_area.insets()
    }

    pub fn keyboard_tracker(&self) -> &KeyboardGeometryTracker {
        &self.keyboard
    }

    /// Responder the scrollable content drives; also fed from the host gesture channel.
    pub fn drag_responder(&self) -> &DragResponder {
        &self.drag
    }

    pub fn is_mounted(&self) -> bool {
        self.keyboard.is_mounted()
    }

    /// Release all host subscriptions. Leaf state stays readable; no
    /// host event reaches it afterwards.
    pub fn unmount(&mut self) {
        self.keyboard.unmount();
        if let Some(measurements) = self.measurements.take() {
            measurements.remove();
        }
        if let Some(gestures) = self.gestures.take() {
            gestures.remove();
            tracing::debug!("accessory view unmounted");
        }
    }
}

impl Drop for AccessoryView {
    fn drop(&mut self) {
        self.unmount();
    }
}

// =============================================================================
// Tests
// =============================================================================
