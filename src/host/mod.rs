//! Host Module - Event channels delivered by the host platform
//!
//! The host owns one [`EventChannel`] per event source and pushes events
//! into them from its own dispatcher (keyboard notifications, window
//! changes, gestures forwarded by the scrollable content). Components
//! subscribe on mount and hold the returned [`Subscription`]s.
//!
//! # Channels
//!
//! - `keyboard_will_change_frame` - unified show/change channel
//! - `keyboard_did_show` / `keyboard_did_hide` - split channel (Android opt-in)
//! - `dimensions_change` - window size changes
//! - `gestures` - pointer callbacks from the scrollable content

mod channel;

pub use channel::*;

use crate::types::{
    DimensionsEvent, GestureEvent, KeyboardEvent, KeyboardHideEvent, Platform, WindowSize,
};

bitflags::bitflags! {
    /// Set of host channels, used to report which ones have live listeners.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Channels: u8 {
        const KEYBOARD_WILL_CHANGE_FRAME = 1 << 0;
        const KEYBOARD_DID_SHOW = 1 << 1;
        const KEYBOARD_DID_HIDE = 1 << 2;
        const DIMENSIONS_CHANGE = 1 << 3;
        const GESTURES = 1 << 4;
    }
}

/// Host environment: platform, initial window size and event channels.
///
/// Cloning shares the channels.
#[derive(Clone)]
pub struct Host {
    platform: Platform,
    window: WindowSize,
    keyboard_will_change_frame: EventChannel<KeyboardEvent>,
    keyboard_did_show: EventChannel<KeyboardEvent>,
    keyboard_did_hide: EventChannel<KeyboardHideEvent>,
    dimensions_change: EventChannel<DimensionsEvent>,
    gestures: EventChannel<GestureEvent>,
}

impl Host {
    pub fn new(platform: Platform, window: WindowSize) -> Self {
        Self {
            platform,
            window,
            keyboard_will_change_frame: EventChannel::new("keyboardWillChangeFrame"),
            keyboard_did_show: EventChannel::new("keyboardDidShow"),
            keyboard_did_hide: EventChannel::new("keyboardDidHide"),
            dimensions_change: EventChannel::new("dimensionsChange"),
            gestures: EventChannel::new("gestures"),
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Window size at host creation.
    pub fn initial_window(&self) -> WindowSize {
        self.window
    }

    pub fn keyboard_will_change_frame(&self) -> &EventChannel<KeyboardEvent> {
        &self.keyboard_will_change_frame
    }

    pub fn keyboard_did_show(&self) -> &EventChannel<KeyboardEvent> {
        &self.keyboard_did_show
    }

    pub fn keyboard_did_hide(&self) -> &EventChannel<KeyboardHideEvent> {
        &self.keyboard_did_hide
    }

    pub fn dimensions_change(&self) -> &EventChannel<DimensionsEvent> {
        &self.dimensions_change
    }

    pub fn gestures(&self) -> &EventChannel<GestureEvent> {
        &self.gestures
    }

    /// Channels that currently have at least one listener.
    pub fn active_channels(&self) -> Channels {
        let mut active = Channels::empty();
        active.set(
            Channels::KEYBOARD_WILL_CHANGE_FRAME,
            self.keyboard_will_change_frame.has_listeners(),
        );
        active.set(Channels::KEYBOARD_DID_SHOW, self.keyboard_did_show.has_listeners());
        active.set(Channels::KEYBOARD_DID_HIDE, self.keyboard_did_hide.has_listeners());
        active.set(Channels::DIMENSIONS_CHANGE, self.dimensions_change.has_listeners());
        active.set(Channels::GESTURES, self.gestures.has_listeners());
        active
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_host_has_no_listeners() {
        let host = Host::new(Platform::Ios, WindowSize::new(390.0, 844.0));
        assert!(host.active_channels().is_empty());
        assert_eq!(host.initial_window(), WindowSize::new(390.0, 844.0));
    }

    #[test]
    fn test_active_channels_tracks_subscriptions() {
        let host = Host::new(Platform::Android, WindowSize::default());
        let show = host.keyboard_did_show().add_listener(|_| {});
        let _dims = host.dimensions_change().add_listener(|_| {});

        assert_eq!(
            host.active_channels(),
            Channels::KEYBOARD_DID_SHOW | Channels::DIMENSIONS_CHANGE
        );

        show.remove();
        assert_eq!(host.active_channels(), Channels::DIMENSIONS_CHANGE);
    }

    #[test]
    fn test_clone_shares_channels() {
        let host = Host::new(Platform::Ios, WindowSize::default());
        let other = host.clone();
        let _sub = other.gestures().add_listener(|_| {});
        assert!(host.active_channels().contains(Channels::GESTURES));
    }
}
