//! Keyboard Geometry Tracker - Keyboard height/visibility from host events
//!
//! Subscribes to the platform keyboard channel on mount and keeps a
//! [`KeyboardState`] signal in sync with it. Releases every listener when
//! dropped or unmounted.
//!
//! # Behavior
//!
//! - Show / frame-change with an unchanged height is suppressed
//! - A new height is committed with `visible = height > 0`
//! - Events with duration and easing also commit a [`LayoutTransition`],
//!   which an effect hands to the host [`LayoutAnimator`]
//! - Hide (split channel only) resets to `{0, false}`
//! - Window dimension changes refresh the window signal, never the height
//!
//! # Example
//!
//! ```ignore
//! use keyboard_accessory::state::keyboard::{KeyboardChannel, KeyboardGeometryTracker};
//!
//! let host = Host::new(Platform::Ios, WindowSize::new(390.0, 844.0));
//! let tracker = KeyboardGeometryTracker::mount(&host, KeyboardChannel::WillChangeFrame, animator);
//!
//! host.keyboard_will_change_frame().emit(&KeyboardEvent::new(300.0));
//! assert!(tracker.state().visible);
//!
//! tracker.unmount();
//! ```

use std::cell::Cell;
use std::rc::Rc;

use spark_signals::{effect, signal, Signal};

use super::animate::{LayoutAnimator, LayoutTransition};
use crate::host::{Host, Subscription};
use crate::types::{DimensionsEvent, KeyboardEvent, KeyboardState, Platform, WindowSize};

// =============================================================================
// TYPES
// =============================================================================

/// Which host keyboard channel the tracker listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardChannel {
    /// Single "will change frame" channel covering show, resize and hide.
    WillChangeFrame,
    /// Separate "did show" / "did hide" channels.
    DidShowHide,
}

impl KeyboardChannel {
    /// The split channel is opt-in on Android, where it is noisy by default.
    pub fn select(platform: Platform, use_listeners_on_android: bool) -> Self {
        if platform == Platform::Android && use_listeners_on_android {
            Self::DidShowHide
        } else {
            Self::WillChangeFrame
        }
    }
}

/// Keyboard input after channel demultiplexing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyboardInput<'a> {
    Show(&'a KeyboardEvent),
    Hide,
}

/// A committed keyboard change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyboardUpdate {
    pub state: KeyboardState,
    pub transition: Option<LayoutTransition>,
}

/// Pure transition function. Returns `None` when `input` would not change
/// `current` (duplicate height, or hide while already hidden).
pub fn next_keyboard_state(
    current: KeyboardState,
    input: KeyboardInput<'_>,
    sequence: u64,
) -> Option<KeyboardUpdate> {
    match input {
        KeyboardInput::Show(event) => {
            let state = KeyboardState::shown(event.height());
            if state.height == current.height {
                return None;
            }
            Some(KeyboardUpdate {
                state,
                transition: LayoutTransition::from_event(event, sequence),
            })
        }
        KeyboardInput::Hide => {
            if current == KeyboardState::hidden() {
                return None;
            }
            Some(KeyboardUpdate { state: KeyboardState::hidden(), transition: None })
        }
    }
}

// =============================================================================
// TRACKER
// =============================================================================

/// Signals written by the event handlers. Handlers read the latest
/// committed value from here at event time, never a captured copy.
#[derive(Clone)]
struct TrackerSignals {
    state: Signal<KeyboardState>,
    window: Signal<WindowSize>,
    transition: Signal<Option<LayoutTransition>>,
    sequence: Rc<Cell<u64>>,
}

impl TrackerSignals {
    fn apply(&self, input: KeyboardInput<'_>) {
        let current = self.state.get();
        let sequence = self.sequence.get();

        let Some(update) = next_keyboard_state(current, input, sequence) else {
            tracing::trace!(height = current.height, "keyboard update suppressed");
            return;
        };

        self.state.set(update.state);
        if let Some(transition) = update.transition {
            self.sequence.set(sequence + 1);
            self.transition.set(Some(transition));
        }
    }

    fn on_show(&self, event: &KeyboardEvent) {
        tracing::debug!(height = event.height(), duration = ?event.duration, "keyboard show");
        self.apply(KeyboardInput::Show(event));
    }

    fn on_hide(&self) {
        tracing::debug!("keyboard hide");
        self.apply(KeyboardInput::Hide);
    }

    fn on_dimensions(&self, event: &DimensionsEvent) {
        tracing::debug!(
            width = event.window.width,
            height = event.window.height,
            "window dimensions change"
        );
        self.window.set(event.window);
    }
}

/// Keyboard geometry leaf. Owns its host subscriptions and the animation effect.
pub struct KeyboardGeometryTracker {
    signals: TrackerSignals,
    channel: KeyboardChannel,
    subscriptions: Vec<Subscription>,
    stop_animation: Option<Box<dyn FnOnce()>>,
}

impl KeyboardGeometryTracker {
    /// Subscribe to `channel` and the dimensions channel of `host`.
    pub fn mount(host: &Host, channel: KeyboardChannel, animator: Rc<dyn LayoutAnimator>) -> Self {
        let signals = TrackerSignals {
            state: signal(KeyboardState::hidden()),
            window: signal(host.initial_window()),
            transition: signal(None),
            sequence: Rc::new(Cell::new(0)),
        };

        let mut subscriptions = Vec::with_capacity(3);

        let s = signals.clone();
        subscriptions.push(host.dimensions_change().add_listener(move |e| s.on_dimensions(e)));

        match channel {
            KeyboardChannel::WillChangeFrame => {
                let s = signals.clone();
                subscriptions
                    .push(host.keyboard_will_change_frame().add_listener(move |e| s.on_show(e)));
            }
            KeyboardChannel::DidShowHide => {
                let s = signals.clone();
                subscriptions.push(host.keyboard_did_hide().add_listener(move |_| s.on_hide()));
                let s = signals.clone();
                subscriptions.push(host.keyboard_did_show().add_listener(move |e| s.on_show(e)));
            }
        }

        // Animation runs as an observer of committed transitions, not inside the handler.
        let transition = signals.transition.clone();
        let stop = effect(move || {
            if let Some(t) = transition.get() {
                tracing::trace!(duration_ms = t.duration_ms, animation = ?t.animation, "configure layout animation");
                animator.configure_next(&t);
            }
        });

        tracing::debug!(?channel, "keyboard tracker mounted");

        Self {
            signals,
            channel,
            subscriptions,
            stop_animation: Some(Box::new(stop)),
        }
    }

    pub fn state(&self) -> KeyboardState {
        self.signals.state.get()
    }

    /// Signal for reactive reads (deriveds, effects).
    pub fn state_signal(&self) -> Signal<KeyboardState> {
        self.signals.state.clone()
    }

    pub fn window(&self) -> WindowSize {
        self.signals.window.get()
    }

    pub fn window_signal(&self) -> Signal<WindowSize> {
        self.signals.window.clone()
    }

    /// Most recent animated transition, if any.
    pub fn last_transition(&self) -> Option<LayoutTransition> {
        self.signals.transition.get()
    }

    pub fn channel(&self) -> KeyboardChannel {
        self.channel
    }

    pub fn is_mounted(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    /// Release all listeners and stop the animation effect.
    /// The last committed state stays readable.
    pub fn unmount(&mut self) {
        if self.is_mounted() {
            tracing::debug!("keyboard tracker unmounted");
        }
        self.subscriptions.clear();
        if let Some(stop) = self.stop_animation.take() {
            stop();
        }
    }
}

impl Drop for KeyboardGeometryTracker {
    fn drop(&mut self) {
        self.unmount();
    }
}

// =============================================================================
// TESTS
// =============================================================================
