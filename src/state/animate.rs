//! Layout Transition Animation - Keyboard-synchronized layout animations
//!
//! A keyboard event that carries a duration and an easing curve asks the
//! host to animate the next layout pass with the same timing, so the panel
//! moves in step with the keyboard. This module turns such an event into a
//! [`LayoutTransition`] and defines the [`LayoutAnimator`] seam the host
//! implements.
//!
//! # Pattern
//!
//! - The keyboard tracker commits the transition into a signal
//! - An effect observes the signal and calls `configure_next` on the animator
//! - Events without duration or easing produce no transition (instant apply)
//!
//! # Example
//!
//! ```ignore
//! use keyboard_accessory::state::animate::{LayoutTransition, RecordingAnimator};
//!
//! let event = KeyboardEvent::animated(300.0, 250.0, KeyboardEasing::Keyboard);
//! let transition = LayoutTransition::from_event(&event, 0);
//! assert!(transition.is_some());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::types::{KeyboardEasing, KeyboardEvent};

/// Shortest duration the host layout animator accepts. Shorter values
/// distort the animation, so requested durations are floored to this.
pub const MIN_LAYOUT_ANIMATION_DURATION_MS: f32 = 10.0;

// =============================================================================
// TYPES
// =============================================================================

/// Interpolation applied by the host's layout animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationType {
    Linear,
    EaseInEaseOut,
    EaseIn,
    EaseOut,
    Keyboard,
}

impl From<KeyboardEasing> for AnimationType {
    fn from(easing: KeyboardEasing) -> Self {
        match easing {
            KeyboardEasing::EaseIn => Self::EaseIn,
            KeyboardEasing::EaseInEaseOut => Self::EaseInEaseOut,
            KeyboardEasing::EaseOut => Self::EaseOut,
            KeyboardEasing::Linear => Self::Linear,
            KeyboardEasing::Keyboard => Self::Keyboard,
        }
    }
}

/// Configuration for the next layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutTransition {
    /// Duration in milliseconds, already floored.
    pub duration_ms: f32,
    pub animation: AnimationType,
    /// Monotonic per-tracker counter; two identical transitions in a row
    /// are still distinct commits.
    pub sequence: u64,
}

impl LayoutTransition {
    /// Build the transition for `event`, or `None` when the event lacks a
    /// positive duration or an easing curve.
    pub fn from_event(event: &KeyboardEvent, sequence: u64) -> Option<Self> {
        let duration = event.duration.filter(|d| d.is_finite() && *d > 0.0)?;
        let easing = event.easing?;

        Some(Self {
            duration_ms: duration.max(MIN_LAYOUT_ANIMATION_DURATION_MS),
            animation: easing.into(),
            sequence,
        })
    }
}

// =============================================================================
// ANIMATOR
// =============================================================================

/// Host layout animation backend.
pub trait LayoutAnimator {
    /// Animate the next layout pass with `transition`.
    fn configure_next(&self, transition: &LayoutTransition);
}

/// Animator that drops every request. For hosts without layout animations.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnimator;

impl LayoutAnimator for NoopAnimator {
    fn configure_next(&self, _transition: &LayoutTransition) {}
}

/// Animator that records every request. Hosts can drain it once per frame.
#[derive(Debug, Clone, Default)]
pub struct RecordingAnimator {
    configured: Rc<RefCell<Vec<LayoutTransition>>>,
}

impl RecordingAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// All transitions configured so far.
    pub fn configured(&self) -> Vec<LayoutTransition> {
        self.configured.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.configured.borrow().len()
    }

    /// Take the pending transitions, leaving the log empty.
    pub fn drain(&self) -> Vec<LayoutTransition> {
        std::mem::take(&mut *self.configured.borrow_mut())
    }
}

impl LayoutAnimator for RecordingAnimator {
    fn configure_next(&self, transition: &LayoutTransition) {
        self.configured.borrow_mut().push(*transition);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_event_requires_duration_and_easing() {
        assert!(LayoutTransition::from_event(&KeyboardEvent::new(300.0), 0).is_none());

        let mut only_duration = KeyboardEvent::new(300.0);
        only_duration.duration = Some(250.0);
        assert!(LayoutTransition::from_event(&only_duration, 0).is_none());

        let mut only_easing = KeyboardEvent::new(300.0);
        only_easing.easing = Some(KeyboardEasing::Keyboard);
        assert!(LayoutTransition::from_event(&only_easing, 0).is_none());
    }

    #[test]
    fn test_zero_duration_is_not_animated() {
        let event = KeyboardEvent::animated(300.0, 0.0, KeyboardEasing::Linear);
        assert!(LayoutTransition::from_event(&event, 0).is_none());
    }

    #[test]
    fn test_duration_floored_at_minimum() {
        let event = KeyboardEvent::animated(300.0, 4.0, KeyboardEasing::EaseOut);
        let transition = LayoutTransition::from_event(&event, 3).unwrap();
        assert_eq!(transition.duration_ms, MIN_LAYOUT_ANIMATION_DURATION_MS);
        assert_eq!(transition.animation, AnimationType::EaseOut);
        assert_eq!(transition.sequence, 3);
    }

    #[test]
    fn test_duration_above_minimum_kept() {
        let event = KeyboardEvent::animated(300.0, 250.0, KeyboardEasing::Keyboard);
        let transition = LayoutTransition::from_event(&event, 0).unwrap();
        assert_eq!(transition.duration_ms, 250.0);
        assert_eq!(transition.animation, AnimationType::Keyboard);
    }

    #[test]
    fn test_recording_animator_drain() {
        let animator = RecordingAnimator::new();
        let event = KeyboardEvent::animated(300.0, 250.0, KeyboardEasing::Linear);
        let transition = LayoutTransition::from_event(&event, 0).unwrap();

        animator.configure_next(&transition);
        assert_eq!(animator.count(), 1);
        assert_eq!(animator.drain(), vec![transition]);
        assert_eq!(animator.count(), 0);
    }
}
