//! Drag Responder - Single-pointer vertical drag
//!
//! Turns host gesture callbacks into a [`DragState`]: `active` between grant
//! and release, `position_y` the pointer's vertical offset from where the
//! gesture started. Release and termination end the drag identically and
//! leave `position_y` at its last value; snapping back is the caller's call.
//!
//! # Lifecycle
//!
//! ```text
//! idle --Grant--> dragging --Move*--> dragging --Release|Terminate--> idle
//! ```
//!
//! Moves outside a gesture and multi-touch pointers are ignored.

use std::cell::Cell;
use std::rc::Rc;

use spark_signals::{signal, Signal};

use crate::host::{EventChannel, Subscription};
use crate::types::{DragState, GestureEvent, Pointer};

/// Whether `pointer` may start a vertical drag.
pub fn should_become_responder(pointer: &Pointer) -> bool {
    pointer.touches == 1
}

/// Pure transition. `origin` is the page y of the current gesture's grant.
/// Returns the next state and origin, or `None` when the event is ignored.
pub fn next_drag_state(
    current: DragState,
    origin: Option<f32>,
    event: &GestureEvent,
) -> Option<(DragState, Option<f32>)> {
    match event {
        GestureEvent::Grant(pointer) => {
            if current.active || !should_become_responder(pointer) {
                return None;
            }
            Some((DragState { active: true, position_y: 0.0 }, Some(pointer.page_y)))
        }
        GestureEvent::Move(pointer) => {
            let start = origin.filter(|_| current.active)?;
            if !should_become_responder(pointer) {
                return None;
            }
            Some((DragState { active: true, position_y: pointer.page_y - start }, origin))
        }
        GestureEvent::Release(_) | GestureEvent::Terminate(_) => {
            if !current.active {
                return None;
            }
            Some((DragState { active: false, position_y: current.position_y }, None))
        }
    }
}

/// Drag leaf. Cloning shares state.
#[derive(Clone)]
pub struct DragResponder {
    state: Signal<DragState>,
    origin: Rc<Cell<Option<f32>>>,
}

impl DragResponder {
    pub fn new() -> Self {
        Self { state: signal(DragState::default()), origin: Rc::new(Cell::new(None)) }
    }

    /// Feed one gesture callback.
    pub fn handle(&self, event: &GestureEvent) {
        let current = self.state.get();
        let Some((next, origin)) = next_drag_state(current, self.origin.get(), event) else {
            return;
        };

        match event {
            GestureEvent::Grant(p) => tracing::debug!(page_y = p.page_y, "drag start"),
            GestureEvent::Move(_) => tracing::trace!(position_y = next.position_y, "drag move"),
            GestureEvent::Release(_) | GestureEvent::Terminate(_) => {
                tracing::debug!(position_y = next.position_y, "drag end")
            }
        }

        self.origin.set(origin);
        self.state.set(next);
    }

    pub fn on_grant(&self, pointer: Pointer) {
        self.handle(&GestureEvent::Grant(pointer));
    }

    pub fn on_move(&self, pointer: Pointer) {
        self.handle(&GestureEvent::Move(pointer));
    }

    pub fn on_release(&self, pointer: Pointer) {
        self.handle(&GestureEvent::Release(pointer));
    }

    pub fn on_terminate(&self, pointer: Pointer) {
        self.handle(&GestureEvent::Terminate(pointer));
    }

    /// Listen to the gestures the scrollable content forwards.
    #[must_use = "dropping the subscription detaches the responder"]
    pub fn attach(&self, gestures: &EventChannel<GestureEvent>) -> Subscription {
        let responder = self.clone();
        gestures.add_listener(move |event| responder.handle(event))
    }

    pub fn state(&self) -> DragState {
        self.state.get()
    }

    pub fn is_active(&self) -> bool {
        self.state.get().active
    }

    pub fn position_y(&self) -> f32 {
        self.state.get().position_y
    }

    /// Animatable position source.
    pub fn state_signal(&self) -> Signal<DragState> {
        self.state.clone()
    }
}

impl Default for DragResponder {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
