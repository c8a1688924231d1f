//! Size Observer - Last measured size of a rendered subtree
//!
//! Reports `{0, 0}` until the first layout event arrives. Consumers must
//! tolerate that zero state for at least one frame.

use spark_signals::{signal, Signal};

use crate::host::{EventChannel, Subscription};
use crate::types::{LayoutEvent, PanelSize};

/// Holds the measured size in a signal so derived offsets track it.
#[derive(Clone)]
pub struct SizeObserver {
    size: Signal<PanelSize>,
}

impl SizeObserver {
    pub fn new() -> Self {
        Self { size: signal(PanelSize::ZERO) }
    }

    /// Layout completion callback.
    pub fn on_layout(&self, event: &LayoutEvent) {
        let size = PanelSize::new(event.width, event.height);
        if self.size.get() != size {
            tracing::trace!(width = size.width, height = size.height, "panel measured");
            self.size.set(size);
        }
    }

    /// Observe a host layout channel instead of calling `on_layout` directly.
    #[must_use = "dropping the subscription stops observing"]
    pub fn observe(&self, channel: &EventChannel<LayoutEvent>) -> Subscription {
        let observer = self.clone();
        channel.add_listener(move |event| observer.on_layout(event))
    }

    pub fn size(&self) -> PanelSize {
        self.size.get()
    }

    pub fn size_signal(&self) -> Signal<PanelSize> {
        self.size.clone()
    }
}

impl Default for SizeObserver {
    fn default() -> Self {
        Self::new()
    }
}
