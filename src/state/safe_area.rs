//! Safe-area provider - host-owned inset snapshot
//!
//! The host refreshes the insets on orientation or inset changes; the
//! coordinator only reads them. Platforms without a safe-area concept keep
//! the zero default.

use spark_signals::{signal, Signal};

use crate::types::SafeAreaInsets;

#[derive(Clone)]
pub struct SafeAreaProvider {
    insets: Signal<SafeAreaInsets>,
}

impl SafeAreaProvider {
    pub fn new(insets: SafeAreaInsets) -> Self {
        Self { insets: signal(insets) }
    }

    /// Replace the snapshot. Called by the host.
    pub fn set_insets(&self, insets: SafeAreaInsets) {
        if self.insets.get() != insets {
            tracing::debug!(bottom = insets.bottom, left = insets.left, right = insets.right, "safe area insets changed");
            self.insets.set(insets);
        }
    }

    pub fn insets(&self) -> SafeAreaInsets {
        self.insets.get()
    }

    pub fn insets_signal(&self) -> Signal<SafeAreaInsets> {
        self.insets.clone()
    }
}

impl Default for SafeAreaProvider {
    fn default() -> Self {
        Self::new(SafeAreaInsets::ZERO)
    }
}
