// SPDX-License-Identifier: MPL-2.0
//! Dismissal callback.

use std::fmt;
use std::sync::Arc;

/// Zero-argument callback that asks the owner of a toast to remove it.
///
/// What "removal" means (dropping it from a list, starting an exit
/// animation) is decided by whoever supplied the callback. Clones share the
/// same underlying closure.
#[derive(Clone)]
pub struct Dismiss(Arc<dyn Fn() + Send + Sync>);

impl Dismiss {
    pub fn new(callback: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(callback))
    }

    /// A callback that does nothing.
    #[must_use]
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    /// Invokes the callback.
    pub fn call(&self) {
        (self.0)();
    }
}

impl fmt::Debug for Dismiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Dismiss(..)")
    }
}
