//! Bind results and owned resource handles (v0.1)
//!
//! A bind produces a value plus two optional extras the caller never sees:
//! a one-shot finalize action and a self-watch monitor. [`BindResult`] is the
//! typed form binding contexts build; [`RawBindResult`] is its type-erased
//! form crossing the object-safe context boundary. The monitor is captured at
//! erasure time, while the concrete type is still known, so the capability
//! check resolves at compile time.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::BindError;
use crate::watch::{SelfWatch, Watchable};

/// One-shot finalize action: flush, commit, release
pub type CleanupFn = Box<dyn FnOnce() -> Result<(), BindError> + Send>;

/// Typed outcome of resolving an attribute to a value
pub struct BindResult<T> {
    value: T,
    cleanup: Option<CleanupFn>,
}

impl<T> BindResult<T> {
    /// A result with no finalize action (value needs no flush/commit)
    pub fn new(value: T) -> Self {
        Self {
            value,
            cleanup: None,
        }
    }

    /// Attach the finalize action for this value
    pub fn with_cleanup(
        mut self,
        cleanup: impl FnOnce() -> Result<(), BindError> + Send + 'static,
    ) -> Self {
        self.cleanup = Some(Box::new(cleanup));
        self
    }
}

impl<T: Watchable + Send + 'static> BindResult<T> {
    /// Erase the value type for the object-safe context boundary,
    /// deriving the monitor while the concrete type is still known.
    pub fn into_raw(self) -> RawBindResult {
        let monitor = self.value.watcher();
        RawBindResult {
            value: Box::new(self.value),
            cleanup: self.cleanup,
            monitor,
        }
    }
}

/// Type-erased bind result as returned by a [`crate::context::BindingContext`]
pub struct RawBindResult {
    value: Box<dyn Any + Send>,
    cleanup: Option<CleanupFn>,
    monitor: Option<Arc<dyn SelfWatch>>,
}

impl fmt::Debug for RawBindResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBindResult")
            .field("has_cleanup", &self.cleanup.is_some())
            .field("has_monitor", &self.monitor.is_some())
            .finish_non_exhaustive()
    }
}

impl RawBindResult {
    /// A result that is deliberately not monitored, regardless of its type.
    /// Used where the value aggregates its own contents instead of being
    /// watched itself.
    pub fn unmonitored<T: Send + 'static>(value: T) -> Self {
        Self {
            value: Box::new(value),
            cleanup: None,
            monitor: None,
        }
    }

    /// Attach the finalize action for this value
    pub fn with_cleanup(
        mut self,
        cleanup: impl FnOnce() -> Result<(), BindError> + Send + 'static,
    ) -> Self {
        self.cleanup = Some(Box::new(cleanup));
        self
    }

    /// Split into value, finalize action, and monitor.
    /// The adapter owns the finalize action from here on; the caller of bind
    /// only ever receives the value.
    pub fn into_parts(
        self,
    ) -> (
        Box<dyn Any + Send>,
        Option<CleanupFn>,
        Option<Arc<dyn SelfWatch>>,
    ) {
        (self.value, self.cleanup, self.monitor)
    }
}

/// Finalize handle the adapter keeps for every value it has handed out.
/// Never re-exposed: the raw value given to the caller carries no ownership
/// of its own finalization.
pub struct OwnedResource {
    label: String,
    cleanup: Option<CleanupFn>,
}

impl OwnedResource {
    pub fn new(label: impl Into<String>, cleanup: Option<CleanupFn>) -> Self {
        Self {
            label: label.into(),
            cleanup,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Run the finalize action, if any. Failures are labeled with the
    /// attribute that produced the resource.
    pub fn finalize(self) -> Result<(), BindError> {
        match self.cleanup {
            Some(cleanup) => cleanup().map_err(|e| BindError::Finalize {
                label: self.label,
                details: e.to_string(),
            }),
            None => Ok(()),
        }
    }
}
