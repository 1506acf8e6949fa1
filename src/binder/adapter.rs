//! Binding adapter: simplified bind surface with tracked lifecycle (v0.1)
//!
//! Wraps an extended [`BindingContext`] for the lifetime of a single job
//! invocation:
//! - user code calls `bind<T>` and receives values only - never the finalize
//!   action, which stays on the adapter's cleanup list
//! - every bind records a watch entry, so `status()` can render what was
//!   bound (and each resource's live status) at any time
//! - `cleanup()` runs once after the invocation, finalizing every tracked
//!   resource in bind order, unconditionally, aggregating failures

use std::any::{type_name, TypeId};
use std::sync::{Arc, Mutex};

use tracing::{debug, instrument, warn};

use crate::attribute::BindingAttribute;
use crate::context::BindingContext;
use crate::error::BindError;
use crate::result::OwnedResource;
use crate::watch::{encode_status, SelfWatch, WatchRegistry, Watchable};

/// Simplified binding capability handed to user job functions
///
/// Exclusively owned by one job invocation; binds may still come from several
/// worker threads of that invocation, so both tracked lists are lock-guarded.
pub struct BinderAdapter {
    inner: Arc<dyn BindingContext>,
    /// Resources awaiting finalization, in bind order
    results: Mutex<Vec<OwnedResource>>,
    /// One watch entry per bind, for status reports
    watches: WatchRegistry,
}

impl BinderAdapter {
    /// Wrap an extended context for one invocation
    pub fn new(inner: Arc<dyn BindingContext>) -> Self {
        Self {
            inner,
            results: Mutex::new(vec![]),
            watches: WatchRegistry::new(),
        }
    }

    /// Resolve an attribute to a value of type `T`
    ///
    /// The result's finalize action is taken onto the cleanup list and its
    /// monitor into the watch registry; the caller receives the value alone.
    /// Resolution failures from the context propagate unchanged.
    #[instrument(skip(self, attribute), fields(attribute = %attribute))]
    pub fn bind<T: Watchable + Send + 'static>(
        &self,
        attribute: &BindingAttribute,
    ) -> Result<T, BindError> {
        let raw = self.inner.bind_erased(attribute, TypeId::of::<T>())?;
        let (value, cleanup, monitor) = raw.into_parts();
        let label = attribute.to_string();

        let value = match value.downcast::<T>() {
            Ok(value) => value,
            Err(_) => {
                // The context produced a resource of the wrong type. Nothing
                // gets tracked for it, so reclaim it here instead of leaking.
                if let Err(err) = OwnedResource::new(label.clone(), cleanup).finalize() {
                    warn!(error = %err, "failed to reclaim mistyped bind result");
                }
                return Err(BindError::TypeMismatch {
                    attribute: label,
                    expected: type_name::<T>().to_string(),
                    produced: "a different runtime type".to_string(),
                });
            }
        };

        debug!("Resolved binding");
        self.watches.record(label.clone(), monitor);
        self.results
            .lock()
            .unwrap()
            .push(OwnedResource::new(label, cleanup));
        Ok(*value)
    }

    /// Connection identifier of the wrapped context (identity passthrough)
    pub fn connection(&self) -> &str {
        self.inner.connection()
    }

    /// Number of resources currently awaiting finalization
    pub fn pending(&self) -> usize {
        self.results.lock().unwrap().len()
    }

    /// Finalize every resource ever bound, in bind order
    ///
    /// Called once by the host after the invocation completes - successfully
    /// or not; partial binds from an aborted pass are finalized too. Every
    /// finalize action runs even if an earlier one fails; failures surface
    /// together as [`BindError::Cleanup`] after the full pass. A repeat call
    /// sees an empty list and does nothing.
    pub fn cleanup(&self) -> Result<(), BindError> {
        let drained = {
            let mut results = self.results.lock().unwrap();
            std::mem::take(&mut *results)
        };

        debug!(count = drained.len(), "Finalizing bound resources");
        let mut errors = Vec::new();
        for resource in drained {
            if let Err(err) = resource.finalize() {
                warn!(error = %err, "Finalize failed; continuing with remaining resources");
                errors.push(err);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(BindError::Cleanup { errors })
        }
    }

    /// Aggregate status of everything bound so far, encoded for nesting
    pub fn status(&self) -> String {
        encode_status(&self.watches.report())
    }
}

// The adapter aggregates like any leaf resource: its own report, already
// folded onto one line, can appear as an entry in an outer report.
impl SelfWatch for BinderAdapter {
    fn status(&self) -> String {
        BinderAdapter::status(self)
    }
}
