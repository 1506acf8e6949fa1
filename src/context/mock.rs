//! Mock binding context for testing
//!
//! Resolves binds from registered closures without touching real storage.
//! Essential for unit tests and CI pipelines.
//!
//! Binders are keyed by the requested value's `TypeId` in a `DashMap`, so
//! registration and lookup are safe from concurrent binds. This is the
//! open-ended half of monitor/binder discovery: the set of bindable types is
//! whatever the test registers.

use std::any::TypeId;
use std::sync::{Arc, Mutex};

use dashmap::DashMap;

use super::BindingContext;
use crate::attribute::BindingAttribute;
use crate::error::BindError;
use crate::result::{BindResult, RawBindResult};
use crate::watch::Watchable;

type BindFn = Box<dyn Fn(&BindingAttribute) -> Result<RawBindResult, BindError> + Send + Sync>;

/// Mock extended context with per-type bind functions
pub struct MockBindingContext {
    /// Connection identifier reported to callers (passthrough target)
    connection: String,
    /// Registered bind functions, keyed by requested value type
    binders: Arc<DashMap<TypeId, BindFn>>,
    /// Track all attributes bound (for assertions)
    requests: Arc<Mutex<Vec<BindingAttribute>>>,
}

impl MockBindingContext {
    /// Create a mock context with the given connection identifier
    pub fn new(connection: impl Into<String>) -> Self {
        Self {
            connection: connection.into(),
            binders: Arc::new(DashMap::new()),
            requests: Arc::new(Mutex::new(vec![])),
        }
    }

    /// Register the bind function for values of type `T`
    pub fn register<T, F>(&self, bind: F)
    where
        T: Watchable + Send + 'static,
        F: Fn(&BindingAttribute) -> Result<BindResult<T>, BindError> + Send + Sync + 'static,
    {
        let erased: BindFn = Box::new(move |attr| bind(attr).map(BindResult::into_raw));
        self.binders.insert(TypeId::of::<T>(), erased);
    }

    /// Builder form of [`register`](Self::register)
    pub fn with_binder<T, F>(self, bind: F) -> Self
    where
        T: Watchable + Send + 'static,
        F: Fn(&BindingAttribute) -> Result<BindResult<T>, BindError> + Send + Sync + 'static,
    {
        self.register(bind);
        self
    }

    /// Get all attributes bound through this context
    pub fn requests(&self) -> Vec<BindingAttribute> {
        self.requests.lock().unwrap().clone()
    }

    /// Get the last attribute bound
    pub fn last_request(&self) -> Option<BindingAttribute> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl BindingContext for MockBindingContext {
    fn bind_erased(
        &self,
        attribute: &BindingAttribute,
        target: TypeId,
    ) -> Result<RawBindResult, BindError> {
        // Record the request
        self.requests.lock().unwrap().push(attribute.clone());

        match self.binders.get(&target) {
            Some(bind) => (bind.value())(attribute),
            None => Err(BindError::UnsupportedType {
                attribute: attribute.to_string(),
                target: format!("{target:?}"),
            }),
        }
    }

    fn connection(&self) -> &str {
        &self.connection
    }
}
