//! # Extended Binding Context
//!
//! The host-internal, richer binding capability the adapter wraps.
//!
//! ## Overview
//!
//! A [`BindingContext`] resolves a [`BindingAttribute`](crate::attribute::BindingAttribute)
//! plus a requested runtime type into a [`RawBindResult`]: the value, its
//! finalize action, and (when the value's type supports it) a self-watch
//! monitor. Concrete implementations live with the host's storage backends
//! and are out of scope here; this crate consumes the trait and ships
//! [`MockBindingContext`] for tests.
//!
//! ## Contract
//!
//! ```rust,ignore
//! pub trait BindingContext: Send + Sync {
//!     fn bind_erased(&self, attribute: &BindingAttribute, target: TypeId)
//!         -> Result<RawBindResult, BindError>;
//!     fn connection(&self) -> &str;
//! }
//! ```
//!
//! `bind_erased` is deliberately type-erased so the trait stays object-safe;
//! the typed `bind<T>` surface lives on
//! [`BinderAdapter`](crate::binder::BinderAdapter), which downcasts on the
//! way out.

mod mock;

pub use mock::MockBindingContext;

use std::any::TypeId;

use crate::attribute::BindingAttribute;
use crate::error::BindError;
use crate::result::RawBindResult;

/// Extended binding capability (consumed contract)
pub trait BindingContext: Send + Sync {
    /// Resolve an attribute to a value of the requested runtime type,
    /// plus its finalize action and monitor.
    fn bind_erased(
        &self,
        attribute: &BindingAttribute,
        target: TypeId,
    ) -> Result<RawBindResult, BindError>;

    /// Connection identifier of the backing account/store
    fn connection(&self) -> &str;
}
