//! jobbind - parameter binding and resource lifecycle for job hosts

pub mod attribute;
pub mod binder;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod result;
pub mod watch;

pub use attribute::{BindingAttribute, ParameterInfo};
pub use binder::{AdapterBinderProvider, BinderAdapter, BinderFactory, BinderProvider, ParameterBinder};
pub use context::{BindingContext, MockBindingContext};
pub use error::{BindError, FixSuggestion};
pub use result::{BindResult, CleanupFn, OwnedResource, RawBindResult};
pub use watch::{encode_status, SelfWatch, WatchEntry, WatchRegistry, Watchable};
