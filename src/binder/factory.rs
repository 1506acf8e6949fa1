//! Binder factory: binds the adapter itself as a parameter value (v0.1)

use std::sync::Arc;

use crate::attribute::ParameterInfo;
use crate::context::BindingContext;
use crate::error::BindError;
use crate::result::RawBindResult;

use super::BinderAdapter;

/// Parameter-level binder: resolves one declared parameter against an
/// extended context. Host-internal contract; user code never sees it.
pub trait ParameterBinder: Send + Sync {
    fn bind(
        &self,
        context: Arc<dyn BindingContext>,
        parameter: &ParameterInfo,
    ) -> Result<RawBindResult, BindError>;
}

/// Binds a fresh [`BinderAdapter`] as the parameter value
///
/// The result's finalize action drains the adapter's cleanup list, so every
/// nested bind the user makes is finalized when the host finalizes this one
/// result. No monitor is attached here: the adapter is not itself watched,
/// its contents are, via its own registry.
pub struct BinderFactory;

impl ParameterBinder for BinderFactory {
    fn bind(
        &self,
        context: Arc<dyn BindingContext>,
        _parameter: &ParameterInfo,
    ) -> Result<RawBindResult, BindError> {
        let adapter = Arc::new(BinderAdapter::new(context));
        let handle = Arc::clone(&adapter);
        Ok(RawBindResult::unmonitored(adapter).with_cleanup(move || handle.cleanup()))
    }
}
