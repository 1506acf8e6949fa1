//! Capability provider: type-directed binder lookup (v0.1)

use std::any::TypeId;
use std::sync::Arc;

use super::{BinderAdapter, BinderFactory, ParameterBinder};

/// Registry entry point the host probes for each declared parameter.
/// `None` means "not my type, try the next provider" - a sentinel, not an
/// error.
pub trait BinderProvider: Send + Sync {
    fn try_get_binder(&self, target: TypeId) -> Option<Box<dyn ParameterBinder>>;
}

/// Matches exactly the simplified binding capability type,
/// `Arc<BinderAdapter>`. Stateless and total over type identity.
pub struct AdapterBinderProvider;

impl BinderProvider for AdapterBinderProvider {
    fn try_get_binder(&self, target: TypeId) -> Option<Box<dyn ParameterBinder>> {
        if target == TypeId::of::<Arc<BinderAdapter>>() {
            Some(Box::new(BinderFactory))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::watch::SelfWatch;

    #[test]
    fn test_matches_only_the_capability_type() {
        let provider = AdapterBinderProvider;

        assert!(provider
            .try_get_binder(TypeId::of::<Arc<BinderAdapter>>())
            .is_some());

        // An unrelated capability handle and a concrete value type both miss.
        assert!(provider
            .try_get_binder(TypeId::of::<Arc<dyn SelfWatch>>())
            .is_none());
        assert!(provider.try_get_binder(TypeId::of::<String>()).is_none());
    }
}
