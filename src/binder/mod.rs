//! # Binder: the user-facing binding surface
//!
//! Adapts the extended [`BindingContext`](crate::context::BindingContext) to
//! the simplified contract user job functions see, and owns the lifecycle of
//! everything bound through it.
//!
//! ## Components
//!
//! - [`BinderAdapter`] - wraps one context for one job invocation; exposes
//!   `bind<T>` (value only), tracks every result for cleanup and status
//! - [`BinderFactory`] - binds the adapter itself as a parameter value, with
//!   a finalize action that drains the adapter's cleanup list
//! - [`AdapterBinderProvider`] - registry entry point: matches exactly the
//!   simplified capability type (`Arc<BinderAdapter>`), else "no match"
//!
//! ## Flow
//!
//! ```text
//! AdapterBinderProvider ── try_get_binder(TypeId)
//!         └─> BinderFactory ── bind(context, parameter)
//!                 └─> BinderAdapter ── bind<T>(attribute) x N
//!                         ├─> watch registry (status reports)
//!                         └─> cleanup list (finalized in bind order)
//! ```

mod adapter;
mod factory;
mod provider;

pub use adapter::BinderAdapter;
pub use factory::{BinderFactory, ParameterBinder};
pub use provider::{AdapterBinderProvider, BinderProvider};
