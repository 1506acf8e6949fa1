//! Binding attribute definitions (v0.1)
//!
//! Attributes are the declarative half of parameter binding: they say *what*
//! resource a parameter wants ("read this blob", "write this queue") without
//! saying how it is produced. Hosts declare them in YAML/JSON manifests; the
//! `Display` form is the stable label recorded for every watch entry.

use std::any::TypeId;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Declarative description of the resource a parameter binds to
///
/// The rendered form (`[Kind(locator)]`) must stay stable: it is the label
/// that status reports and finalize errors identify resources by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum BindingAttribute {
    /// Read an existing blob
    BlobInput { container: String, name: String },
    /// Create or overwrite a blob
    BlobOutput { container: String, name: String },
    /// Enqueue messages to a named queue
    Queue { name: String },
    /// Read/write rows of a named table
    Table { name: String },
}

impl fmt::Display for BindingAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingAttribute::BlobInput { container, name } => {
                write!(f, "[BlobInput({container}/{name})]")
            }
            BindingAttribute::BlobOutput { container, name } => {
                write!(f, "[BlobOutput({container}/{name})]")
            }
            BindingAttribute::Queue { name } => write!(f, "[Queue({name})]"),
            BindingAttribute::Table { name } => write!(f, "[Table({name})]"),
        }
    }
}

/// Declared parameter of a user job function: its name plus the runtime
/// type the host must produce for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterInfo {
    pub name: String,
    pub type_id: TypeId,
}

impl ParameterInfo {
    /// Describe a parameter declared with type `T`
    pub fn of<T: 'static>(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_id: TypeId::of::<T>(),
        }
    }
}
