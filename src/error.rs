//! Error types with fix suggestions (v0.1)

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// All error variants are part of the public API.
/// Binding contexts construct the resolution variants; the adapter only
/// constructs `TypeMismatch` and the cleanup variants.
#[derive(Error, Debug)]
pub enum BindError {
    // ─────────────────────────────────────────────────────────────
    // Resolution failures (BIND-010 to BIND-012)
    // Propagated unchanged to the caller of bind(); they abort that
    // bind call but leave earlier binds tracked.
    // ─────────────────────────────────────────────────────────────

    #[error("BIND-010: No binder for type '{target}' with attribute '{attribute}'")]
    UnsupportedType { attribute: String, target: String },

    #[error("BIND-011: Invalid resource locator in attribute '{attribute}': {details}")]
    InvalidAttribute { attribute: String, details: String },

    #[error("BIND-012: Context produced '{produced}' where '{expected}' was requested for attribute '{attribute}'")]
    TypeMismatch {
        attribute: String,
        expected: String,
        produced: String,
    },

    // ─────────────────────────────────────────────────────────────
    // Finalization failures (BIND-020 to BIND-021)
    // ─────────────────────────────────────────────────────────────

    #[error("BIND-020: Finalize failed for '{label}': {details}")]
    Finalize { label: String, details: String },

    /// Aggregate of every finalize failure from one cleanup pass.
    /// Surfaced only after all finalize actions have run.
    #[error("BIND-021: {} finalizer(s) failed during cleanup: {}", .errors.len(), summarize(.errors))]
    Cleanup { errors: Vec<BindError> },
}

/// Join nested error messages for the aggregate display
fn summarize(errors: &[BindError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl FixSuggestion for BindError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            BindError::UnsupportedType { .. } => {
                Some("Declare the parameter with a type the binding context supports")
            }
            BindError::InvalidAttribute { .. } => {
                Some("Check the attribute's container/queue/table name for typos")
            }
            BindError::TypeMismatch { .. } => {
                Some("The binding context is registered for a different value type - fix the registration")
            }
            BindError::Finalize { .. } => {
                Some("The resource may not have been flushed - check the backing store")
            }
            BindError::Cleanup { .. } => {
                Some("Inspect the nested BIND-020 errors; each names the leaked resource")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_display_counts_and_joins() {
        let err = BindError::Cleanup {
            errors: vec![
                BindError::Finalize {
                    label: "[Queue(out)]".into(),
                    details: "flush failed".into(),
                },
                BindError::Finalize {
                    label: "[Table(logs)]".into(),
                    details: "commit failed".into(),
                },
            ],
        };
        let msg = err.to_string();
        assert!(msg.starts_with("BIND-021: 2 finalizer(s) failed"));
        assert!(msg.contains("[Queue(out)]"));
        assert!(msg.contains("[Table(logs)]"));
    }

    #[test]
    fn test_every_variant_has_a_suggestion() {
        let errs = [
            BindError::UnsupportedType {
                attribute: "a".into(),
                target: "T".into(),
            },
            BindError::InvalidAttribute {
                attribute: "a".into(),
                details: "d".into(),
            },
            BindError::TypeMismatch {
                attribute: "a".into(),
                expected: "T".into(),
                produced: "U".into(),
            },
            BindError::Finalize {
                label: "l".into(),
                details: "d".into(),
            },
            BindError::Cleanup { errors: vec![] },
        ];
        for err in errs {
            assert!(err.fix_suggestion().is_some(), "no suggestion for {err}");
        }
    }
}
