//! Error types for model construction.
//!
//! Rendering itself never fails; the only fallible operations are the ones
//! that build a [`Model`](crate::model::Model) and can violate its
//! invariants.

use thiserror::Error;

use crate::identifier::Id;

/// Errors raised while building a class-diagram model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A class with the same qualified name was already added. Qualified
    /// names are diagram node identifiers and must be unique per model.
    #[error("duplicate class: {0}")]
    DuplicateClass(Id),

    /// A relationship references a qualified name that is not in the model's
    /// class registry.
    #[error("relationship references unknown class: {0}")]
    UnknownClass(Id),
}
