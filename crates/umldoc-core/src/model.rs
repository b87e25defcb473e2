//! Semantic class-diagram model types.
//!
//! This module contains the in-memory representation of a class diagram:
//! classes with their members, type references, and the relationships
//! between classes. These types are produced by an external collaborator
//! (typically a documentation extractor) and consumed read-only by the
//! renderer.
//!
//! # Pipeline Position
//!
//! ```text
//! Source documentation (external)
//!     ↓ extraction (external collaborator)
//! Semantic Model (these types) - classes, members, relationships
//!     ↓ render
//! PlantUML text
//! ```
//!
//! # Organization
//!
//! - [`diagram`] - The [`Model`] root container
//! - [`class`] - Classes and members: [`ModelClass`], [`Field`], [`Method`],
//!   [`TypeReference`]
//! - [`relation`] - Relationships: [`Relation`], [`AssociationEnd`],
//!   [`Multiplicity`]

pub mod class;
pub mod diagram;
pub mod relation;

pub use class::*;
pub use diagram::*;
pub use relation::*;
