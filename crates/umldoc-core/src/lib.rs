//! Umldoc Core Types and Definitions
//!
//! This crate provides the foundational types for umldoc class diagrams.
//! It includes:
//!
//! - **Identifiers**: Interned qualified class names ([`identifier::Id`])
//! - **Model**: The semantic class-diagram model ([`model`] module): classes
//!   with their fields and methods, type references with generic arguments,
//!   and relationships between classes
//! - **Errors**: Model-construction errors ([`error::ModelError`])
//!
//! The model is built once by an external collaborator (typically a
//! documentation extractor) and is read-only during rendering.

pub mod error;
pub mod identifier;
pub mod model;

pub use error::ModelError;
