//! Configuration types for diagram rendering.
//!
//! This module provides configuration structures that control how classes
//! are rendered. All types implement [`serde::Deserialize`] for flexible
//! loading from external sources.
//!
//! # Overview
//!
//! - [`RenderConfig`] - Top-level rendering configuration.
//! - [`ClassDetail`] - Selects which class compartments are rendered and at
//!   what signature fidelity.
//!
//! # Example
//!
//! ```
//! # use umldoc::config::{ClassDetail, RenderConfig};
//! // Use default configuration
//! let config = RenderConfig::default();
//! assert_eq!(config.detail(), ClassDetail::Full);
//! ```

use serde::Deserialize;

/// Top-level rendering configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderConfig {
    /// Detail mode applied to every class rendered by the driver.
    #[serde(default)]
    detail: ClassDetail,
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`] with the specified class detail mode.
    pub fn new(detail: ClassDetail) -> Self {
        Self { detail }
    }

    /// Returns the configured class detail mode.
    pub fn detail(&self) -> ClassDetail {
        self.detail
    }
}

/// Class-rendering detail mode.
///
/// Selects which compartments (fields/methods) appear and at what signature
/// fidelity when the driver renders a class block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassDetail {
    /// Header and an empty body.
    Empty,
    /// Empty body plus directives hiding both compartments.
    Hidden,
    /// Fields compartment only.
    Fields,
    /// Methods compartment only.
    Methods,
    /// Fields and methods at full signature fidelity.
    #[default]
    Full,
    /// Public methods only, bare signatures, fields hidden.
    Summary,
}
