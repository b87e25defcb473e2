//! Relationships between classes.
//!
//! A [`Relation`] is an edge between two classes, tagged with a
//! [`RelationKind`]. Associations additionally carry optional
//! [`AssociationEnd`]s describing the role and multiplicity at each side.

use crate::identifier::Id;

/// Cardinality constraint on an association end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Multiplicity {
    One,
    ZeroOrOne,
    Many,
}

impl Multiplicity {
    /// Returns the diagram label for this multiplicity.
    ///
    /// An absent multiplicity (`Option::None` on the endpoint) has no label;
    /// there is no unknown variant to map.
    pub fn label(self) -> &'static str {
        match self {
            Multiplicity::One => "1",
            Multiplicity::ZeroOrOne => "0..1",
            Multiplicity::Many => "*",
        }
    }
}

/// One side of an association: an optional role name and an optional
/// multiplicity.
///
/// An endpoint may be entirely absent from a relation
/// (`Option<AssociationEnd>` = `None`); that is distinct from an endpoint
/// present with no role and no multiplicity, and the two render differently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssociationEnd {
    role: Option<String>,
    multiplicity: Option<Multiplicity>,
}

impl AssociationEnd {
    /// Creates an endpoint with no role and no multiplicity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the role name for this endpoint.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Sets the multiplicity for this endpoint.
    pub fn with_multiplicity(mut self, multiplicity: Multiplicity) -> Self {
        self.multiplicity = Some(multiplicity);
        self
    }

    /// Returns the role name, if any.
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// Returns the multiplicity, if any.
    pub fn multiplicity(&self) -> Option<Multiplicity> {
        self.multiplicity
    }
}

/// The kind of a relationship edge.
///
/// Only associations carry endpoint data; the other kinds are bare tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationKind {
    /// Is-a: `source` extends `destination`.
    Generalization,
    /// Implements: `source` realizes the interface `destination`.
    Realization,
    /// Uses: `source` depends on `destination`.
    Dependency,
    /// Has-a, with an optional endpoint at each side.
    Association {
        source_end: Option<AssociationEnd>,
        destination_end: Option<AssociationEnd>,
    },
}

/// A relationship edge between two classes in the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    source: Id,
    destination: Id,
    kind: RelationKind,
}

impl Relation {
    /// Creates a relation of the given kind from `source` to `destination`.
    pub fn new(source: Id, destination: Id, kind: RelationKind) -> Self {
        Self {
            source,
            destination,
            kind,
        }
    }

    /// Convenience constructor for an association with the given endpoints.
    pub fn association(
        source: Id,
        destination: Id,
        source_end: Option<AssociationEnd>,
        destination_end: Option<AssociationEnd>,
    ) -> Self {
        Self::new(
            source,
            destination,
            RelationKind::Association {
                source_end,
                destination_end,
            },
        )
    }

    /// Returns the qualified name of the source class.
    pub fn source(&self) -> Id {
        self.source
    }

    /// Returns the qualified name of the destination class.
    pub fn destination(&self) -> Id {
        self.destination
    }

    /// Returns the relationship kind tag.
    pub fn kind(&self) -> &RelationKind {
        &self.kind
    }
}
