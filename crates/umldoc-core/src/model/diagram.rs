//! The model root container.

use indexmap::IndexMap;
use log::trace;

use crate::{
    error::ModelError,
    identifier::Id,
    model::{ModelClass, Relation, RelationKind},
};

/// The root container for one class-diagram model.
///
/// Owns the classes (unique by qualified name, kept in insertion order) and
/// the relationships between them. A `Model` is built once by an external
/// collaborator and is read-only during rendering, so independent rendering
/// sessions may share one model concurrently.
///
/// # Examples
///
/// ```
/// use umldoc_core::identifier::Id;
/// use umldoc_core::model::{ClassKind, Model, ModelClass, Relation, RelationKind};
///
/// let mut model = Model::new();
/// model.add_class(ModelClass::new(Id::new("com.acme.Dog"), ClassKind::Class))?;
/// model.add_class(ModelClass::new(Id::new("com.acme.Animal"), ClassKind::Class))?;
/// model.add_relation(Relation::new(
///     Id::new("com.acme.Dog"),
///     Id::new("com.acme.Animal"),
///     RelationKind::Generalization,
/// ))?;
/// assert_eq!(model.classes().count(), 2);
/// # Ok::<(), umldoc_core::ModelError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Model {
    classes: IndexMap<Id, ModelClass>,
    relations: Vec<Relation>,
}

impl Model {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a class to the model.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateClass`] if a class with the same
    /// qualified name is already registered. Qualified names are diagram
    /// node identifiers and must never be reused within one model.
    pub fn add_class(&mut self, class: ModelClass) -> Result<(), ModelError> {
        let id = class.qualified_name();
        if self.classes.contains_key(&id) {
            return Err(ModelError::DuplicateClass(id));
        }
        trace!(class:% = id; "Registered class");
        self.classes.insert(id, class);
        Ok(())
    }

    /// Adds a relationship to the model.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownClass`] if either endpoint's qualified
    /// name is not registered in the model.
    pub fn add_relation(&mut self, relation: Relation) -> Result<(), ModelError> {
        for id in [relation.source(), relation.destination()] {
            if !self.classes.contains_key(&id) {
                return Err(ModelError::UnknownClass(id));
            }
        }
        trace!(
            source:% = relation.source(),
            destination:% = relation.destination();
            "Registered relationship",
        );
        self.relations.push(relation);
        Ok(())
    }

    /// Looks up a class by qualified name.
    pub fn class(&self, id: Id) -> Option<&ModelClass> {
        self.classes.get(&id)
    }

    /// Iterates the classes in insertion order.
    pub fn classes(&self) -> impl Iterator<Item = &ModelClass> {
        self.classes.values()
    }

    /// Returns the relationships in insertion order.
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Returns the number of registered classes.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Returns the associations a class participates in as source.
    pub fn associations_from(&self, id: Id) -> impl Iterator<Item = &Relation> {
        self.relations.iter().filter(move |rel| {
            rel.source() == id && matches!(rel.kind(), RelationKind::Association { .. })
        })
    }
}
