//! Umldoc - PlantUML class-diagram rendering from an in-memory code model.
//!
//! The model (classes, members, relationships) is built by an external
//! collaborator, typically a documentation extractor; this crate turns it
//! into PlantUML text. [`DiagramRenderer`] drives a whole model through one
//! rendering session; [`PumlWriter`] is the underlying session for callers
//! that want their own class selection or ordering policy.

pub mod config;

mod error;
mod printer;
mod puml;

pub use umldoc_core::{identifier, model};

pub use error::UmldocError;
pub use printer::Printer;
pub use puml::PumlWriter;

use std::io::Write;

use log::{debug, info, trace};

use umldoc_core::model::Model;

use config::{ClassDetail, RenderConfig};

/// Driver for rendering a class-diagram model to PlantUML text.
///
/// Wraps a rendering session with the fixed document framing and iterates
/// the model's classes and relationships in insertion order, rendering each
/// class at the configured [`ClassDetail`].
///
/// # Examples
///
/// ```
/// use umldoc::{DiagramRenderer, config::RenderConfig};
/// use umldoc_core::identifier::Id;
/// use umldoc_core::model::{ClassKind, Model, ModelClass};
///
/// let mut model = Model::new();
/// model.add_class(ModelClass::new(Id::new("com.acme.Foo"), ClassKind::Class))?;
///
/// // With custom config
/// let config = RenderConfig::default();
/// let renderer = DiagramRenderer::new(config);
/// let text = renderer.render(&model);
/// assert!(text.contains("class com.acme.Foo"));
///
/// // Or use default config
/// let renderer = DiagramRenderer::default();
/// # Ok::<(), umldoc_core::ModelError>(())
/// ```
#[derive(Default)]
pub struct DiagramRenderer {
    config: RenderConfig,
}

impl DiagramRenderer {
    /// Create a new diagram renderer with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Rendering configuration, including the class detail mode
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a model to PlantUML text.
    ///
    /// Emits the document preamble, one class block per model class, a
    /// separator line, one relationship line per model relationship, and
    /// the postamble. Classes and relationships are rendered in the model's
    /// insertion order; members within a class keep their declaration order.
    pub fn render(&self, model: &Model) -> String {
        info!(
            classes = model.class_count(),
            relations = model.relations().len(),
            detail:? = self.config.detail();
            "Rendering class diagram",
        );

        let mut writer = PumlWriter::new();
        writer.start();

        for class in model.classes() {
            trace!(class:% = class.qualified_name(); "Rendering class");
            match self.config.detail() {
                ClassDetail::Empty => writer.empty_class(class),
                ClassDetail::Hidden => writer.hidden_class(class),
                ClassDetail::Fields => writer.class_with_fields(class),
                ClassDetail::Methods => writer.class_with_methods(class),
                ClassDetail::Full => writer.class_with_fields_and_methods(class),
                ClassDetail::Summary => writer.summary_class(class),
            }
        }

        if !model.relations().is_empty() {
            writer.newline();
            for relation in model.relations() {
                writer.relation(relation);
            }
        }

        writer.end();

        debug!("Diagram rendered successfully");
        writer.finish()
    }

    /// Render a model and write the text to the given sink.
    ///
    /// Rendering happens fully in memory; the sink is only touched once the
    /// text is complete.
    ///
    /// # Errors
    ///
    /// Returns [`UmldocError::Io`] if writing to the sink fails.
    pub fn render_to_writer(
        &self,
        model: &Model,
        sink: &mut impl Write,
    ) -> Result<(), UmldocError> {
        let text = self.render(model);
        sink.write_all(text.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use umldoc_core::{
        identifier::Id,
        model::{
            AssociationEnd, ClassKind, Field, Model, ModelClass, Multiplicity, Relation,
            RelationKind, TypeReference, Visibility,
        },
    };

    use super::*;

    fn animal_model() -> Model {
        let mut model = Model::new();
        model
            .add_class(ModelClass::new(Id::new("com.acme.Dog"), ClassKind::Class))
            .unwrap();
        model
            .add_class(ModelClass::new(
                Id::new("com.acme.Animal"),
                ClassKind::Class,
            ))
            .unwrap();
        model
            .add_relation(Relation::new(
                Id::new("com.acme.Dog"),
                Id::new("com.acme.Animal"),
                RelationKind::Generalization,
            ))
            .unwrap();
        model
    }

    #[test]
    fn test_render_framing() {
        let renderer = DiagramRenderer::default();
        let text = renderer.render(&Model::new());
        assert_eq!(text, "@startuml\nskinparam linetype ortho\n\n\n@enduml\n");
    }

    #[test]
    fn test_render_classes_and_relations() {
        let renderer = DiagramRenderer::default();
        let text = renderer.render(&animal_model());

        assert!(text.starts_with("@startuml\nskinparam linetype ortho\n\n"));
        assert!(text.contains("class com.acme.Dog {\n}\n"));
        assert!(text.contains("\ncom.acme.Dog --|> com.acme.Animal\n"));
        assert!(text.ends_with("\n@enduml\n"));
    }

    #[test]
    fn test_render_association_with_destination_end() {
        let mut model = Model::new();
        model
            .add_class(ModelClass::new(Id::new("com.acme.Order"), ClassKind::Class))
            .unwrap();
        model
            .add_class(ModelClass::new(
                Id::new("com.acme.LineItem"),
                ClassKind::Class,
            ))
            .unwrap();
        model
            .add_relation(Relation::association(
                Id::new("com.acme.Order"),
                Id::new("com.acme.LineItem"),
                None,
                Some(
                    AssociationEnd::new()
                        .with_role("items")
                        .with_multiplicity(Multiplicity::Many),
                ),
            ))
            .unwrap();

        let text = DiagramRenderer::default().render(&model);
        assert!(text.contains("com.acme.Order --> \"items *\" com.acme.LineItem\n"));
    }

    #[test]
    fn test_render_detail_mode_fields() {
        let mut model = Model::new();
        model
            .add_class(
                ModelClass::new(Id::new("com.acme.Foo"), ClassKind::Class).with_field(Field::new(
                    "bar",
                    TypeReference::simple("String"),
                    Visibility::Public,
                    false,
                )),
            )
            .unwrap();

        let renderer = DiagramRenderer::new(RenderConfig::new(ClassDetail::Fields));
        let text = renderer.render(&model);
        assert!(text.contains("class com.acme.Foo {\n+String bar\n}\n"));
    }

    #[test]
    fn test_render_detail_mode_hidden() {
        let mut model = Model::new();
        model
            .add_class(ModelClass::new(Id::new("com.acme.Ext"), ClassKind::Enum))
            .unwrap();

        let renderer = DiagramRenderer::new(RenderConfig::new(ClassDetail::Hidden));
        let text = renderer.render(&model);
        assert!(text.contains("enum com.acme.Ext {\n}\n"));
        assert!(text.contains("hide com.acme.Ext fields\n"));
        assert!(text.contains("hide com.acme.Ext methods\n"));
    }

    #[test]
    fn test_render_to_writer() {
        let renderer = DiagramRenderer::default();
        let mut sink = Vec::new();
        renderer
            .render_to_writer(&animal_model(), &mut sink)
            .unwrap();

        let text = String::from_utf8(sink).unwrap();
        assert!(text.starts_with("@startuml\n"));
        assert!(text.ends_with("@enduml\n"));
    }
}
