//! Relationship edge rendering.

use umldoc_core::{
    identifier::Id,
    model::{AssociationEnd, Relation, RelationKind},
};

use super::PumlWriter;

impl PumlWriter {
    /// Renders one relationship edge, dispatching on its kind tag.
    pub fn relation(&mut self, relation: &Relation) {
        match relation.kind() {
            RelationKind::Generalization => {
                self.generalization(relation.source(), relation.destination());
            }
            RelationKind::Realization => {
                self.realization(relation.source(), relation.destination());
            }
            RelationKind::Dependency => {
                self.dependency(relation.source(), relation.destination());
            }
            RelationKind::Association {
                source_end,
                destination_end,
            } => {
                self.association(
                    relation.source(),
                    source_end.as_ref(),
                    relation.destination(),
                    destination_end.as_ref(),
                );
            }
        }
    }

    /// Renders an is-a edge: `source --|> destination`.
    pub fn generalization(&mut self, source: Id, destination: Id) {
        self.rel_line(source, "--|>", destination);
    }

    /// Renders an implements edge: `source ..|> destination`.
    pub fn realization(&mut self, source: Id, destination: Id) {
        self.rel_line(source, "..|>", destination);
    }

    /// Renders a uses edge: `source ..> destination`.
    pub fn dependency(&mut self, source: Id, destination: Id) {
        self.rel_line(source, "..>", destination);
    }

    /// Renders a has-a edge with optional role/multiplicity labels.
    ///
    /// The arrow is chosen by endpoint presence alone: no source endpoint
    /// gives `-->`, no destination endpoint gives `<--`, both present give
    /// plain `--`. The label content never influences the arrow.
    pub fn association(
        &mut self,
        source: Id,
        source_end: Option<&AssociationEnd>,
        destination: Id,
        destination_end: Option<&AssociationEnd>,
    ) {
        let arrow = if source_end.is_none() {
            "-->"
        } else if destination_end.is_none() {
            "<--"
        } else {
            "--"
        };

        let source_label = end_label(source_end);
        let destination_label = end_label(destination_end);
        self.printer().println(&format!(
            "{source} {source_label}{arrow} {destination_label}{destination}"
        ));
    }

    fn rel_line(&mut self, source: Id, arrow: &str, destination: Id) {
        self.printer()
            .println(&format!("{source} {arrow} {destination}"));
    }
}

/// Builds the quoted label for one association end.
///
/// PlantUML has no per-end label, so the role and the multiplicity are
/// packed together into the multiplicity-label slot. A non-empty label is
/// quoted and followed by a space so it can be spliced directly before the
/// arrow (source side) or the class name (destination side); an absent or
/// empty end contributes nothing.
fn end_label(end: Option<&AssociationEnd>) -> String {
    let Some(end) = end else {
        return String::new();
    };

    let mut label = String::new();
    if let Some(role) = end.role() {
        label.push_str(role);
        label.push(' ');
    }
    if let Some(multiplicity) = end.multiplicity() {
        label.push_str(multiplicity.label());
    }

    if label.is_empty() {
        label
    } else {
        format!("\"{label}\" ")
    }
}
