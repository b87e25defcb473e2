//! Class block rendering: detail modes and hide directives.

use umldoc_core::model::{ClassKind, Member, ModelClass, Visibility};

use super::PumlWriter;

impl PumlWriter {
    /// Emits the header keyword for a class: `class `, `interface `, or
    /// `enum `.
    pub fn class_kind(&mut self, class: &ModelClass) {
        let keyword = match class.kind() {
            ClassKind::Interface => "interface ",
            ClassKind::Enum => "enum ",
            ClassKind::Class => "class ",
        };
        self.printer().print(keyword);
    }

    /// Renders a class block with no members.
    pub fn empty_class(&mut self, class: &ModelClass) {
        self.class_kind(class);
        self.printer()
            .println(&format!("{} {{", class.qualified_name()));
        self.printer().println("}");
    }

    /// Renders a class as a bare diagram node: an empty block followed by
    /// directives suppressing both member compartments.
    ///
    /// Used when a class must exist as a node but show no internal detail,
    /// such as external library classes referenced only by relationship.
    pub fn hidden_class(&mut self, class: &ModelClass) {
        self.empty_class(class);
        self.printer().newline();
        self.hide_fields(class);
        self.hide_methods(class);
        self.printer().newline();
    }

    /// Renders a class block showing the fields compartment only.
    pub fn class_with_fields(&mut self, class: &ModelClass) {
        self.detailed_class(class, true, false);
    }

    /// Renders a class block showing the methods compartment only.
    pub fn class_with_methods(&mut self, class: &ModelClass) {
        self.detailed_class(class, false, true);
    }

    /// Renders a class block showing both member compartments.
    pub fn class_with_fields_and_methods(&mut self, class: &ModelClass) {
        self.detailed_class(class, true, true);
    }

    /// Renders a class block with the selected compartments at full
    /// signature fidelity, members in declaration order.
    pub fn detailed_class(&mut self, class: &ModelClass, show_fields: bool, show_methods: bool) {
        self.class_kind(class);
        self.printer()
            .println(&format!("{} {{", class.qualified_name()));
        if show_fields {
            for field in class.fields() {
                self.field(field, true);
            }
        }
        if show_methods {
            for method in class.methods() {
                self.method(method, true);
            }
        }
        self.printer().println("}");
    }

    /// Renders a public-API summary of a class: public methods only, bare
    /// `name()` signatures, fields always hidden.
    ///
    /// Overloaded methods are not deduplicated, so overloads of a public
    /// method appear as repeated identical lines. This mirrors the behavior
    /// downstream consumers already rely on.
    pub fn summary_class(&mut self, class: &ModelClass) {
        self.class_kind(class);
        self.printer()
            .println(&format!("{} {{", class.qualified_name()));
        for method in class.methods() {
            if method.visibility() == Visibility::Public {
                self.method(method, false);
            }
        }
        self.printer().println("}");
        // Fields are not shown.
        self.hide_fields(class);
    }

    /// Emits the directive suppressing a class's fields compartment.
    pub fn hide_fields(&mut self, class: &ModelClass) {
        self.printer()
            .println(&format!("hide {} fields", class.qualified_name()));
    }

    /// Emits the directive suppressing a class's methods compartment.
    pub fn hide_methods(&mut self, class: &ModelClass) {
        self.printer()
            .println(&format!("hide {} methods", class.qualified_name()));
    }
}
