//! Field and method line rendering, including recursive type names.

use umldoc_core::model::{Field, Member, Method, TypeReference, Visibility};

use super::PumlWriter;

impl PumlWriter {
    /// Renders one field line.
    ///
    /// When `detailed` is false the declared type is omitted and only the
    /// modifiers, visibility glyph, and name are emitted. Field types show
    /// the simple type name only; generic arguments are rendered for method
    /// signatures, not field compartments.
    pub fn field(&mut self, field: &Field, detailed: bool) {
        if field.is_static() {
            self.print_static();
        }
        self.visibility(field);
        if detailed {
            self.printer().print(field.type_ref().name());
            self.printer().print(" ");
        }
        self.printer().print(field.name());
        self.printer().newline();
    }

    /// Renders one method line.
    ///
    /// When `detailed` is false neither the return type nor the parameters
    /// are emitted, producing a bare `name()` signature for summary views.
    pub fn method(&mut self, method: &Method, detailed: bool) {
        if method.is_static() {
            self.print_static();
        }
        if method.is_abstract() {
            self.print_abstract();
        }
        self.visibility(method);
        if detailed {
            self.type_name(method.return_type());
            self.printer().print(" ");
        }
        self.printer().print(method.name());
        self.printer().print("(");
        if detailed {
            let params = method.params();
            for (i, param) in params.iter().enumerate() {
                self.type_name(param.type_ref());
                self.printer().print(" ");
                self.printer().print(param.name());
                if i != params.len() - 1 {
                    self.printer().print(", ");
                }
            }
        }
        self.printer().print(")");
        self.printer().newline();
    }

    /// Emits the visibility glyph for a member.
    pub fn visibility(&mut self, member: &impl Member) {
        let glyph = match member.visibility() {
            Visibility::Public => "+",
            Visibility::Protected => "#",
            Visibility::PackagePrivate => "~",
            Visibility::Private => "-",
        };
        self.printer().print(glyph);
    }

    /// Renders a type reference, recursing into generic type arguments.
    ///
    /// Nested arguments are angle-bracketed and comma-space separated, so
    /// bracket depth equals the reference's nesting depth.
    pub fn type_name(&mut self, type_ref: &TypeReference) {
        self.printer().print(type_ref.name());
        let args = type_ref.args();
        if !args.is_empty() {
            self.printer().print("<");
            for (i, arg) in args.iter().enumerate() {
                self.type_name(arg);
                if i < args.len() - 1 {
                    self.printer().print(", ");
                }
            }
            self.printer().print(">");
        }
    }

    /// Emits the static modifier prefix.
    pub fn print_static(&mut self) {
        self.printer().print("{static} ");
    }

    /// Emits the abstract modifier prefix.
    pub fn print_abstract(&mut self) {
        self.printer().print("{abstract} ");
    }
}
