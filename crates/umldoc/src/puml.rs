//! PlantUML writer for class diagrams.
//!
//! [`PumlWriter`] is one rendering session: it wraps a
//! [`Printer`](crate::printer::Printer) and exposes the class, member, and
//! relationship rendering operations. The writer imposes no iteration order
//! of its own; callers decide which classes and relationships to render and
//! in what order. [`DiagramRenderer`](crate::DiagramRenderer) is the default
//! driver over a whole model.
//!
//! # Organization
//!
//! - `class` - class blocks, detail modes, hide directives
//! - `member` - field/method lines and recursive type-name rendering
//! - `relation` - relationship edges and association end labels

mod class;
mod member;
mod relation;

use crate::printer::Printer;

/// One PlantUML rendering session.
///
/// # Examples
///
/// ```
/// use umldoc::PumlWriter;
/// use umldoc_core::identifier::Id;
/// use umldoc_core::model::{ClassKind, ModelClass};
///
/// let class = ModelClass::new(Id::new("com.acme.Foo"), ClassKind::Class);
///
/// let mut writer = PumlWriter::new();
/// writer.start();
/// writer.empty_class(&class);
/// writer.end();
///
/// let text = writer.finish();
/// assert!(text.starts_with("@startuml\n"));
/// assert!(text.ends_with("@enduml\n"));
/// ```
#[derive(Debug, Default)]
pub struct PumlWriter {
    printer: Printer,
}

impl PumlWriter {
    /// Creates a writer with an empty output buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits the document preamble: `@startuml`, the orthogonal
    /// line-routing directive, and a blank line.
    pub fn start(&mut self) {
        self.printer.println("@startuml");
        // Orthogonal lines
        self.printer.println("skinparam linetype ortho");
        self.printer.newline();
    }

    /// Emits the document postamble: a blank line and `@enduml`.
    pub fn end(&mut self) {
        self.printer.newline();
        self.printer.println("@enduml");
    }

    /// Appends a bare line terminator, for callers separating sections.
    pub fn newline(&mut self) {
        self.printer.newline();
    }

    /// Returns the rendered text so far.
    pub fn as_str(&self) -> &str {
        self.printer.as_str()
    }

    /// Consumes the writer and returns the rendered text.
    pub fn finish(self) -> String {
        self.printer.into_inner()
    }

    pub(crate) fn printer(&mut self) -> &mut Printer {
        &mut self.printer
    }
}
