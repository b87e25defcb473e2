//! Append-only text buffer with line primitives.
//!
//! [`Printer`] is the leaf dependency of every renderer: a plain `String`
//! buffer with `print`/`println`/`newline`. It performs no escaping; callers
//! are responsible for emitting syntactically valid diagram text.

/// Append-only output buffer for one rendering session.
///
/// Each rendering session owns its own `Printer`, which keeps concurrent
/// sessions over a shared model independent of each other.
#[derive(Debug, Default)]
pub struct Printer {
    out: String,
}

impl Printer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends text without a line break.
    pub fn print(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Appends text followed by a line terminator.
    pub fn println(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Appends a bare line terminator.
    pub fn newline(&mut self) {
        self.out.push('\n');
    }

    /// Returns the buffered text so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consumes the printer and returns the buffered text.
    pub fn into_inner(self) -> String {
        self.out
    }
}
