/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Indentation-aware text buffer.
//!
//! [`IndentedBuffer`] accumulates generated source text. Every line written
//! through it is prefixed with the indent unit repeated once per nesting
//! level. Content is append-only.

use std::fmt;

/// Default indent unit (two spaces).
pub const DEFAULT_INDENT: &str = "  ";

/// Default line terminator.
pub const DEFAULT_LINE_TERMINATOR: &str = "\n";

/// Append-only text buffer with a nesting depth.
#[derive(Debug, Clone)]
pub struct IndentedBuffer {
    content: String,
    depth: usize,
    indent_unit: String,
    line_terminator: String,
}

impl IndentedBuffer {
    /// Creates an empty buffer with two-space indentation and `\n` line endings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_style(DEFAULT_INDENT, DEFAULT_LINE_TERMINATOR)
    }

    /// Creates an empty buffer with the given indent unit and line terminator.
    ///
    /// # Arguments
    /// * `indent_unit` - Text emitted once per nesting level
    /// * `line_terminator` - Text appended by [`writeln`](Self::writeln)
    #[must_use]
    pub fn with_style(indent_unit: impl Into<String>, line_terminator: impl Into<String>) -> Self {
        Self {
            content: String::new(),
            depth: 0,
            indent_unit: indent_unit.into(),
            line_terminator: line_terminator.into(),
        }
    }

    /// Increases the nesting depth by one.
    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Decreases the nesting depth by one. No-op at depth zero.
    pub fn unindent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns the current nesting depth.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Writes the indentation for the current depth followed by `text`.
    ///
    /// An empty `text` still emits the indentation.
    ///
    /// # Returns
    /// The number of characters appended.
    pub fn write(&mut self, text: &str) -> usize {
        for _ in 0..self.depth {
            self.content.push_str(&self.indent_unit);
        }
        self.content.push_str(text);

        self.depth * self.indent_unit.chars().count() + text.chars().count()
    }

    /// Writes `text` like [`write`](Self::write), then the line terminator.
    ///
    /// The terminator itself is never indented.
    ///
    /// # Returns
    /// The number of characters appended, terminator included.
    pub fn writeln(&mut self, text: &str) -> usize {
        let n = self.write(text);
        self.content.push_str(&self.line_terminator);
        n + self.line_terminator.chars().count()
    }

    /// Returns everything written so far.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Returns true if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Consumes the buffer, returning its content.
    #[must_use]
    pub fn into_string(self) -> String {
        self.content
    }
}

impl Default for IndentedBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for IndentedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}
