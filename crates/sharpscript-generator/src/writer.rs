//! Indenting text sink for generated script.

use std::fmt;

/// Forward-only script text buffer with indentation tracking.
///
/// Indentation is written lazily at the start of each non-empty line, so
/// blank lines carry no trailing whitespace and multi-line writes are
/// indented line by line.
///
/// # Example
///
/// ```
/// use sharpscript_generator::ScriptWriter;
///
/// let mut writer = ScriptWriter::new(2);
/// writer.write_line("function() {");
/// writer.indent();
/// writer.write_line("return 1;");
/// writer.outdent();
/// writer.write_line("}");
///
/// assert_eq!(writer.as_str(), "function() {\n  return 1;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct ScriptWriter {
    output: String,
    indent_level: usize,
    indent_width: usize,
    at_line_start: bool,
}

impl Default for ScriptWriter {
    fn default() -> Self {
        Self::new(2)
    }
}

impl ScriptWriter {
    /// Create an empty writer using `indent_width` spaces per level.
    pub fn new(indent_width: usize) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_width,
            at_line_start: true,
        }
    }

    /// Current indentation depth.
    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Enter a nested block.
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Leave a nested block.
    pub fn outdent(&mut self) {
        debug_assert!(self.indent_level > 0, "outdent below zero");
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Write text. Embedded newlines start new (indented) lines.
    pub fn write(&mut self, text: &str) {
        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            self.write_fragment(first);
        }
        for line in lines {
            self.new_line();
            self.write_fragment(line);
        }
    }

    /// Write text followed by a newline.
    pub fn write_line(&mut self, text: &str) {
        self.write(text);
        self.new_line();
    }

    /// End the current line.
    pub fn new_line(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// True if nothing has been written on the current line yet.
    pub fn at_line_start(&self) -> bool {
        self.at_line_start
    }

    /// The text written so far.
    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Consume the writer, returning its text.
    pub fn into_string(self) -> String {
        self.output
    }

    fn write_fragment(&mut self, fragment: &str) {
        if fragment.is_empty() {
            return;
        }
        if self.at_line_start {
            let width = self.indent_level * self.indent_width;
            self.output.extend(std::iter::repeat_n(' ', width));
            self.at_line_start = false;
        }
        self.output.push_str(fragment);
    }
}

impl fmt::Write for ScriptWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write(s);
        Ok(())
    }
}
