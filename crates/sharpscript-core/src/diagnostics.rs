//! Error reporting for the compiler back end.
//!
//! Components that can fail softly (the reference resolver) never return
//! their errors directly. They report each one to an [`ErrorHandler`] as
//! it is discovered and keep going, so a single call can surface every
//! problem at once.

use std::fmt;

/// Receives errors as they are discovered.
pub trait ErrorHandler {
    /// Report one error.
    ///
    /// `location` names where the error applies (usually a file), if known.
    fn report_error(&mut self, message: &str, location: Option<&str>);
}

/// A single reported error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The error message text
    pub message: String,
    /// Where the error applies, if known
    pub location: Option<String>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{location}: error: {}", self.message),
            None => write!(f, "error: {}", self.message),
        }
    }
}

/// A collecting [`ErrorHandler`].
///
/// `Diagnostics` keeps every reported error in report order.
///
/// # Examples
///
/// ```
/// use sharpscript_core::{Diagnostics, ErrorHandler};
///
/// let mut diagnostics = Diagnostics::new();
/// diagnostics.report_error("The 'mscorlib' assembly must be referenced.", None);
///
/// assert!(diagnostics.has_errors());
/// assert_eq!(diagnostics.error_count(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates a new, empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if any error was reported.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Returns the number of reported errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns an iterator over the reported errors, in report order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Returns `true` if any reported message contains `text`.
    pub fn contains(&self, text: &str) -> bool {
        self.diagnostics.iter().any(|d| d.message.contains(text))
    }

    /// Removes all reported errors.
    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}

impl ErrorHandler for Diagnostics {
    fn report_error(&mut self, message: &str, location: Option<&str>) {
        self.diagnostics.push(Diagnostic {
            message: message.to_string(),
            location: location.map(str::to_string),
        });
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_in_report_order() {
        let mut diagnostics = Diagnostics::new();
        assert!(!diagnostics.has_errors());

        diagnostics.report_error("first", Some("a.toml"));
        diagnostics.report_error("second", None);

        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, ["first", "second"]);
        assert_eq!(diagnostics.error_count(), 2);
        assert!(diagnostics.contains("sec"));
    }

    #[test]
    fn display_includes_location() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.report_error("broken", Some("lib/Foo.toml"));
        diagnostics.report_error("also broken", None);

        assert_eq!(
            diagnostics.to_string(),
            "lib/Foo.toml: error: broken\nerror: also broken"
        );
    }

    #[test]
    fn clear_resets() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.report_error("oops", None);
        diagnostics.clear();
        assert!(!diagnostics.has_errors());
        assert_eq!(diagnostics.error_count(), 0);
    }
}
