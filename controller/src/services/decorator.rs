//! Output decoration with a feature-detected enhancement
//!
//! Mirrors the page variants' optional animation layer: the enhancement is
//! loaded only when the environment supports it, and when it is not, the
//! identity decorator stands in transparently. Nothing in the submission
//! flow depends on which decorator is active.

use tracing::debug;

use crate::traits::StatusDecorator;

/// No-op decorator; the default capability
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityDecorator;

impl StatusDecorator for IdentityDecorator {
    fn decorate(&self, line: &str) -> String {
        line.to_string()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

/// ANSI emphasis for capable terminals
#[derive(Clone, Copy, Debug, Default)]
pub struct AnsiDecorator;

impl AnsiDecorator {
    /// Whether the current terminal can render ANSI sequences
    pub fn supported() -> bool {
        if std::env::var_os("NO_COLOR").is_some() {
            return false;
        }
        match std::env::var("TERM") {
            Ok(term) => !term.is_empty() && term != "dumb",
            Err(_) => false,
        }
    }
}

impl StatusDecorator for AnsiDecorator {
    fn decorate(&self, line: &str) -> String {
        format!("\x1b[1m{line}\x1b[0m")
    }

    fn name(&self) -> &'static str {
        "ansi"
    }
}

/// Select the best available decorator, falling back to identity
pub fn detect_decorator() -> Box<dyn StatusDecorator> {
    if AnsiDecorator::supported() {
        debug!("ANSI decoration enabled");
        Box::new(AnsiDecorator)
    } else {
        debug!("ANSI decoration unavailable, using identity decorator");
        Box::new(IdentityDecorator)
    }
}
