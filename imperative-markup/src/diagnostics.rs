//! Non-fatal warnings raised while building.
//!
//! The builder never fails: conditions it cannot honour are reported to a
//! [`DiagnosticSink`] and skipped. The default sink forwards to the `log`
//! facade; tests collect diagnostics in memory.

use std::cell::RefCell;
use std::fmt;

/// Log target used by [`LogSink`].
pub const LOG_TARGET: &str = "imperative_markup::build";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A `class` bag value that is neither a string nor iterable.
    InvalidClassValue { value: String, tag_name: String },
    /// `apply_to` was given something that is not an element or fragment.
    InvalidApplyTarget,
    /// `replace_with` was called without a node to replace.
    MissingReplaceContext,
    /// The node to replace is no longer attached to a parent.
    DetachedReplaceTarget,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::InvalidClassValue { value, tag_name } => {
                write!(f, "Invalid class value \"{value}\" on {tag_name} element.")
            }
            Diagnostic::InvalidApplyTarget => f.write_str(
                "Couldn't apply to provided argument because it's not an element or DocumentFragment.",
            ),
            Diagnostic::MissingReplaceContext => f.write_str(
                "Couldn't replace script because no script is currently being parsed and executed, maybe this is happening in a callback function or event handler instead?",
            ),
            Diagnostic::DetachedReplaceTarget => f.write_str(
                "Couldn't replace script element because it is not attached to a parent anymore, did you try to replace the same script more than once?",
            ),
        }
    }
}

pub trait DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `log::warn!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: Diagnostic) {
        log::warn!(target: LOG_TARGET, "{diagnostic}");
    }
}

/// Keeps every diagnostic in memory, in report order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    pub fn take(&self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }
}
