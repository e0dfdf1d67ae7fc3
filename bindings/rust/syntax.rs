//! Parser construction and syntax error collection for SUS sources.

use std::fmt;
use std::ops::Range;

use tree_sitter::{Parser, Tree, TreeCursor};

use crate::{load, LoadError, LoadFailure};

/// Creates a [`Parser`] with the SUS language already set.
pub fn new_parser() -> Result<Parser, LoadError> {
    let language = load()?;
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|_| LoadFailure::incompatible(language.version()))?;
    Ok(parser)
}

/// How the parser failed at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// Text the parser could not fit anywhere (an `ERROR` node).
    Unexpected,
    /// A token the parser inserted to recover (a `MISSING` node).
    Missing,
}

/// An `ERROR` or `MISSING` node found in a parsed tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Whether text was unexpected or a token was missing.
    pub kind: SyntaxErrorKind,
    /// Kind of the offending node, `ERROR` or the missing token.
    pub node_kind: &'static str,
    /// Kind of the enclosing node, `None` at the root.
    pub parent_kind: Option<&'static str>,
    /// Field the node occupies in its parent.
    pub field: Option<&'static str>,
    /// Source span; empty for missing tokens.
    pub byte_range: Range<usize>,
}

impl SyntaxError {
    fn at(cursor: &TreeCursor<'_>) -> Self {
        let node = cursor.node();
        let kind = if node.is_missing() {
            SyntaxErrorKind::Missing
        } else {
            SyntaxErrorKind::Unexpected
        };
        // Node::parent can skip past the real parent of a zero-width MISSING
        // node; the cursor keeps the path it walked.
        let mut up = cursor.clone();
        let parent_kind = up.goto_parent().then(|| up.node().kind());
        Self {
            kind,
            node_kind: node.kind(),
            parent_kind,
            field: cursor.field_name(),
            byte_range: node.byte_range(),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(parent) = self.parent_kind {
            write!(f, "While parsing '{parent}', parser")?;
        } else {
            write!(f, "Parser")?;
        }
        match self.kind {
            SyntaxErrorKind::Unexpected => write!(f, " found a syntax error")?,
            SyntaxErrorKind::Missing => write!(f, " found a missing field")?,
        }
        match self.field {
            Some(field) => write!(f, " in the field '{field}' of type '{}'", self.node_kind),
            None => write!(f, " in a node of type '{}'", self.node_kind),
        }
    }
}

/// Collects every `ERROR` and `MISSING` node of `tree` in document order.
///
/// The subtree below an `ERROR` node is not searched further.
pub fn syntax_errors(tree: &Tree) -> Vec<SyntaxError> {
    let mut errors = Vec::new();
    if !tree.root_node().has_error() {
        return errors;
    }

    let mut cursor = tree.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            let error = SyntaxError::at(&cursor);
            tracing::trace!(
                kind = ?error.kind,
                node = error.node_kind,
                start = error.byte_range.start,
                end = error.byte_range.end,
                "syntax error"
            );
            errors.push(error);
        } else if node.has_error() && cursor.goto_first_child() {
            continue;
        }

        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                return errors;
            }
        }
    }
}
