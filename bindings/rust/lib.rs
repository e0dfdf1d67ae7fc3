//! Rust bindings for the `tree-sitter-sus` grammar.
//!
//! This follows the standard layout used by Tree-sitter grammars: the
//! generated parser in `src/parser.c` is compiled by the build script and
//! linked statically, and [`language`] hands out the resulting
//! `tree_sitter::Language` handle.
//!
//! ```
//! let mut parser = tree_sitter::Parser::new();
//! parser
//!     .set_language(&tree_sitter_sus::language())
//!     .expect("Error loading Sus grammar");
//! let tree = parser.parse("module m {}\n", None).unwrap();
//! assert!(!tree.root_node().has_error());
//! ```

mod error;
mod syntax;

use tree_sitter::ffi::TSLanguage;
use tree_sitter::Language;

pub use error::{LoadError, LoadFailure};
pub use syntax::{new_parser, syntax_errors, SyntaxError, SyntaxErrorKind};

extern "C" {
    fn tree_sitter_sus() -> *const TSLanguage;
}

/// Name the grammar was generated under.
pub const GRAMMAR_NAME: &str = "sus";

/// The syntax highlighting query for this language.
pub const HIGHLIGHTS_QUERY: &str = include_str!("../../queries/highlights.scm");

/// Returns the raw descriptor exported by the generated parser.
pub fn raw_language() -> *const TSLanguage {
    unsafe { tree_sitter_sus() }
}

/// Converts a raw descriptor into a [`Language`], checking that it is present
/// and that its ABI version is one the linked runtime understands.
///
/// # Safety
///
/// `raw` must either be null or point to a `TSLanguage` that stays valid for
/// the rest of the process, such as the one returned by [`raw_language`].
pub unsafe fn adapt(raw: *const TSLanguage) -> Result<Language, LoadError> {
    if raw.is_null() {
        tracing::warn!(grammar = GRAMMAR_NAME, "null language descriptor");
        return Err(LoadFailure::NullDescriptor.into());
    }

    // SAFETY: non-null, and valid per the caller's contract.
    let language = unsafe { Language::from_raw(raw) };
    let version = language.version();
    if !(tree_sitter::MIN_COMPATIBLE_LANGUAGE_VERSION..=tree_sitter::LANGUAGE_VERSION)
        .contains(&version)
    {
        tracing::warn!(grammar = GRAMMAR_NAME, version, "incompatible grammar ABI");
        return Err(LoadFailure::incompatible(version).into());
    }

    tracing::debug!(
        grammar = GRAMMAR_NAME,
        version,
        node_kinds = language.node_kind_count(),
        fields = language.field_count(),
        "adapted grammar"
    );
    Ok(language)
}

/// Loads the statically linked grammar, reporting a [`LoadError`] if the
/// artifact is unusable.
pub fn load() -> Result<Language, LoadError> {
    // SAFETY: the descriptor lives in static storage of the linked parser.
    unsafe { adapt(raw_language()) }
}

/// Returns the Tree-sitter [`Language`] for this grammar.
///
/// # Panics
///
/// If the linked grammar artifact fails [`load`].
pub fn language() -> Language {
    load().expect("Error loading Sus grammar")
}
