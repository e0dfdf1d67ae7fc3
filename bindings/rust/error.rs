//! Errors raised while turning the generated grammar into a usable language.

use thiserror::Error;

/// The grammar artifact could not be adapted into a [`tree_sitter::Language`].
///
/// The message is fixed; the underlying reason is available through
/// [`LoadError::failure`] or [`std::error::Error::source`].
#[derive(Debug, Error)]
#[error("Error loading Sus grammar")]
pub struct LoadError {
    #[source]
    failure: LoadFailure,
}

impl LoadError {
    /// Why the grammar failed to load.
    #[must_use]
    pub fn failure(&self) -> &LoadFailure {
        &self.failure
    }
}

impl From<LoadFailure> for LoadError {
    fn from(failure: LoadFailure) -> Self {
        Self { failure }
    }
}

/// Reasons a grammar descriptor is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadFailure {
    #[error("the grammar accessor returned a null language descriptor")]
    NullDescriptor,

    #[error("grammar ABI version {found} is outside the supported range {min}..={max}")]
    IncompatibleVersion {
        found: usize,
        min: usize,
        max: usize,
    },
}

impl LoadFailure {
    pub(crate) fn incompatible(found: usize) -> Self {
        Self::IncompatibleVersion {
            found,
            min: tree_sitter::MIN_COMPATIBLE_LANGUAGE_VERSION,
            max: tree_sitter::LANGUAGE_VERSION,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn message_is_fixed_regardless_of_failure() {
        let null = LoadError::from(LoadFailure::NullDescriptor);
        let version = LoadError::from(LoadFailure::incompatible(99));

        assert_eq!(null.to_string(), "Error loading Sus grammar");
        assert_eq!(version.to_string(), "Error loading Sus grammar");
    }

    #[test]
    fn failure_is_exposed_as_source() {
        let err = LoadError::from(LoadFailure::incompatible(99));

        let source = err.source().map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some(
                format!(
                    "grammar ABI version 99 is outside the supported range {}..={}",
                    tree_sitter::MIN_COMPATIBLE_LANGUAGE_VERSION,
                    tree_sitter::LANGUAGE_VERSION
                )
                .as_str()
            )
        );
        assert_eq!(err.failure(), &LoadFailure::incompatible(99));
    }
}
