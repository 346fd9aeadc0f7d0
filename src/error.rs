//! Defines the error types related to the various phases of typesetting a formula.
//!   - [`AtomError`] : a contract of the atom model was violated (boundary atom in a plain list, script on an atom that forbids it).
//!   - [`TableError`] : a table does not have the shape its environment requires, or its environment names an unknown delimiter ; recoverable, the caller picks a fallback.
//!   - [`FontError`] : the math metrics source could not be read (bad JSON, wrong schema version, no MATH data).
//!
//! Missing optional glyph data (variants, italic corrections, accent attachments, assemblies) is never an error:
//! lookups fall back to documented defaults.

use thiserror::Error;

use crate::atom::AtomType;

/// Result type for the [`AtomError`]
pub type AtomResult<T> = ::std::result::Result<T, AtomError>;
/// Result type for the [`TableError`]
pub type TableResult<T> = ::std::result::Result<T, TableError>;
/// Result type for the [`FontError`]
pub type FontResult<T> = ::std::result::Result<T, FontError>;

/// Violations of the structural contracts of atoms and math lists.
/// These are programming errors on the side of whoever builds the atom tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AtomError {
    /// Boundary atoms may only appear as the boundaries of an inner atom.
    #[error("cannot add an atom of type Boundary to a math list")]
    BoundaryNotAllowed,
    /// Sub- and superscripts are only allowed on atom types ordered before `Boundary`.
    #[error("scripts are not allowed on atoms of type {atom_type:?}")]
    ScriptNotAllowed {
        /// type of the atom that was given a script
        atom_type: AtomType,
    },
    /// The boundaries of an inner atom must be of type `Boundary`.
    #[error("the boundary of an inner atom must be of type Boundary, found {atom_type:?}")]
    InvalidBoundary {
        /// type of the atom used as a boundary
        atom_type: AtomType,
    },
    /// Only atoms of the same type can be fused and the receiving atom must not carry scripts.
    #[error("cannot fuse an atom of type {left:?} with an atom of type {right:?}")]
    FuseMismatch {
        /// the atom receiving the fused nucleus
        left: AtomType,
        /// the atom being fused in
        right: AtomType,
    },
    /// The receiving atom of a fuse already has a sub- or superscript.
    #[error("cannot fuse into an atom of type {atom_type:?} which carries scripts")]
    FuseIntoScripted {
        /// type of the receiving atom
        atom_type: AtomType,
    },
    /// Removal at an index that is not present in the list.
    #[error("index {index} out of bounds for a math list of length {len}")]
    IndexOutOfBounds {
        /// requested index
        index: usize,
        /// length of the list
        len: usize,
    },
}

/// Environment and shape errors raised while building tables.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// Environment requires a fixed number of columns.
    #[error("{environment} environment can only have {expected} columns (found {found})")]
    InvalidColumnCount {
        /// name of the environment, e.g. "cases"
        environment: String,
        /// number of columns the environment requires
        expected: usize,
        /// number of columns the table actually has
        found: usize,
    },
    /// No such environment.
    #[error("Unknown environment {0}")]
    UnknownEnvironment(String),
    /// Environment wraps its table in a delimiter that the delimiter table does not know.
    #[error("{environment} environment uses unknown delimiter {delimiter}")]
    UnknownDelimiter {
        /// name of the environment, e.g. "pmatrix"
        environment: String,
        /// name of the missing delimiter
        delimiter: String,
    },
    /// Wrapping the table in its delimiters broke an atom contract.
    #[error(transparent)]
    Atom(#[from] AtomError),
}

/// Errors having to do with the metrics source provided
#[derive(Error, Debug)]
pub enum FontError {
    /// The metrics document is not valid JSON or does not follow the schema.
    #[error("malformed math table: {0}")]
    Json(#[from] serde_json::Error),
    /// The schema version of the metrics document is not supported.
    #[error("Invalid version of math table: {0}")]
    InvalidVersion(String),
    /// The metrics document has no version tag at all.
    #[error("math table lacks a version tag")]
    MissingVersion,
    /// The font lacks a MATH table.
    #[error("no MATH table")]
    NoMATHTable,
    /// The font file itself could not be parsed by the backend.
    #[error("failed to parse font: {0}")]
    Parse(String),
}

/// A generic error type covering any error that may happen during the process.
#[derive(Error, Debug)]
pub enum Error {
    /// an atom model error
    #[error(transparent)]
    Atom(#[from] AtomError),
    /// a table shape error
    #[error(transparent)]
    Table(#[from] TableError),
    /// a font error
    #[error(transparent)]
    Font(#[from] FontError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_error_names_environment_and_shape() {
        let err = TableError::InvalidColumnCount {
            environment: "cases".to_string(),
            expected: 2,
            found: 3,
        };
        let message = err.to_string();
        assert!(message.contains("cases"));
        assert!(message.contains('2'));
    }

    #[test]
    fn errors_convert_into_umbrella() {
        let err: Error = AtomError::BoundaryNotAllowed.into();
        assert!(matches!(err, Error::Atom(AtomError::BoundaryNotAllowed)));

        let err: Error = FontError::InvalidVersion("1.2".to_string()).into();
        assert_eq!(err.to_string(), "Invalid version of math table: 1.2");
    }
}
