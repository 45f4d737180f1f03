//! Errors produced while displaying a tree or choosing how to walk it.

use std::io;

use thiserror::Error;

/// The ways a tree operation can fail. Building and querying a tree never fails; only writing
/// keys to an output channel can.
#[derive(Error, Debug)]
pub enum TreeError {
    /// The output channel rejected a key.
    #[error("failed to write key to output: {0}")]
    Output(#[from] io::Error),
}

/// Returned when parsing a traversal order from a name it doesn't recognize.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown traversal order `{0}`, expected preorder, inorder, or postorder")]
pub struct ParseOrderError(pub(crate) String);

/// Shorthand for results carrying a [`TreeError`].
pub type Result<T> = std::result::Result<T, TreeError>;
