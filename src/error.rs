use thiserror::Error;

/// The ways a [`Tree`][crate::Tree] operation can fail.
///
/// Everything else on the tree is total: deleting or finding a value that
/// isn't there is a no-op / `None`, not an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// A tree was built from zero values. Construction needs at least one
    /// value to have a root.
    #[error("values should not be empty")]
    EmptyInput,

    /// A depth lookup walked off the tree before matching its value.
    #[error("Node does not exist.")]
    NodeNotFound,
}
