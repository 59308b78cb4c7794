use thiserror::Error;

/// A group member that the library namespace does not expose.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("module '{namespace}' has no attribute '{name}'")]
pub struct UnresolvedReference {
    pub namespace: String,
    pub name: String,
}
