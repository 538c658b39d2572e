use thiserror::Error;

/// Error returned by [`AssetStore`](super::AssetStore) lookups.
///
/// `NotFound` is an ordinary control-flow result; callers pick their own fallback.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("asset not found: {path}")]
    NotFound { path: String },

    #[error("asset is not valid UTF-8: {path}")]
    NotUtf8 { path: String },

    #[error("asset is not a SPIR-V module: {path} ({reason})")]
    InvalidSpirv { path: String, reason: &'static str },
}

/// Error returned while assembling a [`ResourceBundle`](super::ResourceBundle).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BundleError {
    #[error("invalid asset path {path:?}: {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("duplicate asset path: {path}")]
    DuplicatePath { path: String },
}
