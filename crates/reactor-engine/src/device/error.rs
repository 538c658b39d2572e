use thiserror::Error;

use super::GlVersion;

/// Fatal failure while binding the GL function table.
///
/// None of these are retried internally. The host decides whether to abort
/// the render path or the whole process; continuing with a partially bound
/// table is never an option offered by this crate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InitError {
    /// The calling thread has no current rendering context.
    #[error("no rendering context is current on the calling thread")]
    NoCurrentContext,

    /// One or more required entry points did not resolve.
    #[error("failed to resolve GL entry points: {}", .missing.join(", "))]
    MissingEntryPoints { missing: Vec<String> },

    /// `glGetString(GL_VERSION)` returned nothing usable.
    #[error("GL_VERSION is unavailable or unparsable")]
    VersionUnavailable,

    #[error("GL {found} is older than the required {required}")]
    UnsupportedVersion { required: GlVersion, found: GlVersion },

    /// `init` was called after an earlier call succeeded.
    #[error("GL context is already initialized")]
    AlreadyInitialized,

    /// `init` was called after an earlier call failed.
    #[error("GL context initialization previously failed: {0}")]
    PreviouslyFailed(Box<InitError>),
}

impl InitError {
    /// The error that actually stopped binding, looking through
    /// [`PreviouslyFailed`](Self::PreviouslyFailed).
    pub fn root_cause(&self) -> &InitError {
        match self {
            Self::PreviouslyFailed(inner) => inner.root_cause(),
            other => other,
        }
    }
}
