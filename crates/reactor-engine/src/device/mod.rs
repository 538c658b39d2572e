//! GL context binding.
//!
//! This module is responsible for:
//! - resolving the GL entry points against the context current on the calling thread
//! - failing fast, with every unresolved entry point named, when that is impossible
//! - publishing process-wide readiness once the table is bound
//!
//! Creating windows and contexts is left to the windowing layer, which plugs in
//! through [`ProcLoader`].

mod context;
mod entry_points;
mod error;
mod init;
mod initializer;
mod loader;

pub use context::{GL_VERSION, GlContext, GlVersion};
pub use entry_points::{GL_CORE_ENTRY_POINTS, GL_DEBUG_ENTRY_POINTS};
pub use error::InitError;
pub use init::GlInit;
pub use initializer::{GpuContextInitializer, GpuContextState};
pub use loader::{FnLoader, ProcAddress, ProcLoader};

/// Binds the process-wide GL function table.
///
/// Call once, on the thread that owns the current context, before any GL call.
pub fn init<L>(loader: &L, config: &GlInit) -> Result<GlContext, InitError>
where
    L: ProcLoader + ?Sized,
{
    GpuContextInitializer::process().init(loader, config)
}

/// State of the process-wide initializer.
pub fn state() -> GpuContextState {
    GpuContextInitializer::process().state()
}

/// Whether the process-wide GL function table is bound.
pub fn is_ready() -> bool {
    GpuContextInitializer::process().is_ready()
}
