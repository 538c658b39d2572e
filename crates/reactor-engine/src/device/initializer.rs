use std::sync::{Arc, OnceLock};

use super::context::FunctionTable;
use super::{GlContext, GlInit, GlVersion, InitError, ProcAddress, ProcLoader};

/// Lifecycle of a [`GpuContextInitializer`].
///
/// Moves forward exactly once and is never reset.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GpuContextState {
    Uninitialized,
    Initialized,
    Failed,
}

#[derive(Debug)]
struct Binding {
    table: Arc<FunctionTable>,
    version: Option<GlVersion>,
}

/// One-shot binder for the GL function table.
///
/// The first [`init`](Self::init) call resolves every entry point against the
/// context current on the calling thread. Concurrent callers block until it
/// finishes. Every later call fails with [`InitError::AlreadyInitialized`] or
/// [`InitError::PreviouslyFailed`]; a second [`GlContext`] is never handed out.
#[derive(Debug, Default)]
pub struct GpuContextInitializer {
    outcome: OnceLock<Result<Binding, InitError>>,
}

static PROCESS: GpuContextInitializer = GpuContextInitializer::new();

impl GpuContextInitializer {
    pub const fn new() -> Self {
        Self {
            outcome: OnceLock::new(),
        }
    }

    /// The process-wide initializer used by [`init`](super::init).
    pub fn process() -> &'static GpuContextInitializer {
        &PROCESS
    }

    /// Binds the function table.
    ///
    /// Must run on the thread that owns the current rendering context. On
    /// success the returned [`GlContext`] is the only handle to the table and
    /// cannot leave this thread.
    pub fn init<L>(&self, loader: &L, config: &GlInit) -> Result<GlContext, InitError>
    where
        L: ProcLoader + ?Sized,
    {
        let mut attempted = false;
        let outcome = self.outcome.get_or_init(|| {
            attempted = true;
            bind(loader, config)
        });

        match (attempted, outcome) {
            (true, Ok(binding)) => Ok(GlContext::new(binding.table.clone(), binding.version)),
            (true, Err(err)) => Err(err.clone()),
            (false, Ok(_)) => {
                log::warn!("GL init called again after a successful bind");
                Err(InitError::AlreadyInitialized)
            }
            (false, Err(err)) => Err(InitError::PreviouslyFailed(Box::new(err.clone()))),
        }
    }

    pub fn state(&self) -> GpuContextState {
        match self.outcome.get() {
            None => GpuContextState::Uninitialized,
            Some(Ok(_)) => GpuContextState::Initialized,
            Some(Err(_)) => GpuContextState::Failed,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state() == GpuContextState::Initialized
    }
}

fn bind<L>(loader: &L, config: &GlInit) -> Result<Binding, InitError>
where
    L: ProcLoader + ?Sized,
{
    let result = resolve(loader, config);
    match &result {
        Ok(binding) => match binding.version {
            Some(version) => log::info!(
                "bound {} GL entry points (GL {version})",
                binding.table.len()
            ),
            None => log::info!("bound {} GL entry points", binding.table.len()),
        },
        Err(err) => log::error!("GL init failed: {err}"),
    }
    result
}

fn resolve<L>(loader: &L, config: &GlInit) -> Result<Binding, InitError>
where
    L: ProcLoader + ?Sized,
{
    if !loader.is_current() {
        return Err(InitError::NoCurrentContext);
    }

    let mut table = FunctionTable::default();
    let mut missing = Vec::new();

    for &name in config.required.iter() {
        match ProcAddress::new(loader.get_proc_address(name)) {
            Some(addr) => table.insert(name, addr),
            None => missing.push(name.to_owned()),
        }
    }
    if !missing.is_empty() {
        return Err(InitError::MissingEntryPoints { missing });
    }

    for &name in config.optional.iter() {
        match ProcAddress::new(loader.get_proc_address(name)) {
            Some(addr) => table.insert(name, addr),
            None => log::debug!("optional GL entry point {name} unavailable"),
        }
    }

    let version = match config.min_version {
        None => None,
        Some(required) => {
            // SAFETY: `is_current` confirmed the context is bound to this thread,
            // and `ProcLoader` implementors vouch for both answers.
            let found = unsafe { table.query_version() }.ok_or(InitError::VersionUnavailable)?;
            if found < required {
                return Err(InitError::UnsupportedVersion { required, found });
            }
            Some(found)
        }
    };

    Ok(Binding {
        table: Arc::new(table),
        version,
    })
}
