use std::ffi::c_void;
use std::ptr::NonNull;

/// Platform seam for resolving GL entry points.
///
/// Implemented by the windowing layer (GLX/EGL/WGL/CGL) or by a mock in tests.
/// Both methods are only meaningful on the thread that owns the context.
///
/// # Safety
/// The bind calls resolved functions (`glGetString`) after asking this trait.
/// Implementors must guarantee that:
/// - `is_current` returns `true` only while a rendering context is bound to
///   the calling thread
/// - every non-null address returned by `get_proc_address` is the real entry
///   point for `symbol` in that context
pub unsafe trait ProcLoader {
    /// Whether a rendering context is current on the calling thread.
    fn is_current(&self) -> bool;

    /// Looks up `symbol` in the current context. Null means "not available".
    fn get_proc_address(&self, symbol: &str) -> *const c_void;
}

// SAFETY: forwards to an implementation that upholds the contract.
unsafe impl<T: ProcLoader + ?Sized> ProcLoader for &T {
    fn is_current(&self) -> bool {
        (**self).is_current()
    }

    fn get_proc_address(&self, symbol: &str) -> *const c_void {
        (**self).get_proc_address(symbol)
    }
}

/// A resolved, non-null entry point address.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ProcAddress(NonNull<c_void>);

// Entry point addresses are plain code addresses shared by the whole process;
// only *calling* them is tied to the context thread, which `GlContext` enforces.
unsafe impl Send for ProcAddress {}
unsafe impl Sync for ProcAddress {}

impl ProcAddress {
    /// Accepts a raw lookup result.
    ///
    /// Besides null, `wglGetProcAddress` reports failure as 1, 2, 3 or -1;
    /// those are rejected on every platform.
    pub fn new(ptr: *const c_void) -> Option<Self> {
        match ptr as isize {
            0 | 1 | 2 | 3 | -1 => None,
            _ => NonNull::new(ptr.cast_mut()).map(Self),
        }
    }

    pub fn as_ptr(self) -> *const c_void {
        self.0.as_ptr()
    }
}

/// Adapts a windowing layer's closures into a [`ProcLoader`].
///
/// `load` is the platform `get_proc_address`; `is_current` asks the platform
/// whether a context is bound to the calling thread (`eglGetCurrentContext`,
/// `glXGetCurrentContext`, `wglGetCurrentContext`, ...).
pub struct FnLoader<L, C> {
    load: L,
    is_current: C,
}

impl<L, C> FnLoader<L, C>
where
    L: Fn(&str) -> *const c_void,
    C: Fn() -> bool,
{
    /// # Safety
    /// `is_current` must report the real binding state of the calling thread,
    /// and `load` must return genuine entry points of that context (or null).
    /// See [`ProcLoader`].
    pub unsafe fn new(load: L, is_current: C) -> Self {
        Self { load, is_current }
    }
}

// SAFETY: `FnLoader::new` puts the same obligations on its caller.
unsafe impl<L, C> ProcLoader for FnLoader<L, C>
where
    L: Fn(&str) -> *const c_void,
    C: Fn() -> bool,
{
    fn is_current(&self) -> bool {
        (self.is_current)()
    }

    fn get_proc_address(&self, symbol: &str) -> *const c_void {
        (self.load)(symbol)
    }
}
