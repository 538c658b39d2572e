use std::collections::HashMap;
use std::ffi::{CStr, c_char, c_void};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use std::thread::ThreadId;

use super::ProcAddress;

/// `GL_VERSION` token for `glGetString`.
pub const GL_VERSION: u32 = 0x1F02;

type GetStringFn = unsafe extern "system" fn(u32) -> *const c_char;

/// `major.minor` of a GL or GL ES implementation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct GlVersion {
    pub major: u32,
    pub minor: u32,
}

impl GlVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parses a `GL_VERSION` string.
    ///
    /// Desktop drivers report `"<major>.<minor>[.<release>] <vendor info>"`,
    /// GL ES drivers prefix it with `"OpenGL ES "` (and sometimes a profile
    /// such as `"OpenGL ES-CM "`).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim_start();
        let s = match s.strip_prefix("OpenGL ES") {
            Some(rest) => rest.split_once(' ').map_or("", |(_, v)| v),
            None => s,
        };

        let number = s.split_whitespace().next()?;
        let mut parts = number.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts
            .next()?
            .chars()
            .take_while(char::is_ascii_digit)
            .collect::<String>()
            .parse()
            .ok()?;
        Some(Self { major, minor })
    }
}

impl fmt::Display for GlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Resolved entry points, keyed by symbol name.
#[derive(Debug, Default)]
pub(crate) struct FunctionTable {
    entries: HashMap<&'static str, ProcAddress>,
}

impl FunctionTable {
    pub(crate) fn insert(&mut self, name: &'static str, addr: ProcAddress) {
        self.entries.insert(name, addr);
    }

    pub(crate) fn get(&self, name: &str) -> Option<ProcAddress> {
        self.entries.get(name).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Calls the resolved `glGetString(GL_VERSION)`.
    ///
    /// # Safety
    /// The context the table was resolved against must be current on the
    /// calling thread.
    pub(crate) unsafe fn query_version(&self) -> Option<GlVersion> {
        let addr = self.get("glGetString")?;
        // SAFETY: the address was resolved for `glGetString`, whose ABI is `GetStringFn`.
        let get_string: GetStringFn = unsafe { std::mem::transmute(addr.as_ptr()) };
        // SAFETY: caller guarantees the owning context is current.
        let raw = unsafe { get_string(GL_VERSION) };
        if raw.is_null() {
            return None;
        }
        // SAFETY: GL returns a static, NUL-terminated string.
        let s = unsafe { CStr::from_ptr(raw) }.to_str().ok()?;
        GlVersion::parse(s)
    }
}

/// A bound GL function table, usable only on the thread that created it.
///
/// Returned by [`GpuContextInitializer::init`](super::GpuContextInitializer::init)
/// and meant to be passed to every piece of code that issues GL calls. The
/// type is neither `Send` nor `Sync`.
pub struct GlContext {
    table: Arc<FunctionTable>,
    version: Option<GlVersion>,
    owner: ThreadId,
    _not_send: PhantomData<*const ()>,
}

impl GlContext {
    pub(crate) fn new(table: Arc<FunctionTable>, version: Option<GlVersion>) -> Self {
        Self {
            table,
            version,
            owner: std::thread::current().id(),
            _not_send: PhantomData,
        }
    }

    /// Address of a resolved entry point, if it was part of the bind.
    pub fn proc_address(&self, name: &str) -> Option<ProcAddress> {
        self.table.get(name)
    }

    /// Whether `name` resolved during the bind.
    pub fn has(&self, name: &str) -> bool {
        self.table.get(name).is_some()
    }

    /// Returns a resolved entry point as a typed function pointer.
    ///
    /// # Safety
    /// `F` must be an `extern "system" fn` type matching the real signature of
    /// `name`, and it may only be called while this context is current.
    /// A non-pointer-sized `F` is rejected at compile time.
    pub unsafe fn function<F: Copy>(&self, name: &str) -> Option<F> {
        const {
            assert!(
                size_of::<F>() == size_of::<*const c_void>(),
                "GlContext::function requires a function pointer type"
            )
        };
        let ptr = self.proc_address(name)?.as_ptr();
        // SAFETY: sizes match; the caller guarantees `F` is the right fn type.
        Some(unsafe { std::mem::transmute_copy::<*const c_void, F>(&ptr) })
    }

    /// Version reported by the driver during the bind, when it was queried.
    pub fn version(&self) -> Option<GlVersion> {
        self.version
    }

    pub fn entry_point_count(&self) -> usize {
        self.table.len()
    }

    /// Thread the context was bound on.
    pub fn owner(&self) -> ThreadId {
        self.owner
    }
}

impl fmt::Debug for GlContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlContext")
            .field("entry_points", &self.table.len())
            .field("version", &self.version)
            .field("owner", &self.owner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_desktop_versions() {
        assert_eq!(GlVersion::parse("4.6.0 NVIDIA 535.54.03"), Some(GlVersion::new(4, 6)));
        assert_eq!(GlVersion::parse("4.1 Metal - 83.1"), Some(GlVersion::new(4, 1)));
        assert_eq!(
            GlVersion::parse("4.5 (Core Profile) Mesa 23.2.1"),
            Some(GlVersion::new(4, 5))
        );
        assert_eq!(GlVersion::parse("3.3.0"), Some(GlVersion::new(3, 3)));
    }

    #[test]
    fn parse_es_versions() {
        assert_eq!(GlVersion::parse("OpenGL ES 3.2 Mesa 23.2.1"), Some(GlVersion::new(3, 2)));
        assert_eq!(GlVersion::parse("OpenGL ES-CM 1.1"), Some(GlVersion::new(1, 1)));
    }

    #[test]
    fn parse_garbage() {
        assert_eq!(GlVersion::parse(""), None);
        assert_eq!(GlVersion::parse("banana"), None);
        assert_eq!(GlVersion::parse("4"), None);
        assert_eq!(GlVersion::parse("OpenGL ES"), None);
    }

    #[test]
    fn versions_order() {
        assert!(GlVersion::new(3, 3) < GlVersion::new(4, 1));
        assert!(GlVersion::new(4, 1) < GlVersion::new(4, 10));
        assert_eq!(GlVersion::new(4, 1).to_string(), "4.1");
    }

    extern "system" fn fake_clear(_mask: u32) {}

    #[test]
    fn typed_function_lookup() {
        let mut table = FunctionTable::default();
        let addr = ProcAddress::new(fake_clear as *const c_void).unwrap();
        table.insert("glClear", addr);
        let ctx = GlContext::new(Arc::new(table), None);

        let clear: extern "system" fn(u32) = unsafe { ctx.function("glClear") }.unwrap();
        clear(0x4000);
        assert!(unsafe { ctx.function::<extern "system" fn(u32)>("glFlush") }.is_none());
        assert_eq!(ctx.owner(), std::thread::current().id());
        assert_eq!(ctx.entry_point_count(), 1);
    }
}
