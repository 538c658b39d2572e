//! Reactor engine bootstrap crate.
//!
//! Owns the two pieces every renderer needs before its first draw call:
//! - [`assets`]: the shader bundle embedded at build time
//! - [`device`]: the one-shot GL function table bind against the current context
//!
//! ```no_run
//! use reactor_engine::assets::AssetStore;
//! use reactor_engine::device::{self, FnLoader, GlInit};
//! # fn get_proc_address(_: &str) -> *const std::ffi::c_void { std::ptr::null() }
//! # fn context_is_current() -> bool { false }
//!
//! // SAFETY: both functions come from the windowing layer that owns the context.
//! let loader = unsafe { FnLoader::new(get_proc_address, context_is_current) };
//! let gl = device::init(&loader, &GlInit::default()).expect("GL bind failed");
//! let vert = AssetStore::embedded().open_str("shaders/basic.vert").unwrap();
//! # let _ = (gl, vert);
//! ```

pub mod assets;
pub mod device;
pub mod logging;
