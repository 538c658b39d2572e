//! Build-time shader bundle.
//!
//! Assets are fixed when the binary is built and exposed through a read-only
//! [`AssetStore`]:
//! - [`ResourceBundle`] holds the path → bytes table in build order
//! - [`AssetStore::open`] returns the exact bytes for a path
//! - [`AssetStore::list`] enumerates paths matching a glob-style pattern
//!
//! The crate's own `shaders/` directory is available as
//! [`AssetStore::embedded`]. Compiling sources into bytecode happens before
//! this crate is built and is not handled here.

mod bundle;
mod embedded;
mod error;
mod pattern;
mod stage;
mod store;

pub use bundle::{BundleBuilder, EmbeddedAsset, ResourceBundle};
pub use error::{AssetError, BundleError};
pub use pattern::PathPattern;
pub use stage::ShaderStage;
pub use store::{AssetStore, Paths, SPIRV_MAGIC};
