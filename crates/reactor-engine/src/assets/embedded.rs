use std::sync::OnceLock;

use rust_embed::RustEmbed;

use super::{AssetStore, BundleError, ResourceBundle};

/// Shader tree compiled into the binary.
///
/// `debug-embed` is enabled on the dependency so debug builds embed as well;
/// nothing is read from disk at runtime.
#[derive(RustEmbed)]
#[folder = "shaders/"]
#[prefix = "shaders/"]
struct ShaderAssets;

static EMBEDDED: OnceLock<AssetStore> = OnceLock::new();

impl AssetStore {
    /// The store holding the crate's `shaders/` directory.
    ///
    /// Built once on first access and immutable afterwards.
    ///
    /// # Panics
    /// If the embedded tree does not form a valid bundle. rust-embed paths come
    /// from a directory walk, so this only happens with a broken build.
    pub fn embedded() -> &'static AssetStore {
        EMBEDDED.get_or_init(|| embedded_store(embedded_bundle()))
    }
}

fn embedded_bundle() -> Result<ResourceBundle, BundleError> {
    let mut builder = ResourceBundle::builder();
    for path in ShaderAssets::iter() {
        let Some(file) = ShaderAssets::get(&path) else {
            continue;
        };
        builder = builder.insert(path.into_owned(), file.data)?;
    }
    Ok(builder.build())
}

fn embedded_store(bundle: Result<ResourceBundle, BundleError>) -> AssetStore {
    match bundle {
        Ok(bundle) => {
            log::debug!("embedded shader bundle loaded ({} assets)", bundle.len());
            AssetStore::new(bundle)
        }
        Err(err) => panic!("embedded shader bundle rejected, the build is broken: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_tree_forms_a_bundle() {
        let store = embedded_store(embedded_bundle());
        assert!(store.contains("shaders/basic.vert"));
    }

    #[test]
    #[should_panic(expected = "embedded shader bundle rejected")]
    fn malformed_bundle_fails_loudly() {
        let bundle = ResourceBundle::builder()
            .insert("shaders/basic.vert", &b"a"[..])
            .and_then(|b| b.insert("shaders/basic.vert", &b"b"[..]))
            .map(|b| b.build());
        embedded_store(bundle);
    }
}
