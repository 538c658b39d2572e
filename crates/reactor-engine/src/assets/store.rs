use std::borrow::Cow;

use super::{AssetError, EmbeddedAsset, PathPattern, ResourceBundle};

/// First word of every SPIR-V module.
pub const SPIRV_MAGIC: u32 = 0x0723_0203;

/// Read-only, path-addressable view over a [`ResourceBundle`].
///
/// The store has no write path. Content is fixed when the bundle is built, so
/// every lookup is a pure read and the store can be shared freely across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct AssetStore {
    bundle: ResourceBundle,
}

impl AssetStore {
    pub fn new(bundle: ResourceBundle) -> Self {
        Self { bundle }
    }

    /// Returns the exact bytes bound to `path`.
    ///
    /// Lookup is exact: no separator normalization, no case folding.
    pub fn open(&self, path: &str) -> Result<&[u8], AssetError> {
        self.bundle
            .get(path)
            .map(EmbeddedAsset::content)
            .ok_or_else(|| AssetError::NotFound {
                path: path.to_owned(),
            })
    }

    /// Returns the asset as text, for GLSL and other source shaders.
    pub fn open_str(&self, path: &str) -> Result<&str, AssetError> {
        let bytes = self.open(path)?;
        std::str::from_utf8(bytes).map_err(|_| AssetError::NotUtf8 {
            path: path.to_owned(),
        })
    }

    /// Returns the asset as SPIR-V words.
    ///
    /// Borrows when the embedded bytes happen to be 4-byte aligned, copies
    /// otherwise. The magic number is checked in native byte order.
    pub fn open_spirv(&self, path: &str) -> Result<Cow<'_, [u32]>, AssetError> {
        let bytes = self.open(path)?;
        let invalid = |reason| AssetError::InvalidSpirv {
            path: path.to_owned(),
            reason,
        };

        if bytes.is_empty() || bytes.len() % 4 != 0 {
            return Err(invalid("length is not a non-zero multiple of 4"));
        }

        let words: Cow<'_, [u32]> = match bytemuck::try_cast_slice::<u8, u32>(bytes) {
            Ok(words) => Cow::Borrowed(words),
            Err(_) => Cow::Owned(bytemuck::pod_collect_to_vec(bytes)),
        };

        if words[0] != SPIRV_MAGIC {
            return Err(invalid("bad magic number"));
        }
        Ok(words)
    }

    /// Lists paths matching a glob-style pattern, in build order.
    ///
    /// The iterator is lazy and `Clone`, so it can be restarted; see
    /// [`PathPattern`] for the grammar.
    pub fn list(&self, pattern: &str) -> Paths<'_> {
        Paths {
            assets: self.bundle.iter(),
            pattern: PathPattern::new(pattern),
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.bundle.contains(path)
    }

    pub fn len(&self) -> usize {
        self.bundle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundle.is_empty()
    }

    /// All assets in build order.
    pub fn iter(&self) -> std::slice::Iter<'_, EmbeddedAsset> {
        self.bundle.iter()
    }
}

impl From<ResourceBundle> for AssetStore {
    fn from(bundle: ResourceBundle) -> Self {
        Self::new(bundle)
    }
}

/// Iterator returned by [`AssetStore::list`].
#[derive(Debug, Clone)]
pub struct Paths<'a> {
    assets: std::slice::Iter<'a, EmbeddedAsset>,
    pattern: PathPattern,
}

impl<'a> Iterator for Paths<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let pattern = &self.pattern;
        self.assets
            .by_ref()
            .map(EmbeddedAsset::path)
            .find(|path| pattern.matches(path))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.assets.len()))
    }
}

impl std::iter::FusedIterator for Paths<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    const VERT: &[u8] = b"#version 410 core\nvoid main() {}\n";
    const FRAG: &[u8] = b"#version 410 core\nout vec4 c;\nvoid main() { c = vec4(1); }\n";

    fn store() -> AssetStore {
        ResourceBundle::builder()
            .insert("shaders/basic.vert", VERT)
            .unwrap()
            .insert("shaders/basic.frag", FRAG)
            .unwrap()
            .insert("shaders/post/bloom.frag", &b"bloom"[..])
            .unwrap()
            .insert("textures/noise.bin", vec![0u8, 1, 2, 3])
            .unwrap()
            .build()
            .into()
    }

    fn spirv_bytes(words: &[u32]) -> Vec<u8> {
        words.iter().flat_map(|w| w.to_ne_bytes()).collect()
    }

    // ── open ──────────────────────────────────────────────────────────────

    #[test]
    fn open_returns_exact_bytes() {
        let store = store();
        assert_eq!(store.open("shaders/basic.vert").unwrap(), VERT);
        assert_eq!(store.open("shaders/basic.frag").unwrap(), FRAG);
        // Repeated reads see the same content.
        assert_eq!(store.open("shaders/basic.vert").unwrap(), VERT);
    }

    #[test]
    fn open_missing_is_not_found() {
        let store = store();
        assert_eq!(
            store.open("shaders/missing.frag"),
            Err(AssetError::NotFound {
                path: "shaders/missing.frag".into()
            })
        );
    }

    #[test]
    fn open_is_exact_match() {
        let store = store();
        assert!(store.open("./shaders/basic.vert").is_err());
        assert!(store.open("Shaders/basic.vert").is_err());
        assert!(store.open("shaders").is_err());
        assert!(store.open("").is_err());
    }

    #[test]
    fn open_from_many_threads() {
        let store = store();
        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..100 {
                        assert_eq!(store.open("shaders/basic.frag").unwrap(), FRAG);
                    }
                });
            }
        });
    }

    #[test]
    fn open_str_rejects_binary() {
        let bundle = ResourceBundle::builder()
            .insert("bad.glsl", vec![0xffu8, 0xfe])
            .unwrap()
            .build();
        let store = AssetStore::new(bundle);
        assert!(matches!(store.open_str("bad.glsl"), Err(AssetError::NotUtf8 { .. })));
    }

    // ── list ──────────────────────────────────────────────────────────────

    #[test]
    fn list_direct_children_in_build_order() {
        let store = store();
        let paths: Vec<&str> = store.list("shaders/*").collect();
        assert_eq!(paths, ["shaders/basic.vert", "shaders/basic.frag"]);
    }

    #[test]
    fn list_subtree() {
        let store = store();
        let paths: Vec<&str> = store.list("shaders/").collect();
        assert_eq!(
            paths,
            ["shaders/basic.vert", "shaders/basic.frag", "shaders/post/bloom.frag"]
        );
    }

    #[test]
    fn list_is_restartable_and_stable() {
        let store = store();
        let paths = store.list("**/*.frag");
        let first: Vec<&str> = paths.clone().collect();
        let second: Vec<&str> = paths.collect();
        let third: Vec<&str> = store.list("**/*.frag").collect();
        assert_eq!(first, ["shaders/basic.frag", "shaders/post/bloom.frag"]);
        assert_eq!(first, second);
        assert_eq!(first, third);
    }

    #[test]
    fn list_no_match_is_empty() {
        assert_eq!(store().list("models/*").count(), 0);
    }

    // ── spirv ─────────────────────────────────────────────────────────────

    #[test]
    fn open_spirv_accepts_module() {
        let words = [SPIRV_MAGIC, 0x0001_0000, 0, 1, 0];
        let store: AssetStore = ResourceBundle::builder()
            .insert("shaders/basic.vert.spv", spirv_bytes(&words))
            .unwrap()
            .build()
            .into();

        assert_eq!(&*store.open_spirv("shaders/basic.vert.spv").unwrap(), &words);
    }

    #[test]
    fn open_spirv_rejects_bad_magic() {
        let store: AssetStore = ResourceBundle::builder()
            .insert("x.spv", spirv_bytes(&[0xdead_beef, 0]))
            .unwrap()
            .build()
            .into();

        assert!(matches!(
            store.open_spirv("x.spv"),
            Err(AssetError::InvalidSpirv { reason: "bad magic number", .. })
        ));
    }

    #[test]
    fn open_spirv_rejects_bad_length() {
        let mut bytes = spirv_bytes(&[SPIRV_MAGIC]);
        bytes.push(0);
        let store: AssetStore = ResourceBundle::builder()
            .insert("odd.spv", bytes)
            .unwrap()
            .insert("empty.spv", Vec::<u8>::new())
            .unwrap()
            .build()
            .into();

        assert!(matches!(store.open_spirv("odd.spv"), Err(AssetError::InvalidSpirv { .. })));
        assert!(matches!(store.open_spirv("empty.spv"), Err(AssetError::InvalidSpirv { .. })));
        assert!(matches!(store.open_spirv("nope.spv"), Err(AssetError::NotFound { .. })));
    }
}
