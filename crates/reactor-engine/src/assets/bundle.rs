use std::borrow::Cow;
use std::collections::HashMap;

use super::BundleError;

/// One file of the bundle: a relative `/`-separated path and its bytes.
///
/// Assets are created once while the bundle is assembled and never change
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedAsset {
    path: Box<str>,
    content: Cow<'static, [u8]>,
}

impl EmbeddedAsset {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// The complete, read-only set of embedded assets.
///
/// Paths are unique. Iteration follows build order, which is the order assets
/// were inserted into the [`BundleBuilder`].
#[derive(Debug, Clone, Default)]
pub struct ResourceBundle {
    assets: Vec<EmbeddedAsset>,
    index: HashMap<Box<str>, usize>,
}

impl ResourceBundle {
    pub fn builder() -> BundleBuilder {
        BundleBuilder::default()
    }

    pub fn get(&self, path: &str) -> Option<&EmbeddedAsset> {
        self.index.get(path).map(|&i| &self.assets[i])
    }

    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Assets in build order.
    pub fn iter(&self) -> std::slice::Iter<'_, EmbeddedAsset> {
        self.assets.iter()
    }
}

impl<'a> IntoIterator for &'a ResourceBundle {
    type Item = &'a EmbeddedAsset;
    type IntoIter = std::slice::Iter<'a, EmbeddedAsset>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Assembles a [`ResourceBundle`].
///
/// This is the only write path; once [`build`](Self::build) returns, the
/// bundle cannot be changed.
#[derive(Debug, Default)]
pub struct BundleBuilder {
    bundle: ResourceBundle,
}

impl BundleBuilder {
    /// Adds an asset. Paths must be relative, `/`-separated and free of `.`
    /// and `..` segments; inserting the same path twice is an error.
    pub fn insert(
        mut self,
        path: impl Into<String>,
        content: impl Into<Cow<'static, [u8]>>,
    ) -> Result<Self, BundleError> {
        let path = path.into();
        validate_path(&path)?;

        if self.bundle.index.contains_key(path.as_str()) {
            return Err(BundleError::DuplicatePath { path });
        }

        let path: Box<str> = path.into_boxed_str();
        let slot = self.bundle.assets.len();
        self.bundle.index.insert(path.clone(), slot);
        self.bundle.assets.push(EmbeddedAsset {
            path,
            content: content.into(),
        });
        Ok(self)
    }

    pub fn build(self) -> ResourceBundle {
        self.bundle
    }
}

fn validate_path(path: &str) -> Result<(), BundleError> {
    let reason = if path.is_empty() {
        Some("empty path")
    } else if path.starts_with('/') {
        Some("path must be relative")
    } else if path.contains('\\') {
        Some("path must use '/' separators")
    } else if path.split('/').any(str::is_empty) {
        Some("empty path segment")
    } else if path.split('/').any(|s| s == "." || s == "..") {
        Some("'.' and '..' segments are not allowed")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(BundleError::InvalidPath {
            path: path.to_owned(),
            reason,
        }),
        None => Ok(()),
    }
}
