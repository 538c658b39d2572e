use std::borrow::Cow;

use super::{GL_CORE_ENTRY_POINTS, GL_DEBUG_ENTRY_POINTS, GlVersion};

/// Parameters for binding the GL function table.
///
/// Keep this structure small. The defaults describe an OpenGL 4.1 core
/// context, which is what the bundled shaders target.
#[derive(Debug, Clone)]
pub struct GlInit {
    /// Entry points that must resolve; any miss fails the bind.
    pub required: Cow<'static, [&'static str]>,

    /// Entry points resolved when available.
    ///
    /// Misses are logged at debug level only.
    pub optional: Cow<'static, [&'static str]>,

    /// Minimum driver version, checked through `glGetString(GL_VERSION)`.
    ///
    /// `None` skips the query entirely. When set, `glGetString` must be among
    /// the required entry points.
    pub min_version: Option<GlVersion>,
}

impl Default for GlInit {
    fn default() -> Self {
        Self {
            required: Cow::Borrowed(GL_CORE_ENTRY_POINTS),
            optional: Cow::Borrowed(GL_DEBUG_ENTRY_POINTS),
            min_version: Some(GlVersion::new(4, 1)),
        }
    }
}

impl GlInit {
    /// A config that only requires `required` and skips the version check.
    pub fn with_required(required: &'static [&'static str]) -> Self {
        Self {
            required: Cow::Borrowed(required),
            optional: Cow::Borrowed(&[]),
            min_version: None,
        }
    }
}
