use std::fmt;

/// Programmable pipeline stage a shader asset is meant for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Geometry,
    TessControl,
    TessEvaluation,
    Compute,
}

impl ShaderStage {
    /// Infers the stage from a path's extension.
    ///
    /// Recognizes the glslang conventions (`.vert`, `.frag`, `.geom`, `.tesc`,
    /// `.tese`, `.comp`), optionally followed by `.spv` for compiled bytecode.
    pub fn from_path(path: &str) -> Option<Self> {
        let name = path.rsplit('/').next().unwrap_or(path);
        let name = name.strip_suffix(".spv").unwrap_or(name);
        let (_, ext) = name.rsplit_once('.')?;

        match ext {
            "vert" => Some(Self::Vertex),
            "frag" => Some(Self::Fragment),
            "geom" => Some(Self::Geometry),
            "tesc" => Some(Self::TessControl),
            "tese" => Some(Self::TessEvaluation),
            "comp" => Some(Self::Compute),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Vertex => "vert",
            Self::Fragment => "frag",
            Self::Geometry => "geom",
            Self::TessControl => "tesc",
            Self::TessEvaluation => "tese",
            Self::Compute => "comp",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_extensions() {
        assert_eq!(ShaderStage::from_path("shaders/basic.vert"), Some(ShaderStage::Vertex));
        assert_eq!(ShaderStage::from_path("shaders/basic.frag"), Some(ShaderStage::Fragment));
        assert_eq!(ShaderStage::from_path("cull.comp"), Some(ShaderStage::Compute));
    }

    #[test]
    fn bytecode_extensions() {
        assert_eq!(ShaderStage::from_path("shaders/basic.vert.spv"), Some(ShaderStage::Vertex));
        assert_eq!(ShaderStage::from_path("shaders/terrain.tese.spv"), Some(ShaderStage::TessEvaluation));
    }

    #[test]
    fn unknown_extensions() {
        assert_eq!(ShaderStage::from_path("shaders/common.glsl"), None);
        assert_eq!(ShaderStage::from_path("shaders/module.spv"), None);
        assert_eq!(ShaderStage::from_path("shaders.vert/readme"), None);
        assert_eq!(ShaderStage::from_path("vert"), None);
    }
}
