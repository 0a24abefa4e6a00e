use std::fmt::{Display, Formatter};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Compute,
    Geometry,
    TessControl,
    TessEvaluation,
    RayGen,
    RayClosestHit,
    RayMiss,
}

impl ShaderStage {
    pub const ALL: [ShaderStage; 9] = [
        ShaderStage::Vertex,
        ShaderStage::Fragment,
        ShaderStage::Compute,
        ShaderStage::Geometry,
        ShaderStage::TessControl,
        ShaderStage::TessEvaluation,
        ShaderStage::RayGen,
        ShaderStage::RayClosestHit,
        ShaderStage::RayMiss,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vert",
            ShaderStage::Fragment => "frag",
            ShaderStage::Compute => "comp",
            ShaderStage::Geometry => "geom",
            ShaderStage::TessControl => "tesc",
            ShaderStage::TessEvaluation => "tese",
            ShaderStage::RayGen => "rgen",
            ShaderStage::RayClosestHit => "rchit",
            ShaderStage::RayMiss => "rmiss",
        }
    }

    pub fn from_extension(ext: &str) -> Option<ShaderStage> {
        Self::ALL.into_iter().find(|stage| stage.extension() == ext)
    }

    /// Classifies a file by its last extension. `foo.vert` is a vertex shader,
    /// `foo.vert.spv` and `foo.VERT` are not shaders at all.
    pub fn from_path(path: &Path) -> Option<ShaderStage> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Ray tracing stages need a newer target environment than the rest.
    pub fn is_ray_tracing(&self) -> bool {
        matches!(
            self,
            ShaderStage::RayGen | ShaderStage::RayClosestHit | ShaderStage::RayMiss
        )
    }
}

impl Display for ShaderStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}
