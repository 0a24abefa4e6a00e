use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::discover::SourceFile;
use crate::stage::ShaderStage;

pub const OUTPUT_SUFFIX: &str = ".spv";
pub const RAY_TRACING_TARGET_ENV: &str = "--target-env=vulkan1.2";

/// One unit of work for the compiler: `compiler <input> -o <output> <flags..>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub flags: Vec<String>,
}

impl CompileJob {
    pub fn new(source: &SourceFile, debug_symbols: bool) -> Self {
        CompileJob {
            input: source.path.clone(),
            output: output_path(&source.path),
            flags: build_flags(source.stage, debug_symbols),
        }
    }
}

/// `shaders/a.vert` becomes `shaders/a.vert.spv`. The source extension stays.
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}

/// Extra compiler flags for a stage.
///
/// `debug_symbols` is accepted but has no effect on the flags; `-g` is never
/// emitted. The driver warns once when it is set.
pub fn build_flags(stage: ShaderStage, _debug_symbols: bool) -> Vec<String> {
    let mut flags = Vec::new();
    if stage.is_ray_tracing() {
        flags.push(RAY_TRACING_TARGET_ENV.to_owned());
    }
    flags
}
