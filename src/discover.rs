use std::path::{Path, PathBuf};

use glob::{glob, Pattern};
use log::{debug, warn};

use crate::error::BuildError;
use crate::stage::ShaderStage;

/// A shader file found under the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub stage: ShaderStage,
}

/// Lazily walks `root` recursively and yields every file whose extension is a
/// known shader stage. Entries come out in alphabetical order at each
/// directory level, so two runs over the same tree produce the same sequence.
///
/// Unreadable entries are logged and skipped, as are non-shader files.
pub fn discover(root: &Path) -> Result<impl Iterator<Item = SourceFile>, BuildError> {
    let pattern = format!("{}/**/*", Pattern::escape(&root.to_string_lossy()));
    let paths = glob(&pattern)?;

    Ok(paths.filter_map(|entry| {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                warn!("Skipping unreadable entry {}: {}", e.path().display(), e.error());
                return None;
            }
        };
        if !path.is_file() {
            return None;
        }
        match ShaderStage::from_path(&path) {
            Some(stage) => {
                debug!("Found {} shader {}", stage, path.display());
                Some(SourceFile { path, stage })
            }
            None => {
                debug!("Ignoring {}", path.display());
                None
            }
        }
    }))
}
