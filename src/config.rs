use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const SDK_VAR: &str = "VULKAN_SDK";
pub const DEFAULT_SHADER_ROOT: &str = "Engine/Graphics/Vulkan/Shaders";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first job that does not compile.
    #[default]
    FailFast,
    /// Attempt every job and report all failures at the end.
    KeepGoing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root: PathBuf,
    pub compiler: PathBuf,
    pub debug_symbols: bool,
    pub policy: FailurePolicy,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>, compiler: impl Into<PathBuf>) -> Self {
        Config {
            root: root.into(),
            compiler: compiler.into(),
            debug_symbols: false,
            policy: FailurePolicy::default(),
        }
    }

    /// Builds a validated config before any shader is touched. Fails when the
    /// compiler cannot be located or the root is not a directory.
    pub fn resolve(
        root: impl Into<PathBuf>,
        override_path: Option<&Path>,
        sdk: Option<OsString>,
    ) -> Result<Self, ConfigError> {
        let compiler = resolve_compiler(override_path, sdk)?;
        let config = Config::new(root, compiler);
        config.validate()?;
        Ok(config)
    }

    pub fn with_debug_symbols(mut self, debug_symbols: bool) -> Self {
        self.debug_symbols = debug_symbols;
        self
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.root.is_dir() {
            return Err(ConfigError::RootNotDirectory {
                path: self.root.clone(),
            });
        }
        Ok(())
    }
}

/// An explicit path wins; otherwise the compiler lives at `<sdk>/bin/glslc`.
pub fn resolve_compiler(
    override_path: Option<&Path>,
    sdk: Option<OsString>,
) -> Result<PathBuf, ConfigError> {
    if let Some(path) = override_path {
        return Ok(path.to_path_buf());
    }
    match sdk {
        Some(sdk) if !sdk.is_empty() => Ok(PathBuf::from(sdk)
            .join("bin")
            .join(format!("glslc{}", env::consts::EXE_SUFFIX))),
        _ => Err(ConfigError::MissingSdk { var: SDK_VAR }),
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;
    use std::path::{Path, PathBuf};

    use super::{resolve_compiler, Config, FailurePolicy};
    use crate::discover::tests::TempTree;
    use crate::error::ConfigError;

    #[test]
    fn compiler_under_sdk_bin() {
        let path = resolve_compiler(None, Some(OsString::from("/opt/vulkan"))).unwrap();
        assert!(path.starts_with("/opt/vulkan/bin"));
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("glslc"));
    }

    #[test]
    fn missing_sdk_is_a_configuration_error() {
        let err = resolve_compiler(None, None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingSdk { var: "VULKAN_SDK" }));
        assert!(err.to_string().contains("VULKAN_SDK"));
    }

    #[test]
    fn empty_sdk_counts_as_missing() {
        assert!(resolve_compiler(None, Some(OsString::new())).is_err());
    }

    #[test]
    fn override_wins_even_without_sdk() {
        let path = resolve_compiler(Some(Path::new("/usr/bin/glslc")), None).unwrap();
        assert_eq!(path, PathBuf::from("/usr/bin/glslc"));
    }

    #[test]
    fn defaults_to_fail_fast_without_debug_symbols() {
        let config = Config::new("shaders", "glslc");
        assert_eq!(config.policy, FailurePolicy::FailFast);
        assert!(!config.debug_symbols);
    }

    #[test]
    fn resolve_checks_compiler_before_root() {
        let err = Config::resolve("/no/such/root", None, None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingSdk { .. }));

        let tree = TempTree::new(&[]);
        let config = Config::resolve(tree.path(), None, Some("/sdk".into())).unwrap();
        assert_eq!(config.root, tree.path());
        assert!(config.compiler.starts_with("/sdk/bin"));
    }

    #[test]
    fn root_must_be_a_directory() {
        let tree = TempTree::new(&["a.vert"]);
        assert!(Config::new(tree.path(), "glslc").validate().is_ok());
        let err = Config::new(tree.path().join("a.vert"), "glslc")
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::RootNotDirectory { .. }));
        assert!(Config::new(tree.path().join("missing"), "glslc")
            .validate()
            .is_err());
    }
}
