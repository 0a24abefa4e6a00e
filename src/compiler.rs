use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::InvocationError;
use crate::job::CompileJob;

/// What the compiler said about one job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilerOutput {
    /// `None` when the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CompilerOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Anything that turns a [`CompileJob`] into an exit status. Implementations
/// block until the job is finished.
pub trait Compiler {
    fn compile(&self, job: &CompileJob) -> Result<CompilerOutput, InvocationError>;
}

/// The `glslc` executable, run as a subprocess.
#[derive(Debug, Clone)]
pub struct Glslc {
    executable: PathBuf,
}

impl Glslc {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Glslc {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn arguments(job: &CompileJob) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            job.input.clone().into_os_string(),
            "-o".into(),
            job.output.clone().into_os_string(),
        ];
        args.extend(job.flags.iter().map(OsString::from));
        args
    }
}

impl Compiler for Glslc {
    fn compile(&self, job: &CompileJob) -> Result<CompilerOutput, InvocationError> {
        let output = Command::new(&self.executable)
            .args(Self::arguments(job))
            .output()
            .map_err(|source| InvocationError {
                program: self.executable.clone(),
                source,
            })?;

        Ok(CompilerOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
